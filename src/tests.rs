use crate::app::GalleryApp;
use crate::errors::{GalleryError, Result};
use crate::gallery::ImageSet;
use crate::gesture::{SwipeTracker, SwipeTrigger};
use crate::menu::{MenuState, OverlayTarget};
use crate::navigation::Direction;
use crate::preload::{Fetcher, PreloadPolicy};
use crate::settings::Settings;
use crate::viewer::{ViewerEvent, ViewerState};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Serves every path except the broken ones and counts calls per path.
#[derive(Default)]
struct CountingFetcher {
    broken: Vec<PathBuf>,
    calls: Mutex<HashMap<PathBuf, usize>>,
}

impl CountingFetcher {
    fn calls_for(&self, path: &Path) -> usize {
        self.calls.lock().unwrap().get(path).copied().unwrap_or(0)
    }
}

impl Fetcher for CountingFetcher {
    fn fetch(&self, path: &Path) -> Result<Vec<u8>> {
        *self.calls.lock().unwrap().entry(path.to_path_buf()).or_default() += 1;
        if self.broken.iter().any(|p| p == path) {
            return Err(GalleryError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(vec![0xFF, 0xD8, 0xFF])
    }
}

/// Holds every fetch until `open` is called.
#[derive(Default)]
struct HeldFetcher {
    released: Mutex<bool>,
    signal: Condvar,
}

impl HeldFetcher {
    fn open(&self) {
        *self.released.lock().unwrap() = true;
        self.signal.notify_all();
    }
}

impl Fetcher for HeldFetcher {
    fn fetch(&self, _path: &Path) -> Result<Vec<u8>> {
        let mut released = self.released.lock().unwrap();
        while !*released {
            released = self.signal.wait(released).unwrap();
        }
        Ok(vec![0xFF, 0xD8, 0xFF])
    }
}

fn portfolio() -> ImageSet {
    ImageSet::portfolio(Path::new("/site"))
}

fn app_with(policy: PreloadPolicy, fetcher: Arc<dyn Fetcher>) -> GalleryApp {
    let settings = Settings {
        preload_policy: policy,
        ..Settings::default()
    };
    GalleryApp::with_fetcher(egui::Context::default(), settings, portfolio(), fetcher)
}

/// Pumps preload results into the app until `done` holds.
fn pump_until(app: &mut GalleryApp, done: impl Fn(&GalleryApp) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        app.process_preload_messages();
        if done(app) {
            return;
        }
        assert!(Instant::now() < deadline, "preload did not settle in time");
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn resident(app: &GalleryApp, index: usize) -> bool {
    let path = app.images.get(index).unwrap().to_path_buf();
    app.is_resident(&path)
}

fn viewer() -> ViewerState {
    ViewerState::new(13, 768.0, SwipeTracker::default())
}

#[test]
fn test_swipe_threshold_through_viewer() {
    let mut state = viewer();

    state.handle(ViewerEvent::TouchStart { x: 300.0 });
    let outcome = state.handle(ViewerEvent::TouchEnd { x: 251.0 });
    assert!(!outcome.index_changed);
    assert_eq!(state.current_index(), 0);

    state.handle(ViewerEvent::TouchStart { x: 300.0 });
    let outcome = state.handle(ViewerEvent::TouchEnd { x: 249.0 });
    assert!(outcome.index_changed);
    assert_eq!(state.current_index(), 1);

    state.handle(ViewerEvent::TouchStart { x: 300.0 });
    state.handle(ViewerEvent::TouchEnd { x: 351.0 });
    assert_eq!(state.current_index(), 0);

    state.handle(ViewerEvent::TouchStart { x: 300.0 });
    state.handle(ViewerEvent::TouchEnd { x: 351.0 });
    assert_eq!(state.current_index(), 12);
}

#[test]
fn test_touch_move_steps_once_per_gesture() {
    let mut state = ViewerState::new(13, 768.0, SwipeTracker::new(50.0, SwipeTrigger::OnMove));
    state.handle(ViewerEvent::TouchStart { x: 400.0 });
    for x in [380.0, 340.0, 300.0, 200.0, 100.0] {
        state.handle(ViewerEvent::TouchMove { x });
    }
    state.handle(ViewerEvent::TouchEnd { x: 100.0 });
    assert_eq!(state.current_index(), 1);
}

#[test]
fn test_click_zones_follow_layout_and_menu() {
    let mut state = viewer();

    state.handle(ViewerEvent::Resize { width: 1440.0 });
    state.handle(ViewerEvent::ClickZone(Direction::Left));
    assert_eq!(state.current_index(), 12);
    state.handle(ViewerEvent::ClickZone(Direction::Right));
    assert_eq!(state.current_index(), 0);

    state.handle(ViewerEvent::ToggleMenu);
    state.handle(ViewerEvent::ClickZone(Direction::Right));
    assert_eq!(state.current_index(), 0);
    state.handle(ViewerEvent::ToggleMenu);

    let outcome = state.handle(ViewerEvent::Resize { width: 768.0 });
    assert!(outcome.layout_changed);
    assert!(state.is_mobile());
    state.handle(ViewerEvent::ClickZone(Direction::Right));
    assert_eq!(state.current_index(), 0);

    let outcome = state.handle(ViewerEvent::Resize { width: 700.0 });
    assert!(!outcome.layout_changed);
    state.handle(ViewerEvent::Resize { width: 769.0 });
    assert!(!state.is_mobile());
}

#[test]
fn test_menu_events() {
    let mut state = viewer();
    assert_eq!(state.menu(), MenuState::Closed);

    state.handle(ViewerEvent::ToggleMenu);
    let outcome = state.handle(ViewerEvent::OverlayClick(OverlayTarget::Content));
    assert!(!outcome.menu_changed);
    assert!(state.menu().is_open());

    let outcome = state.handle(ViewerEvent::OverlayClick(OverlayTarget::Background));
    assert!(outcome.menu_changed);
    assert!(!state.menu().is_open());

    state.handle(ViewerEvent::ToggleMenu);
    state.handle(ViewerEvent::CloseMenu);
    assert!(!state.menu().is_open());
    let outcome = state.handle(ViewerEvent::CloseMenu);
    assert!(!outcome.menu_changed);
}

#[test]
fn test_menu_blocks_swipes_and_keys() {
    let mut state = viewer();
    state.handle(ViewerEvent::ToggleMenu);

    state.handle(ViewerEvent::TouchStart { x: 300.0 });
    state.handle(ViewerEvent::TouchEnd { x: 0.0 });
    state.handle(ViewerEvent::Key(Direction::Right));
    assert_eq!(state.current_index(), 0);

    state.handle(ViewerEvent::ToggleMenu);
    state.handle(ViewerEvent::Key(Direction::Left));
    assert_eq!(state.current_index(), 12);
}

#[test]
fn test_startup_preloads_window() {
    let fetcher = Arc::new(CountingFetcher::default());
    let mut app = app_with(PreloadPolicy::default(), fetcher.clone());

    pump_until(&mut app, |app| {
        resident(app, 12) && resident(app, 0) && resident(app, 1)
    });
    assert!(!resident(&app, 2));
    assert_eq!(fetcher.calls_for(app.images.get(0).unwrap()), 1);
    assert!(!app.loading_gate);
}

#[test]
fn test_navigation_preloads_next_window() {
    let fetcher = Arc::new(CountingFetcher::default());
    let mut app = app_with(PreloadPolicy::default(), fetcher.clone());
    pump_until(&mut app, |app| resident(app, 0) && resident(app, 1) && resident(app, 12));

    app.dispatch(ViewerEvent::Key(Direction::Right));
    assert_eq!(app.viewer.current_index(), 1);
    pump_until(&mut app, |app| resident(app, 2));

    // Already resident images are not fetched again
    assert_eq!(fetcher.calls_for(app.images.get(1).unwrap()), 1);
    assert_eq!(fetcher.calls_for(app.images.get(0).unwrap()), 1);
}

#[test]
fn test_failed_preload_is_isolated_and_not_retried() {
    let broken = portfolio().get(1).unwrap().to_path_buf();
    let fetcher = Arc::new(CountingFetcher {
        broken: vec![broken.clone()],
        ..Default::default()
    });
    let mut app = app_with(PreloadPolicy::Ring { radius: 5 }, fetcher.clone());

    let expected = [0, 2, 3, 4, 5, 8, 9, 10, 11, 12];
    pump_until(&mut app, |app| {
        app.failed.contains(&broken) && expected.iter().all(|&i| resident(app, i))
    });
    assert!(!resident(&app, 1));

    app.dispatch(ViewerEvent::Key(Direction::Right));
    app.dispatch(ViewerEvent::Key(Direction::Left));
    app.dispatch(ViewerEvent::Key(Direction::Right));
    pump_until(&mut app, |app| app.preloader.in_flight_count() == 0 && resident(app, 6));

    assert_eq!(fetcher.calls_for(&broken), 1);
    assert_eq!(app.viewer.current_index(), 1);
}

#[test]
fn test_gating_policy_holds_until_all_resolved() {
    let fetcher = Arc::new(HeldFetcher::default());
    let mut app = app_with(PreloadPolicy::All, fetcher.clone());

    assert!(app.loading_gate);
    assert_eq!(app.preloader.in_flight_count(), 13);
    app.process_preload_messages();
    assert!(app.loading_gate);

    fetcher.open();
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.preloader.in_flight_count() > 0 {
        assert!(Instant::now() < deadline, "fetches did not finish in time");
        std::thread::sleep(Duration::from_millis(5));
    }

    // One frame applies at most 10 of the 13 queued results
    app.process_preload_messages();
    assert!(app.loading_gate);
    assert!(!app.gate_pending.is_empty());

    loop {
        app.process_preload_messages();
        if !app.loading_gate {
            break;
        }
        assert!(Instant::now() < deadline, "gate never lifted");
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!((0..13).all(|i| resident(&app, i)));
    assert!(app.gate_pending.is_empty());
}

#[test]
fn test_gate_counts_failed_startup_fetches() {
    let broken = PathBuf::from("/site/image/1 (4).jpg");
    let fetcher = Arc::new(CountingFetcher {
        broken: vec![broken.clone()],
        ..CountingFetcher::default()
    });
    let mut app = app_with(PreloadPolicy::All, fetcher);

    pump_until(&mut app, |app| !app.loading_gate);
    assert!(app.failed.contains(&broken));
    assert!((0..13).filter(|&i| i != 3).all(|i| resident(&app, i)));
}

#[test]
fn test_leading_policy_only_fetches_at_startup() {
    let fetcher = Arc::new(CountingFetcher::default());
    let mut app = app_with(PreloadPolicy::Leading { count: 10 }, fetcher.clone());
    pump_until(&mut app, |app| (0..10).all(|i| resident(app, i)));
    assert!(!resident(&app, 10));

    // Stepping back only asks for the newly shown image
    app.dispatch(ViewerEvent::Key(Direction::Left));
    pump_until(&mut app, |app| resident(app, 12));
    assert!(!resident(&app, 11));
    assert!(!resident(&app, 10));
}

#[test]
fn test_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("settings.json");

    let settings = Settings {
        preload_policy: PreloadPolicy::Ring { radius: 5 },
        swipe_trigger: SwipeTrigger::OnMove,
        image_root: PathBuf::from("/srv/portfolio"),
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.preload_policy, PreloadPolicy::Ring { radius: 5 });
    assert_eq!(loaded.swipe_trigger, SwipeTrigger::OnMove);
    assert_eq!(loaded.image_root, PathBuf::from("/srv/portfolio"));
    assert_eq!(loaded.profile, settings.profile);
}

#[test]
fn test_settings_partial_and_invalid() {
    let dir = tempfile::tempdir().unwrap();

    let partial = dir.path().join("partial.json");
    std::fs::write(&partial, r#"{ "swipe_threshold": 80.0 }"#).unwrap();
    let loaded = Settings::load_from(&partial).unwrap();
    assert_eq!(loaded.swipe_threshold, 80.0);
    assert_eq!(loaded.mobile_breakpoint, 768.0);
    assert_eq!(loaded.preload_policy, PreloadPolicy::Window { radius: 1 });
    assert_eq!(loaded.profile.mailto(), "mailto:luozhou519@gmail.com");

    let malformed = dir.path().join("malformed.json");
    std::fs::write(&malformed, "{ not json").unwrap();
    assert_eq!(Settings::load_from(&malformed).unwrap_err().error_code(), "JSON_ERROR");

    let out_of_range = dir.path().join("range.json");
    std::fs::write(&out_of_range, r#"{ "desktop_scale": 1.5 }"#).unwrap();
    assert_eq!(
        Settings::load_from(&out_of_range).unwrap_err().error_code(),
        "SETTINGS_ERROR"
    );

    for body in [
        r#"{ "mobile_breakpoint": -1.0 }"#,
        r#"{ "window_size": [0.0, 860.0] }"#,
        r#"{ "window_size": [1280.0, -5.0] }"#,
    ] {
        let path = dir.path().join("layout.json");
        std::fs::write(&path, body).unwrap();
        assert_eq!(
            Settings::load_from(&path).unwrap_err().error_code(),
            "SETTINGS_ERROR",
            "{body}"
        );
    }
}
