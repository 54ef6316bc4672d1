use crate::gesture::SwipeTracker;
use crate::menu::{MenuState, OverlayTarget};
use crate::navigation::{advance, Direction};

/// Every way the user can act on the gallery view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    /// Click on the left or right half of the view (desktop only).
    ClickZone(Direction),
    Key(Direction),
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd { x: f32 },
    TouchCancel,
    ToggleMenu,
    OverlayClick(OverlayTarget),
    CloseMenu,
    /// Viewport width changed.
    Resize { width: f32 },
}

/// What a handled event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub index_changed: bool,
    pub menu_changed: bool,
    pub layout_changed: bool,
}

/// State of the gallery view. [`ViewerState::handle`] is the only way to
/// mutate it; the caller re-renders after every call.
#[derive(Debug, Clone)]
pub struct ViewerState {
    current_index: usize,
    total: usize,
    menu: MenuState,
    is_mobile: bool,
    mobile_breakpoint: f32,
    swipe: SwipeTracker,
}

impl ViewerState {
    pub fn new(total: usize, mobile_breakpoint: f32, swipe: SwipeTracker) -> Self {
        Self {
            current_index: 0,
            total: total.max(1),
            menu: MenuState::default(),
            is_mobile: false,
            mobile_breakpoint,
            swipe,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Click zones are live on desktop layouts while the menu is closed.
    pub fn click_zones_enabled(&self) -> bool {
        !self.is_mobile && !self.menu.is_open()
    }

    pub fn handle(&mut self, event: ViewerEvent) -> Outcome {
        let mut outcome = Outcome::default();
        match event {
            ViewerEvent::ClickZone(direction) => {
                if self.click_zones_enabled() {
                    outcome.index_changed = self.step(direction);
                }
            }
            ViewerEvent::Key(direction) => {
                if !self.menu.is_open() {
                    outcome.index_changed = self.step(direction);
                }
            }
            // The overlay sits above the image and swallows touches
            ViewerEvent::TouchStart { x } => {
                if !self.menu.is_open() {
                    self.swipe.touch_start(x);
                }
            }
            ViewerEvent::TouchMove { x } => {
                if let Some(direction) = self.swipe.touch_move(x) {
                    outcome.index_changed = self.step(direction);
                }
            }
            ViewerEvent::TouchEnd { x } => {
                if let Some(direction) = self.swipe.touch_end(x) {
                    outcome.index_changed = self.step(direction);
                }
            }
            ViewerEvent::TouchCancel => self.swipe.touch_cancel(),
            ViewerEvent::ToggleMenu => {
                self.menu.toggle();
                outcome.menu_changed = true;
            }
            ViewerEvent::OverlayClick(target) => {
                let before = self.menu;
                self.menu.overlay_clicked(target);
                outcome.menu_changed = before != self.menu;
            }
            ViewerEvent::CloseMenu => {
                outcome.menu_changed = self.menu.is_open();
                self.menu.close();
            }
            ViewerEvent::Resize { width } => {
                let is_mobile = width <= self.mobile_breakpoint;
                outcome.layout_changed = is_mobile != self.is_mobile;
                self.is_mobile = is_mobile;
            }
        }
        outcome
    }

    fn step(&mut self, direction: Direction) -> bool {
        let next = advance(direction, self.current_index, self.total);
        tracing::debug!(from = self.current_index, to = next, ?direction, "navigate");
        let changed = next != self.current_index;
        self.current_index = next;
        changed
    }
}
