use crate::errors::{GalleryError, Result};
use crate::gesture::{SwipeTrigger, DEFAULT_SWIPE_THRESHOLD};
use crate::preload::PreloadPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Gallery
    /// Directory holding `image/1 (k).jpg`
    pub image_root: PathBuf,
    pub preload_policy: PreloadPolicy,

    // Input
    pub swipe_threshold: f32,
    pub swipe_trigger: SwipeTrigger,

    // Layout
    pub mobile_breakpoint: f32,
    /// Share of the viewport the image may use on desktop layouts
    pub desktop_scale: f32,
    pub window_size: (f32, f32),

    pub debug_logging: bool,

    pub profile: Profile,
}

/// Contact details shown in the menu overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub title: String,
    pub name: String,
    pub location: String,
    pub email: String,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    /// Link colour as `[r, g, b]`
    pub color: [u8; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from("."),
            preload_policy: PreloadPolicy::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            swipe_trigger: SwipeTrigger::OnRelease,
            mobile_breakpoint: 768.0,
            desktop_scale: 0.8,
            window_size: (1280.0, 860.0),
            debug_logging: false,
            profile: Profile::default(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            title: "Photographer".to_string(),
            name: "Luozhou".to_string(),
            location: "Based in Guangzhou".to_string(),
            email: "luozhou519@gmail.com".to_string(),
            links: vec![
                SocialLink {
                    label: "Instagram".to_string(),
                    url: "https://www.instagram.com/luozhou02".to_string(),
                    color: [0x00, 0x95, 0xf6],
                },
                SocialLink {
                    label: "Xiaohongshu".to_string(),
                    url: "https://www.xiaohongshu.com/user/profile/6218d7000000000010009443"
                        .to_string(),
                    color: [0xfe, 0x2c, 0x55],
                },
            ],
        }
    }
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "folio", "Folio")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Reads the user's settings file. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()
    }

    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Err(e) = self.save_to(&path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save settings");
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn validate(self) -> Result<Self> {
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold >= 0.0) {
            return Err(GalleryError::Settings {
                message: format!("swipe_threshold must be non-negative, got {}", self.swipe_threshold),
            });
        }
        if !(self.desktop_scale > 0.0 && self.desktop_scale <= 1.0) {
            return Err(GalleryError::Settings {
                message: format!("desktop_scale must be in (0, 1], got {}", self.desktop_scale),
            });
        }
        if !(self.mobile_breakpoint.is_finite() && self.mobile_breakpoint >= 0.0) {
            return Err(GalleryError::Settings {
                message: format!("mobile_breakpoint must be non-negative, got {}", self.mobile_breakpoint),
            });
        }
        let (width, height) = self.window_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GalleryError::Settings {
                message: format!("window_size must be positive, got {}x{}", width, height),
            });
        }
        Ok(self)
    }
}
