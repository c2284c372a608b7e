use crate::reading::{ScrollDirection, ScrollSpeed};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Best-effort persisted reading preferences. Losing this file is never
/// an error; every field falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_scale_tenths: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_speed: Option<ScrollSpeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_direction: Option<ScrollDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_collapsed: Option<bool>,
}

pub fn prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mushaf").join("settings.toml"))
}

impl Preferences {
    pub fn load() -> Self {
        let Some(path) = prefs_path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(prefs) => {
                    debug!("Loaded preferences from {:?}", path);
                    prefs
                }
                Err(e) => {
                    warn!("Ignoring malformed preferences file: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) {
        let Some(path) = prefs_path() else {
            return;
        };
        self.save_to(&path);
    }

    pub fn save_to(&self, path: &std::path::Path) {
        let Ok(raw) = toml::to_string_pretty(self) else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Could not create preferences directory: {}", e);
                return;
            }
        }
        if let Err(e) = std::fs::write(path, raw) {
            warn!("Could not write preferences: {}", e);
        }
    }
}
