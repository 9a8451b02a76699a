//! Presentation settings, persisted as JSON.
//!
//! Only how the window looks lives here; calculator state is never saved.

use deskcore::storage::{self, config_dir};
use deskcore::Palette;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::display::DisplayConfig;

/// Environment variable that points at an alternative settings file.
pub const CONFIG_ENV: &str = "DESKCALC_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    pub display: DisplayConfig,
    /// Inner window size in points.
    pub window_size: [f32; 2],
    pub resizable: bool,
    pub palette: Palette,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            window_size: [400.0, 500.0],
            resizable: false,
            palette: Palette::default(),
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => config_dir("deskcalc").join("settings.json"),
        }
    }

    /// Load from `path`, writing defaults there if nothing exists yet.
    /// Any problem yields defaults.
    pub fn load_or_init(path: &std::path::Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match storage::save_json(path, &settings) {
                Ok(()) => tracing::info!(path = %path.display(), "wrote default settings"),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not write default settings"),
            }
            return settings;
        }

        match storage::load_json::<Self>(path) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        Self::load_or_init(&Self::config_path())
    }

    /// Clamp values that would make the window unusable.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.display.max_chars == 0 {
            tracing::warn!("display.max_chars must be positive, using default");
            self.display.max_chars = defaults.display.max_chars;
        }
        if !self.window_size.iter().all(|v| v.is_finite() && *v >= 100.0) {
            tracing::warn!(size = ?self.window_size, "window_size too small, using default");
            self.window_size = defaults.window_size;
        }
        self
    }
}
