//! Game settings and preferences
//!
//! Window and simulation-rate configuration consumed at launch; the core
//! itself never reads these after construction.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Launch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Window width in pixels (also the play-area width)
    pub window_width: u32,
    /// Window height in pixels (also the play-area height)
    pub window_height: u32,
    /// Fixed simulation rate in Hz (timers, alien AI, countdown)
    pub fixed_hz: u32,
    /// Frame rate cap
    pub fps_limit: u32,
    /// Session RNG seed; `None` seeds from the system clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1600,
            window_height: 900,
            fixed_hz: 60,
            fps_limit: 60,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            std::fs::write(path, json)?;
            log::info!("Settings saved");
        }
        Ok(())
    }

    /// Fixed timestep in seconds
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.fixed_hz as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let s = Settings::default();
        assert_eq!(s.fixed_hz, 60);
        assert_eq!(s.fps_limit, 60);
        assert!((s.fixed_dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load(Path::new("/nonexistent/settings.json"));
        assert_eq!(s.window_width, 1600);
        assert_eq!(s.window_height, 900);
    }
}
