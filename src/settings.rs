//! Host/demo settings and preferences
//!
//! Persisted as JSON next to the binary, separately from any simulation
//! state. Loading never fails hard: a missing or corrupt file logs a warning
//! and falls back to defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Preferences for the headless demo driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed seed for reproducible runs; `None` rolls a fresh one
    pub seed: Option<u64>,
    /// Fixed timestep handed to the simulation, in milliseconds
    pub tick_ms: f32,
    /// How long to keep ticking past game-over so effects settle
    pub run_out_ms: f32,
    /// Let the built-in autopilot play; otherwise the session just drifts
    pub autopilot: bool,
    /// Start with the hitbox overlay flag set
    pub debug_overlay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: 1000.0 / 60.0,
            run_out_ms: 2_000.0,
            autopilot: true,
            debug_overlay: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
