//! Game settings
//!
//! Tunables read from a JSON file by the driver. Missing fields fall back to
//! the classic values; bad files fall back to defaults entirely.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BALL_DX, MAX_BALL_DY};

/// Gameplay and driver tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lives at the start of each game
    pub starting_lives: u8,
    /// Ball velocity for a fresh game, per tick `[dx, dy]`
    pub serve_velocity: IVec2,
    /// Largest raw sample the input device reports
    pub input_max: i32,

    // === Driver ===
    /// Milliseconds between ticks (0 = run as fast as possible)
    pub tick_ms: u64,
    /// Seed for the demo autopilot's jitter
    pub demo_seed: u64,
    /// Stop the demo after this many ticks
    pub demo_max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            serve_velocity: IVec2::new(2, 5),
            input_max: 1023,

            tick_ms: 0,
            demo_seed: 0x5eed,
            demo_max_ticks: 200_000,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Clamp values the simulation cannot work with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.starting_lives = self.starting_lives.max(1);
        self.input_max = self.input_max.max(1);
        let IVec2 { x: dx, y: dy } = self.serve_velocity;
        self.serve_velocity.x = if dx == 0 {
            defaults.serve_velocity.x
        } else {
            dx.signum() * dx.saturating_abs().min(MAX_BALL_DX)
        };
        // Serve is downward toward the paddle
        self.serve_velocity.y = if dy == 0 {
            defaults.serve_velocity.y
        } else {
            dy.saturating_abs().min(MAX_BALL_DY)
        };
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {e}", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
