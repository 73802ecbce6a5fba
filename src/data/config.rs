//! Simulation tuning loaded from RON.
//!
//! Every field is optional in the file; anything missing keeps its default.
//!
//! ```ron
//! (
//!     world_seed: 777,
//!     game_minute_millis: 10,
//!     crop_growth_per_day: 0.25,
//! )
//! ```

use bevy::prelude::*;
use std::fs;
use std::path::Path;
use crate::shared::*;

/// Environment variable naming a config file when no CLI argument is given.
pub const CONFIG_ENV_VAR: &str = "HOMESTEAD_CONFIG";

impl SimConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, String> {
        let config: SimConfig =
            ron::from_str(source).map_err(|e| format!("Config parse failed: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
        Self::from_ron_str(&source).map_err(|e| format!("{}: {}", path.display(), e))
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.world_width <= 0 || self.world_height <= 0 {
            return Err(format!(
                "world size must be positive, got {}x{}",
                self.world_width, self.world_height
            ));
        }
        if self.world_width > MAX_WORLD_DIMENSION || self.world_height > MAX_WORLD_DIMENSION {
            return Err(format!(
                "world size is limited to {}x{}, got {}x{}",
                MAX_WORLD_DIMENSION, MAX_WORLD_DIMENSION, self.world_width, self.world_height
            ));
        }
        if self.game_minute_millis == 0 {
            return Err("game_minute_millis must be at least 1".to_string());
        }
        if !(self.crop_growth_per_day.is_finite() && self.crop_growth_per_day > 0.0) {
            return Err(format!(
                "crop_growth_per_day must be positive, got {}",
                self.crop_growth_per_day
            ));
        }
        let rates = [
            ("move_speed", self.move_speed),
            ("max_energy", self.max_energy),
            ("movement_energy_per_second", self.movement_energy_per_second),
            ("idle_recovery_per_second", self.idle_recovery_per_second),
            ("tool_energy_cost", self.tool_energy_cost),
            ("harvest_energy_cost", self.harvest_energy_cost),
        ];
        for (name, value) in rates {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }
        Ok(())
    }

    /// Config from an explicit path, else `HOMESTEAD_CONFIG`, else defaults.
    /// Load failures are logged and fall back to defaults.
    pub fn from_path_or_env(path: Option<String>) -> Self {
        let Some(path) = path.or_else(|| std::env::var(CONFIG_ENV_VAR).ok()) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("[Data] Loaded config from {}", path);
                config
            }
            Err(e) => {
                warn!("[Data] {}; using defaults", e);
                Self::default()
            }
        }
    }
}
