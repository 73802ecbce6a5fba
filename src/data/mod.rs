//! Data layer: settles the simulation config at startup.
//!
//! This plugin runs first in OnEnter(GameState::Loading) (`LoadSet::Config`),
//! so every domain setup system in `LoadSet::Setup` builds from a valid
//! config. It then transitions the game into GameState::Playing.

pub mod config;

use bevy::prelude::*;
use crate::shared::*;

pub use config::CONFIG_ENV_VAR;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data.in_set(LoadSet::Config));
    }
}

fn load_all_data(mut config: ResMut<SimConfig>, mut next_state: ResMut<NextState<GameState>>) {
    info!("[Data] Checking simulation config…");

    if let Err(e) = config.validate() {
        warn!("[Data] Invalid config ({}); using defaults", e);
        *config = SimConfig::default();
    }

    info!(
        "  World: {}x{} seed {}",
        config.world_width, config.world_height, config.world_seed
    );
    info!("  Game minute: {} ms", config.game_minute_millis);
    info!(
        "  Energy: max {:.0}, tool {:.0}, harvest {:.0}",
        config.max_energy, config.tool_energy_cost, config.harvest_energy_cost
    );
    info!("  Crop growth: {:.2}/day", config.crop_growth_per_day);

    info!("[Data] Ready, entering Playing");
    next_state.set(GameState::Playing);
}
