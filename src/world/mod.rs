//! World domain: farm generation and the day/night light level.

pub mod lighting;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::shared::*;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DayNightTint>()
            .add_systems(OnEnter(GameState::Loading), generate_world.in_set(LoadSet::Setup))
            .add_systems(
                Update,
                lighting::update_day_night_tint
                    .in_set(SimSet::Presentation)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

impl FarmGrid {
    /// Builds a reproducible farm: the same seed always yields the same
    /// layout. Mostly grass with patches of dirt, stone and water.
    pub fn generate(width: i32, height: i32, seed: u64) -> Self {
        let mut grid = FarmGrid::filled(width, height, TileKind::Grass);
        let mut rng = StdRng::seed_from_u64(seed);

        for y in 0..grid.height {
            for x in 0..grid.width {
                let noise: f64 = rng.gen();
                let tile = if noise < 0.70 {
                    TileKind::Grass
                } else if noise < 0.85 {
                    TileKind::Dirt
                } else if noise < 0.95 {
                    TileKind::Stone
                } else {
                    TileKind::Water
                };
                grid.set_tile(x, y, tile);
            }
        }

        grid
    }
}

/// Watered time a crop needs, derived from its daily growth fraction.
/// Rounded to whole milliseconds so 0.2/day is exactly five days, and never
/// shorter than 1 ms so a fresh crop is never born ripe.
pub fn crop_maturity(growth_per_day: f64) -> Duration {
    if growth_per_day <= 0.0 || !growth_per_day.is_finite() {
        return Duration::from_secs(DEFAULT_CROP_MATURITY_SECS);
    }
    let millis = (SECONDS_PER_DAY * 1000.0 / growth_per_day).round();
    Duration::from_millis((millis as u64).max(1))
}

/// Generates the farm from config when the game loads.
fn generate_world(config: Res<SimConfig>, mut commands: Commands) {
    let grid = FarmGrid::generate(config.world_width, config.world_height, config.world_seed)
        .with_crop_maturity(crop_maturity(config.crop_growth_per_day));

    info!(
        "[World] Generated {}x{} farm (seed {}): {} grass, {} dirt, {} stone, {} water; crops mature after {:?} watered",
        grid.width(),
        grid.height(),
        config.world_seed,
        grid.count_tiles(TileKind::Grass),
        grid.count_tiles(TileKind::Dirt),
        grid.count_tiles(TileKind::Stone),
        grid.count_tiles(TileKind::Water),
        grid.crop_maturity(),
    );

    commands.insert_resource(grid);
}
