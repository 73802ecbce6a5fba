//! Farming domain: soil tilling, watering, planting, crop growth, harvest.
//!
//! The rules live on `FarmGrid` (split across the submodules by concern);
//! the systems here only drive them from frame time and calendar events.
//! Communicates with other domains exclusively through crate::shared events/resources.

use bevy::prelude::*;
use crate::shared::*;

pub mod soil;
pub mod crops;
pub mod harvest;
pub mod events_handler;

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app
            // ------------------------------------------------------------------
            // Per-frame growth: crops on watered soil accumulate growth
            // ------------------------------------------------------------------
            .add_systems(
                Update,
                crops::grow_crops
                    .in_set(SimSet::Growth)
                    .run_if(in_state(GameState::Playing)),
            )
            // ------------------------------------------------------------------
            // DayEnd processing: watered soil dries out overnight
            // ------------------------------------------------------------------
            .add_systems(
                Update,
                (events_handler::on_day_end, events_handler::on_season_change)
                    .in_set(SimSet::DayEnd)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
