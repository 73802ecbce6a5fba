pub mod hud;

use bevy::prelude::*;
use crate::shared::*;

pub use hud::{HotbarEntry, HudSnapshot};

/// Keeps a renderer-agnostic HUD snapshot in sync with the simulation.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudSnapshot>();

        // ─── HUD, refreshed while playing or paused ───
        app.add_systems(
            Update,
            (
                hud::update_time_display,
                hud::update_energy_bar,
                hud::update_hotbar,
            )
                .in_set(SimSet::Presentation)
                .run_if(in_state(GameState::Playing).or(in_state(GameState::Paused))),
        );
    }
}
