//! Homestead library crate: the farming simulation core as Bevy plugins.
//!
//! The binary crate (`main.rs`) runs it headless. This library exposes the
//! same modules so that `tests/` integration tests and external renderers can
//! import game types, systems, and resources without needing a window or GPU.

pub mod shared;
pub mod input;
pub mod calendar;
pub mod player;
pub mod farming;
pub mod world;
pub mod ui;
pub mod data;

use bevy::prelude::*;

use shared::*;

/// Everything the simulation needs: states, shared resources, events, frame
/// ordering and every domain plugin.
///
/// Insert a `SimConfig` before adding this plugin to override the defaults.
pub struct HomesteadPlugin;

impl Plugin for HomesteadPlugin {
    fn build(&self, app: &mut App) {
        app
            // Game state
            .init_state::<GameState>()
            // Shared resources
            .init_resource::<SimConfig>()
            .init_resource::<Calendar>()
            .init_resource::<FarmGrid>()
            .init_resource::<PlayerState>()
            .init_resource::<Inventory>()
            .init_resource::<PlayerInput>()
            // Events
            .add_event::<DayEndEvent>()
            .add_event::<SeasonChangeEvent>()
            .add_event::<FarmActionEvent>()
            .add_event::<ActionResolvedEvent>()
            .add_event::<CropHarvestedEvent>()
            .add_event::<ItemPickupEvent>()
            .add_event::<ItemRemovedEvent>()
            // Frame ordering
            .configure_sets(
                OnEnter(GameState::Loading),
                (LoadSet::Config, LoadSet::Setup).chain(),
            )
            .configure_sets(
                Update,
                (
                    SimSet::Input,
                    SimSet::Actor,
                    SimSet::Actions,
                    SimSet::Growth,
                    SimSet::Clock,
                    SimSet::DayEnd,
                    SimSet::Presentation,
                )
                    .chain(),
            )
            // Domain plugins
            .add_plugins((
                data::DataPlugin,
                calendar::CalendarPlugin,
                world::WorldPlugin,
                farming::FarmingPlugin,
                player::PlayerPlugin,
                input::InputPlugin,
                ui::UiPlugin,
            ));
    }
}
