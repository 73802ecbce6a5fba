use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            dispatch_player_input
                .in_set(SimSet::Input)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            toggle_pause
                .in_set(SimSet::Input)
                .run_if(in_state(GameState::Playing).or(in_state(GameState::Paused))),
        )
        .add_systems(Last, clear_one_shot_input);
    }
}

/// The single point where host input becomes game actions.
///
/// `move_axis` is left for the movement system; slot selection is applied
/// here and the action triggers become `FarmActionEvent`s aimed at the tile
/// the player faces.
fn dispatch_player_input(
    input: Res<PlayerInput>,
    player: Res<PlayerState>,
    mut inventory: ResMut<Inventory>,
    mut action_events: EventWriter<FarmActionEvent>,
) {
    if let Some(slot) = input.select_slot {
        if !inventory.select_slot(slot) {
            warn!("[Input] No hotbar slot {}", slot);
        }
    }

    let target = player.facing_tile();
    if input.use_item {
        action_events.send(FarmActionEvent {
            action: FarmAction::UseSelectedItem,
            target,
        });
    }
    if input.harvest {
        action_events.send(FarmActionEvent {
            action: FarmAction::Harvest,
            target,
        });
    }
}

fn toggle_pause(
    input: Res<PlayerInput>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !input.toggle_pause {
        return;
    }
    match state.get() {
        GameState::Playing => {
            info!("[Input] Paused");
            next_state.set(GameState::Paused);
        }
        GameState::Paused => {
            info!("[Input] Resumed");
            next_state.set(GameState::Playing);
        }
        GameState::Loading => {}
    }
}

/// One-shot triggers last a single frame; held movement persists until the
/// host changes it.
fn clear_one_shot_input(mut input: ResMut<PlayerInput>) {
    input.use_item = false;
    input.harvest = false;
    input.select_slot = None;
    input.toggle_pause = false;
}
