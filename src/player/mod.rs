mod movement;
mod interaction;
pub mod inventory;
pub mod tools;

use bevy::prelude::*;
use crate::shared::*;

pub use interaction::facing_offset;
pub use tools::perform_action;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // -- Reset the player from config when the game loads --
        app.add_systems(OnEnter(GameState::Loading), spawn_player.in_set(LoadSet::Setup));

        app.add_systems(
            Update,
            movement::player_movement
                .in_set(SimSet::Actor)
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(
            Update,
            (tools::handle_farm_actions, interaction::add_items_to_inventory)
                .chain()
                .in_set(SimSet::Actions)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

fn spawn_player(config: Res<SimConfig>, mut player: ResMut<PlayerState>) {
    *player = PlayerState::from_config(&config);
    info!(
        "[Player] Spawned at ({:.0}, {:.0}) with {:.0} energy",
        player.position.x, player.position.y, player.energy
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Energy
// ═══════════════════════════════════════════════════════════════════════════

impl PlayerState {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            position: Vec2::new(config.spawn_x, config.spawn_y),
            energy: config.max_energy,
            max_energy: config.max_energy,
            move_speed: config.move_speed,
            movement_energy_per_second: config.movement_energy_per_second,
            idle_recovery_per_second: config.idle_recovery_per_second,
            ..default()
        }
    }

    /// Spends `amount` energy if the player has at least that much.
    /// Returns false and leaves energy untouched otherwise.
    pub fn consume_energy(&mut self, amount: f32) -> bool {
        if !self.has_energy(amount) {
            return false;
        }
        self.energy = (self.energy - amount).max(0.0);
        true
    }

    /// Recovers energy up to the maximum.
    pub fn recover_energy(&mut self, amount: f32) {
        self.energy = (self.energy + amount).min(self.max_energy);
    }

    pub fn has_energy(&self, amount: f32) -> bool {
        self.energy >= amount
    }

    /// Energy as a fraction in [0.0, 1.0].
    pub fn energy_percentage(&self) -> f32 {
        if self.max_energy <= 0.0 {
            return 0.0;
        }
        (self.energy / self.max_energy).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_energy_succeeds_when_enough() {
        let mut player = PlayerState::default();
        assert!(player.consume_energy(5.0));
        assert_eq!(player.energy, 95.0);
    }

    #[test]
    fn test_consume_energy_fails_without_mutation() {
        let mut player = PlayerState { energy: 4.0, ..default() };
        assert!(!player.consume_energy(5.0));
        assert_eq!(player.energy, 4.0);
    }

    #[test]
    fn test_consume_exact_amount_reaches_zero() {
        let mut player = PlayerState { energy: 3.0, ..default() };
        assert!(player.consume_energy(3.0));
        assert_eq!(player.energy, 0.0);
        assert!(!player.has_energy(0.5));
    }

    #[test]
    fn test_recover_energy_clamps_at_max() {
        let mut player = PlayerState { energy: 99.5, ..default() };
        player.recover_energy(10.0);
        assert_eq!(player.energy, player.max_energy);
    }

    #[test]
    fn test_energy_percentage() {
        let player = PlayerState { energy: 25.0, ..default() };
        assert!((player.energy_percentage() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_from_config_applies_tuning() {
        let config = SimConfig {
            max_energy: 50.0,
            move_speed: 90.0,
            spawn_x: 64.0,
            spawn_y: 96.0,
            ..default()
        };
        let player = PlayerState::from_config(&config);
        assert_eq!(player.energy, 50.0);
        assert_eq!(player.max_energy, 50.0);
        assert_eq!(player.move_speed, 90.0);
        assert_eq!(player.position, Vec2::new(64.0, 96.0));
    }
}
