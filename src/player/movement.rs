use bevy::prelude::*;
use crate::shared::*;

impl PlayerState {
    /// Integrates one frame of movement intent.
    ///
    /// Moving normalises the intent so diagonals are no faster, drains energy
    /// and records the heading. Standing still zeroes velocity and recovers
    /// energy; the heading is kept so the player still faces the same way.
    pub fn integrate(&mut self, movement: Vec2, elapsed_secs: f32) {
        match movement.try_normalize() {
            Some(direction) => {
                self.velocity = direction * self.move_speed;
                self.heading = self.velocity;
                self.position += self.velocity * elapsed_secs;
                self.energy = (self.energy - self.movement_energy_per_second * elapsed_secs).max(0.0);
            }
            None => {
                self.velocity = Vec2::ZERO;
                self.recover_energy(self.idle_recovery_per_second * elapsed_secs);
            }
        }
    }
}

/// Core movement system. Applies the host's movement intent to the player.
pub fn player_movement(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut player: ResMut<PlayerState>,
    mut exhausted: Local<bool>,
) {
    player.integrate(input.move_axis, time.delta_secs());

    let now_exhausted = player.energy <= 0.0;
    if now_exhausted && !*exhausted {
        warn!("[Player] Out of energy, rest to recover");
    }
    *exhausted = now_exhausted;
}
