use bevy::prelude::*;
use crate::shared::*;

/// Get the facing-direction offset as a grid delta. Grid rows grow
/// downward, so Down is +y.
pub fn facing_offset(facing: &Facing) -> IVec2 {
    match facing {
        Facing::Up => IVec2::new(0, -1),
        Facing::Down => IVec2::new(0, 1),
        Facing::Left => IVec2::new(-1, 0),
        Facing::Right => IVec2::new(1, 0),
    }
}

impl PlayerState {
    /// Direction of the last movement. The horizontal axis wins only when it
    /// strictly dominates; ties fall through to the vertical axis.
    pub fn facing(&self) -> Option<Facing> {
        let h = self.heading;
        if h.x.abs() > h.y.abs() {
            Some(if h.x > 0.0 { Facing::Right } else { Facing::Left })
        } else if h.y > 0.0 {
            Some(Facing::Down)
        } else if h.y < 0.0 {
            Some(Facing::Up)
        } else {
            None
        }
    }

    /// Axis-aligned box covering the player sprite, anchored at `position`.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.position, self.position + Vec2::splat(PLAYER_SIZE))
    }

    /// Grid cell containing `position`.
    pub fn tile_position(&self) -> IVec2 {
        world_to_grid(self.position)
    }

    /// The cell adjacent to the player in the facing direction, or the
    /// player's own cell if they have never moved.
    pub fn facing_tile(&self) -> IVec2 {
        let offset = self.facing().map(|f| facing_offset(&f)).unwrap_or(IVec2::ZERO);
        self.tile_position() + offset
    }
}

/// Convert a world position to grid coordinates.
pub fn world_to_grid(position: Vec2) -> IVec2 {
    (position / TILE_SIZE).floor().as_ivec2()
}

/// Adds items granted by other domains (shops, gifts) to the inventory.
pub fn add_items_to_inventory(
    mut pickup_events: EventReader<ItemPickupEvent>,
    mut inventory: ResMut<Inventory>,
) {
    for event in pickup_events.read() {
        if inventory.add(event.item, event.quantity) {
            info!(
                "[Player] Picked up {} x{}",
                event.item.display_name(),
                event.quantity
            );
        } else {
            warn!(
                "[Player] Inventory full, dropped {} x{}",
                event.item.display_name(),
                event.quantity
            );
        }
    }
}
