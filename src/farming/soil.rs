//! Soil tilling and watering rules.

use crate::shared::*;

impl FarmGrid {
    /// Overwrites a tile. Out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileKind) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = tile;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Hoe: till grass or dirt
    // ─────────────────────────────────────────────────────────────────────────

    pub fn can_till(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && matches!(self.get_tile(x, y), TileKind::Grass | TileKind::Dirt)
    }

    /// Returns true if the tile was tilled.
    pub fn till_soil(&mut self, x: i32, y: i32) -> bool {
        if !self.can_till(x, y) {
            return false;
        }
        self.set_tile(x, y, TileKind::TilledSoil);
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Watering Can: water tilled soil
    // ─────────────────────────────────────────────────────────────────────────

    pub fn can_water(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.get_tile(x, y) == TileKind::TilledSoil
    }

    /// Returns true if the tile was watered.
    pub fn water_soil(&mut self, x: i32, y: i32) -> bool {
        if !self.can_water(x, y) {
            return false;
        }
        self.set_tile(x, y, TileKind::WateredSoil);
        true
    }

    /// Dry every watered tile back to tilled. Crops are untouched; they stop
    /// growing until the cell is watered again.
    pub fn on_new_day(&mut self) -> usize {
        let mut dried = 0;
        for tile in self.tiles.iter_mut() {
            if *tile == TileKind::WateredSoil {
                *tile = TileKind::TilledSoil;
                dried += 1;
            }
        }
        dried
    }
}
