//! Harvest rules: mature crops come off the grid.

use crate::shared::*;

impl FarmGrid {
    pub fn can_harvest(&self, x: i32, y: i32) -> bool {
        self.get_crop(x, y).is_some_and(|crop| crop.is_ready_to_harvest())
    }

    /// Removes a mature crop and returns its kind. The cell goes back to
    /// tilled soil, consuming any water. Immature or missing crops are left
    /// alone and yield `None`.
    pub fn harvest_crop(&mut self, x: i32, y: i32) -> Option<CropKind> {
        if !self.can_harvest(x, y) {
            return None;
        }
        let crop = self.crops.remove(&(x, y))?;
        self.set_tile(x, y, TileKind::TilledSoil);
        Some(crop.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_full_crop_lifecycle_on_single_cell() {
        let mut grid = FarmGrid::filled(1, 1, TileKind::Dirt);

        assert!(grid.till_soil(0, 0));
        assert_eq!(grid.get_tile(0, 0), TileKind::TilledSoil);
        assert!(grid.water_soil(0, 0));
        assert_eq!(grid.get_tile(0, 0), TileKind::WateredSoil);
        assert!(grid.plant_crop(0, 0, CropKind::Wheat));
        assert_eq!(grid.get_crop(0, 0).map(|c| c.growth()), Some(0.0));

        // Five days of watered time, in one-day slices.
        for _ in 0..5 {
            grid.update(Duration::from_secs(86_400));
        }

        assert_eq!(grid.get_crop(0, 0).map(|c| c.growth()), Some(1.0));
        assert!(grid.can_harvest(0, 0));
        assert_eq!(grid.harvest_crop(0, 0), Some(CropKind::Wheat));
        assert_eq!(grid.get_tile(0, 0), TileKind::TilledSoil);
        assert!(grid.get_crop(0, 0).is_none());
    }

    #[test]
    fn test_immature_harvest_changes_nothing() {
        let mut grid = FarmGrid::filled(1, 1, TileKind::TilledSoil);
        grid.water_soil(0, 0);
        grid.plant_crop(0, 0, CropKind::Corn);
        grid.update(Duration::from_secs(86_400));

        let before = grid.get_crop(0, 0).copied();
        assert!(!grid.can_harvest(0, 0));
        assert_eq!(grid.harvest_crop(0, 0), None);
        assert_eq!(grid.get_crop(0, 0).copied(), before);
        assert_eq!(grid.get_tile(0, 0), TileKind::WateredSoil);
    }

    #[test]
    fn test_harvest_empty_or_out_of_bounds() {
        let mut grid = FarmGrid::filled(1, 1, TileKind::TilledSoil);
        assert_eq!(grid.harvest_crop(0, 0), None);
        assert_eq!(grid.harvest_crop(3, 3), None);
        assert!(!grid.can_harvest(-1, -1));
    }
}
