//! Crop planting and growth.

use bevy::prelude::*;
use std::time::Duration;

use crate::shared::*;

impl Crop {
    /// Grows the crop by `elapsed` if its cell is watered. Unwatered crops
    /// neither grow nor decay. Growth stops at maturity.
    pub fn advance(&mut self, elapsed: Duration, is_watered: bool) {
        if !is_watered || self.is_ready_to_harvest() {
            return;
        }
        self.watered = (self.watered + elapsed).min(self.maturity);
    }
}

impl FarmGrid {
    pub fn can_plant(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.get_tile(x, y).is_soil() && !self.crops.contains_key(&(x, y))
    }

    /// Plants a fresh crop. Returns true if the crop was planted.
    pub fn plant_crop(&mut self, x: i32, y: i32, kind: CropKind) -> bool {
        if !self.can_plant(x, y) {
            return false;
        }
        self.crops.insert((x, y), Crop::new(kind, self.crop_maturity));
        true
    }

    /// Advances every crop by `elapsed`, using its cell's current watered
    /// state. Returns the cells whose crop became ready during this call.
    pub fn update(&mut self, elapsed: Duration) -> Vec<(i32, i32)> {
        let width = self.width;
        let tiles = &self.tiles;
        let mut ripened = Vec::new();

        for (&(x, y), crop) in self.crops.iter_mut() {
            let watered = tiles[y as usize * width as usize + x as usize] == TileKind::WateredSoil;
            let was_ready = crop.is_ready_to_harvest();
            crop.advance(elapsed, watered);
            if !was_ready && crop.is_ready_to_harvest() {
                ripened.push((x, y));
            }
        }

        ripened
    }
}

/// Grows every planted crop by the frame's elapsed time.
pub fn grow_crops(time: Res<Time>, mut farm: ResMut<FarmGrid>) {
    if farm.crop_count() == 0 {
        return;
    }

    for (x, y) in farm.update(time.delta()) {
        if let Some(crop) = farm.get_crop(x, y) {
            info!("[Farming] {} at ({}, {}) is ready to harvest", crop.kind.name(), x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(86_400);

    fn watered_plot() -> FarmGrid {
        let mut grid = FarmGrid::filled(1, 1, TileKind::Dirt);
        grid.till_soil(0, 0);
        grid.water_soil(0, 0);
        grid
    }

    #[test]
    fn test_watered_crop_gains_a_fifth_per_day() {
        let mut crop = Crop::new(CropKind::Wheat, Duration::from_secs(DEFAULT_CROP_MATURITY_SECS));
        crop.advance(DAY, true);
        assert!((crop.growth() - 0.2).abs() < 1e-6);
        assert!(!crop.is_ready_to_harvest());
    }

    #[test]
    fn test_unwatered_crop_stalls() {
        let mut crop = Crop::new(CropKind::Corn, Duration::from_secs(DEFAULT_CROP_MATURITY_SECS));
        crop.advance(DAY, true);
        let before = crop.growth();
        crop.advance(DAY * 3, false);
        assert_eq!(crop.growth(), before);
    }

    #[test]
    fn test_growth_is_clamped_at_one() {
        let mut crop = Crop::new(CropKind::Tomato, Duration::from_secs(DEFAULT_CROP_MATURITY_SECS));
        crop.advance(DAY * 20, true);
        assert_eq!(crop.growth(), 1.0);
        assert!(crop.is_ready_to_harvest());
    }

    #[test]
    fn test_growth_is_monotonic() {
        let mut crop = Crop::new(CropKind::Carrot, Duration::from_secs(DEFAULT_CROP_MATURITY_SECS));
        let mut last = crop.growth();
        for i in 0..200u32 {
            crop.advance(Duration::from_secs(3_600), i % 3 != 0);
            let g = crop.growth();
            assert!(g >= last);
            assert!((0.0..=1.0).contains(&g));
            last = g;
        }
    }

    #[test]
    fn test_plant_requires_soil_and_empty_cell() {
        let mut grid = FarmGrid::filled(2, 1, TileKind::Grass);
        assert!(!grid.plant_crop(0, 0, CropKind::Wheat), "cannot plant on grass");

        grid.till_soil(0, 0);
        assert!(grid.plant_crop(0, 0, CropKind::Wheat));
        assert!(!grid.can_plant(0, 0), "cell already occupied");
        assert!(!grid.plant_crop(0, 0, CropKind::Corn));
        assert_eq!(grid.get_crop(0, 0).map(|c| c.kind), Some(CropKind::Wheat));

        assert!(!grid.plant_crop(-1, 0, CropKind::Wheat));
    }

    #[test]
    fn test_can_plant_on_watered_soil() {
        let mut grid = watered_plot();
        assert!(grid.plant_crop(0, 0, CropKind::Carrot));
        assert_eq!(grid.get_crop(0, 0).map(|c| c.growth()), Some(0.0));
    }

    #[test]
    fn test_update_grows_only_watered_cells() {
        let mut grid = FarmGrid::filled(2, 1, TileKind::Dirt);
        grid.till_soil(0, 0);
        grid.till_soil(1, 0);
        grid.water_soil(0, 0);
        grid.plant_crop(0, 0, CropKind::Wheat);
        grid.plant_crop(1, 0, CropKind::Corn);

        grid.update(DAY);

        assert!(grid.get_crop(0, 0).map(|c| c.growth()).unwrap_or(0.0) > 0.0);
        assert_eq!(grid.get_crop(1, 0).map(|c| c.growth()), Some(0.0));
    }

    #[test]
    fn test_growth_stops_after_soil_dries() {
        let mut grid = watered_plot();
        grid.plant_crop(0, 0, CropKind::Wheat);
        grid.update(DAY);
        grid.on_new_day();
        let after_one_day = grid.get_crop(0, 0).map(|c| c.growth());

        grid.update(DAY);
        assert_eq!(grid.get_crop(0, 0).map(|c| c.growth()), after_one_day);
    }

    #[test]
    fn test_update_reports_ripened_cells_once() {
        let mut grid = watered_plot();
        grid.plant_crop(0, 0, CropKind::Wheat);

        let ripened = grid.update(DAY * 5);
        assert_eq!(ripened, vec![(0, 0)]);
        assert!(grid.update(DAY).is_empty());
    }
}
