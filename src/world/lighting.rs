//! Day/night ambient light level.
//!
//! Renderers multiply their tint by `DayNightTint::intensity`. The curve is a
//! night plateau, a one-hour dawn ramp from 6:00, full daylight, and a
//! one-hour dusk ramp ending at 20:00.

use bevy::prelude::*;

use crate::shared::*;

pub const NIGHT_LIGHT: f32 = 0.3;
pub const DAY_LIGHT: f32 = 1.0;

const DAWN_START: u16 = 360;
const DAWN_END: u16 = 420;
const DUSK_START: u16 = 1140;
const DUSK_END: u16 = 1200;

/// Linearly interpolate between two floats.
fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Light intensity for a minute of the day.
pub fn light_intensity_at(minute_of_day: u16) -> f32 {
    match minute_of_day {
        m if m < DAWN_START => NIGHT_LIGHT,
        m if m < DAWN_END => {
            let t = (m - DAWN_START) as f32 / (DAWN_END - DAWN_START) as f32;
            lerp_f32(NIGHT_LIGHT, DAY_LIGHT, t)
        }
        m if m < DUSK_START => DAY_LIGHT,
        m if m < DUSK_END => {
            let t = (m - DUSK_START) as f32 / (DUSK_END - DUSK_START) as f32;
            lerp_f32(DAY_LIGHT, NIGHT_LIGHT, t)
        }
        _ => NIGHT_LIGHT,
    }
}

impl Calendar {
    pub fn light_intensity(&self) -> f32 {
        light_intensity_at(self.minute_of_day)
    }
}

/// Every frame, publish the light level for the current time of day.
pub fn update_day_night_tint(calendar: Res<Calendar>, mut tint: ResMut<DayNightTint>) {
    tint.intensity = calendar.light_intensity();
}
