//! Handlers for cross-domain events: DayEndEvent, SeasonChangeEvent.

use bevy::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Day End
// ─────────────────────────────────────────────────────────────────────────────

/// Overnight farm processing. Runs once per DayEndEvent, so a coarse frame
/// that spans several days dries the soil once per day.
pub fn on_day_end(mut day_end_events: EventReader<DayEndEvent>, mut farm: ResMut<FarmGrid>) {
    for event in day_end_events.read() {
        let dried = farm.on_new_day();
        info!(
            "[Farming] Day {} {:?} Year {} ended, {} watered tiles dried, {} crops growing",
            event.day,
            event.season,
            event.year,
            dried,
            farm.crop_count()
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Season Change
// ─────────────────────────────────────────────────────────────────────────────

/// Seasons do not affect crops; this only reports what is still in the ground.
pub fn on_season_change(mut season_events: EventReader<SeasonChangeEvent>, farm: Res<FarmGrid>) {
    for event in season_events.read() {
        let ready = farm.crops().filter(|(_, c)| c.is_ready_to_harvest()).count();
        info!(
            "[Farming] {:?} of Year {} begins with {} crops planted ({} ready)",
            event.new_season,
            event.year,
            farm.crop_count(),
            ready
        );
    }
}
