//! Calendar domain: the heartbeat of Homestead.
//!
//! Responsible for:
//! - Advancing game time (minutes, days, seasons, years) from real frame time
//! - Sending DayEndEvent and SeasonChangeEvent on rollover
//! - Pausing / unpausing time based on GameState
//! - Formatting the clock for display

use bevy::prelude::*;
use std::time::Duration;

use crate::shared::*;

pub struct CalendarPlugin;

impl Plugin for CalendarPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(OnEnter(GameState::Loading), configure_calendar.in_set(LoadSet::Setup))
            // Pause time whenever we leave Playing state
            .add_systems(OnEnter(GameState::Playing), resume_time)
            .add_systems(OnExit(GameState::Playing), pause_time)
            // Core time tick, only while Playing and not paused
            .add_systems(
                Update,
                tick_time
                    .in_set(SimSet::Clock)
                    .run_if(in_state(GameState::Playing))
                    .run_if(time_not_paused),
            );
    }
}

/// What changed when a day ended. Built by `advance_one_minute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRollover {
    pub ended_day: u8,
    pub ended_season: Season,
    pub ended_year: u32,
    pub new_day: u8,
    pub new_season: Season,
    pub new_year: u32,
}

impl DayRollover {
    pub fn season_changed(&self) -> bool {
        self.ended_season != self.new_season
    }

    pub fn year_changed(&self) -> bool {
        self.ended_year != self.new_year
    }
}

impl Calendar {
    /// Advances the clock by `elapsed` real time. Returns true if at least
    /// one new day began.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.advance_with(elapsed, |_| {})
    }

    /// Like `advance`, calling `on_rollover` once for every day that ends.
    ///
    /// The accumulator is drained in a loop, so a coarse tick covering many
    /// game-minutes loses none of them.
    pub fn advance_with(
        &mut self,
        elapsed: Duration,
        mut on_rollover: impl FnMut(&DayRollover),
    ) -> bool {
        if self.time_paused {
            return false;
        }

        // Guard against a zero minute length, which would never drain.
        if self.minute_length.is_zero() {
            self.minute_length = Duration::from_millis(DEFAULT_GAME_MINUTE_MILLIS);
        }

        self.elapsed_real += elapsed;

        let mut new_day = false;
        while self.elapsed_real >= self.minute_length {
            self.elapsed_real -= self.minute_length;
            if let Some(rollover) = self.advance_one_minute() {
                new_day = true;
                on_rollover(&rollover);
            }
        }
        new_day
    }

    /// Advances the calendar by exactly one game-minute.
    /// Handles minute -> day -> season -> year rollovers.
    pub fn advance_one_minute(&mut self) -> Option<DayRollover> {
        self.minute_of_day += 1;
        if self.minute_of_day < MINUTES_PER_DAY {
            return None;
        }

        let ended_day = self.day;
        let ended_season = self.season;
        let ended_year = self.year;

        self.minute_of_day = DAY_START_MINUTE;
        self.day += 1;

        if self.day > DAYS_PER_SEASON {
            self.day = 1;
            self.season = self.season.next();

            // Year rollover happens when Spring begins again
            if self.season == Season::Spring {
                self.year += 1;
            }
        }

        Some(DayRollover {
            ended_day,
            ended_season,
            ended_year,
            new_day: self.day,
            new_season: self.season,
            new_year: self.year,
        })
    }

    /// `HH:MM AM/PM`, with hour 0 shown as 12.
    pub fn formatted_time(&self) -> String {
        let hour = self.hour();
        let ampm = if hour >= 12 { "PM" } else { "AM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02} {}", display_hour, self.minute(), ampm)
    }

    /// `Spring 3, Year 1`
    pub fn formatted_date(&self) -> String {
        format!("{} {}, Year {}", self.season_name(), self.day, self.year)
    }
}

// ─── Run Conditions ───────────────────────────────────────────────────────────

fn time_not_paused(calendar: Res<Calendar>) -> bool {
    !calendar.time_paused
}

// ─── State transition hooks ───────────────────────────────────────────────────

fn configure_calendar(config: Res<SimConfig>, mut calendar: ResMut<Calendar>) {
    calendar.minute_length = Duration::from_millis(config.game_minute_millis.max(1));
    info!(
        "[Calendar] {} real ms per game-minute, starting {} {}",
        calendar.minute_length.as_millis(),
        calendar.formatted_date(),
        calendar.formatted_time()
    );
}

fn resume_time(mut calendar: ResMut<Calendar>) {
    calendar.time_paused = false;
    info!(
        "[Calendar] Time resumed at {} {}",
        calendar.formatted_time(),
        calendar.formatted_date()
    );
}

fn pause_time(mut calendar: ResMut<Calendar>) {
    calendar.time_paused = true;
    info!("[Calendar] Time paused");
}

// ─── Main time-tick system ────────────────────────────────────────────────────

/// Feeds the frame's real delta into the calendar and relays every rollover
/// as a DayEndEvent (plus a SeasonChangeEvent when the season turns).
pub fn tick_time(
    time: Res<Time>,
    mut calendar: ResMut<Calendar>,
    mut day_end_writer: EventWriter<DayEndEvent>,
    mut season_writer: EventWriter<SeasonChangeEvent>,
) {
    calendar.advance_with(time.delta(), |rollover| {
        day_end_writer.send(DayEndEvent {
            day: rollover.ended_day,
            season: rollover.ended_season,
            year: rollover.ended_year,
        });
        info!(
            "[Calendar] Day ended: Day {} {:?} Year {}",
            rollover.ended_day, rollover.ended_season, rollover.ended_year
        );

        if rollover.season_changed() {
            season_writer.send(SeasonChangeEvent {
                new_season: rollover.new_season,
                year: rollover.new_year,
            });
            info!(
                "[Calendar] Season changed: {:?} -> {:?} (Year {})",
                rollover.ended_season, rollover.new_season, rollover.new_year
            );
        }
        if rollover.year_changed() {
            info!("[Calendar] New Year! Year {}", rollover.new_year);
        }
    });
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_millis(DEFAULT_GAME_MINUTE_MILLIS);

    fn snapshot(cal: &Calendar) -> (u16, u8, Season, u32) {
        (cal.minute_of_day, cal.day, cal.season, cal.year)
    }

    #[test]
    fn test_default_starts_at_six_am() {
        let cal = Calendar::default();
        assert_eq!(cal.minute_of_day, 360);
        assert_eq!(cal.hour(), 6);
        assert_eq!(cal.formatted_time(), "06:00 AM");
        assert_eq!(cal.formatted_date(), "Spring 1, Year 1");
    }

    #[test]
    fn test_sub_minute_ticks_accumulate() {
        let mut cal = Calendar::default();
        cal.advance(Duration::from_millis(30));
        assert_eq!(cal.minute_of_day, 360);
        cal.advance(Duration::from_millis(30));
        assert_eq!(cal.minute_of_day, 361);
        assert_eq!(cal.elapsed_real, Duration::from_millis(10));
    }

    #[test]
    fn test_coarse_tick_drains_every_minute() {
        let mut cal = Calendar::default();
        cal.advance(MINUTE * 100);
        assert_eq!(cal.minute_of_day, 460);
        assert_eq!(cal.elapsed_real, Duration::ZERO);
    }

    #[test]
    fn test_split_ticks_match_single_tick() {
        let total = Duration::from_millis(123_456_789);

        let mut whole = Calendar::default();
        whole.advance(total);

        let mut pieces = Calendar::default();
        let slices = [
            Duration::from_millis(1),
            Duration::from_millis(49),
            Duration::from_millis(16),
            Duration::from_millis(17),
            Duration::from_millis(999),
            Duration::from_secs(3600),
        ];
        let mut remaining = total;
        let mut i = 0;
        while !remaining.is_zero() {
            let step = slices[i % slices.len()].min(remaining);
            pieces.advance(step);
            remaining -= step;
            i += 1;
        }

        assert_eq!(snapshot(&whole), snapshot(&pieces));
        assert_eq!(whole.elapsed_real, pieces.elapsed_real);
    }

    #[test]
    fn test_day_rollover_resets_to_six_am() {
        let mut cal = Calendar::default();
        cal.minute_of_day = 1439;
        let new_day = cal.advance(MINUTE);
        assert!(new_day);
        assert_eq!(cal.minute_of_day, 360, "rollover must reset to 6:00 AM, never 0");
        assert_eq!(cal.day, 2);
    }

    #[test]
    fn test_no_rollover_reports_false() {
        let mut cal = Calendar::default();
        assert!(!cal.advance(MINUTE * 10));
    }

    #[test]
    fn test_season_change_at_day_28() {
        let mut cal = Calendar::default();
        cal.day = 28;
        cal.minute_of_day = 1439;
        let mut rollovers = Vec::new();
        cal.advance_with(MINUTE, |r| rollovers.push(*r));

        assert_eq!(cal.day, 1);
        assert_eq!(cal.season, Season::Summer);
        assert_eq!(rollovers.len(), 1);
        assert!(rollovers[0].season_changed());
        assert_eq!(rollovers[0].ended_day, 28);
        assert_eq!(rollovers[0].ended_season, Season::Spring);
    }

    #[test]
    fn test_year_increment_after_winter() {
        let mut cal = Calendar::default();
        cal.day = 28;
        cal.season = Season::Winter;
        cal.minute_of_day = 1439;
        cal.advance(MINUTE);
        assert_eq!(cal.day, 1);
        assert_eq!(cal.season, Season::Spring);
        assert_eq!(cal.year, 2);
    }

    #[test]
    fn test_full_year_cycles_seasons_in_order() {
        let mut cal = Calendar::default();
        let minutes_per_day = (MINUTES_PER_DAY - DAY_START_MINUTE) as u32;
        let mut seasons = Vec::new();

        for _ in 0..(DAYS_PER_SEASON as u32 * 4) {
            cal.advance_with(MINUTE * minutes_per_day, |r| {
                if r.season_changed() {
                    seasons.push(r.new_season);
                }
            });
        }

        assert_eq!(
            seasons,
            vec![Season::Summer, Season::Fall, Season::Winter, Season::Spring]
        );
        assert_eq!(cal.year, 2);
        assert_eq!(cal.day, 1);
        assert_eq!(cal.minute_of_day, 360);
    }

    #[test]
    fn test_one_callback_per_rollover_on_huge_tick() {
        let mut cal = Calendar::default();
        let minutes_per_day = (MINUTES_PER_DAY - DAY_START_MINUTE) as u32;
        let mut count = 0;
        cal.advance_with(MINUTE * minutes_per_day * 3, |_| count += 1);
        assert_eq!(count, 3);
        assert_eq!(cal.day, 4);
        assert_eq!(cal.minute_of_day, 360);
    }

    #[test]
    fn test_paused_calendar_ignores_time() {
        let mut cal = Calendar::default();
        cal.time_paused = true;
        assert!(!cal.advance(MINUTE * 5000));
        assert_eq!(cal.minute_of_day, 360);
        assert_eq!(cal.elapsed_real, Duration::ZERO);
    }

    #[test]
    fn test_formatted_time_noon_and_midnight() {
        let mut cal = Calendar::default();
        cal.minute_of_day = 0;
        assert_eq!(cal.formatted_time(), "12:00 AM");
        cal.minute_of_day = 12 * 60 + 5;
        assert_eq!(cal.formatted_time(), "12:05 PM");
        cal.minute_of_day = 23 * 60 + 59;
        assert_eq!(cal.formatted_time(), "11:59 PM");
    }

    #[test]
    fn test_total_days_elapsed() {
        let mut cal = Calendar::default();
        assert_eq!(cal.total_days_elapsed(), 0);

        cal.day = 28;
        cal.season = Season::Fall;
        cal.year = 2;
        assert_eq!(cal.total_days_elapsed(), 112 + 56 + 27);
    }

    #[test]
    fn test_season_next() {
        assert_eq!(Season::Spring.next(), Season::Summer);
        assert_eq!(Season::Summer.next(), Season::Fall);
        assert_eq!(Season::Fall.next(), Season::Winter);
        assert_eq!(Season::Winter.next(), Season::Spring);
    }
}
