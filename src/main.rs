use std::collections::BTreeMap;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use serde::Serialize;

use homestead::shared::*;
use homestead::ui::HudSnapshot;
use homestead::HomesteadPlugin;

/// Number of in-game days to simulate before printing a summary and exiting.
/// Unset means run until interrupted.
const DAYS_ENV_VAR: &str = "HOMESTEAD_DAYS";

#[derive(Resource)]
struct RunLength {
    days: Option<u32>,
    ended: u32,
}

#[derive(Serialize)]
struct PlayerSummary {
    x: f32,
    y: f32,
    energy: f32,
    max_energy: f32,
}

#[derive(Serialize)]
struct CropSummary {
    kind: CropKind,
    x: i32,
    y: i32,
    growth: f32,
}

#[derive(Serialize)]
struct RunSummary<'a> {
    calendar: &'a Calendar,
    player: PlayerSummary,
    inventory: &'a Inventory,
    tiles: BTreeMap<&'static str, usize>,
    crops: Vec<CropSummary>,
    hud: &'a HudSnapshot,
}

fn main() {
    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
    )
    .add_plugins((LogPlugin::default(), StatesPlugin));

    // After LogPlugin so config warnings are visible.
    let config = SimConfig::from_path_or_env(std::env::args().nth(1));
    let days = parse_run_days(std::env::var(DAYS_ENV_VAR).ok());

    app.insert_resource(config)
        .insert_resource(RunLength { days, ended: 0 })
        .add_plugins(HomesteadPlugin)
        .add_systems(Last, exit_after_days)
        .run();
}

/// Day limit from `HOMESTEAD_DAYS`. A value that is not a whole number is
/// reported and ignored.
fn parse_run_days(value: Option<String>) -> Option<u32> {
    let value = value?;
    match value.trim().parse::<u32>() {
        Ok(days) => Some(days),
        Err(e) => {
            warn!(
                "[Main] Ignoring {}={:?} ({}); running until interrupted",
                DAYS_ENV_VAR, value, e
            );
            None
        }
    }
}

fn exit_after_days(
    mut day_end_events: EventReader<DayEndEvent>,
    mut run: ResMut<RunLength>,
    calendar: Res<Calendar>,
    farm: Res<FarmGrid>,
    player: Res<PlayerState>,
    inventory: Res<Inventory>,
    hud: Res<HudSnapshot>,
    mut exit: EventWriter<AppExit>,
) {
    run.ended += day_end_events.read().count() as u32;
    let Some(days) = run.days else {
        return;
    };
    if run.ended < days {
        return;
    }

    let mut crops: Vec<CropSummary> = farm
        .crops()
        .map(|((x, y), crop)| CropSummary {
            kind: crop.kind,
            x,
            y,
            growth: crop.growth(),
        })
        .collect();
    crops.sort_by_key(|c| (c.y, c.x));

    let summary = RunSummary {
        calendar: &calendar,
        player: PlayerSummary {
            x: player.position.x,
            y: player.position.y,
            energy: player.energy,
            max_energy: player.max_energy,
        },
        inventory: &inventory,
        tiles: TileKind::ALL
            .iter()
            .map(|&kind| (kind.name(), farm.count_tiles(kind)))
            .collect(),
        crops,
        hud: &hud,
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("[Main] Summary serialization failed: {}", e),
    }
    info!("[Main] Simulated {} days, exiting", run.ended);
    exit.send(AppExit::Success);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_days() {
        assert_eq!(parse_run_days(None), None);
        assert_eq!(parse_run_days(Some("3".to_string())), Some(3));
        assert_eq!(parse_run_days(Some(" 12 ".to_string())), Some(12));
        assert_eq!(parse_run_days(Some("three".to_string())), None);
        assert_eq!(parse_run_days(Some("-1".to_string())), None);
    }
}
