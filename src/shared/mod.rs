//! Shared components, resources, events, and states for Homestead.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
    Paused,
}

/// Per-frame ordering of the simulation. Sets are chained in this order so
/// the grid, clock and player are never mutated by two systems at once.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Host input is turned into movement intent and action events.
    Input,
    /// Player position and energy integration.
    Actor,
    /// Gated farming actions against the grid and inventory.
    Actions,
    /// Crop growth for the elapsed frame time.
    Growth,
    /// Calendar advancement and rollover events.
    Clock,
    /// Overnight processing driven by DayEndEvent.
    DayEnd,
    /// Read-only views for renderers (light level, HUD).
    Presentation,
}

/// Ordering inside OnEnter(Loading): config is settled before any domain
/// builds its resources from it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadSet {
    Config,
    Setup,
}

// ═══════════════════════════════════════════════════════════════════════
// CALENDAR
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn next(self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// The in-game clock. Advanced by `calendar::tick_time` each frame.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub year: u32,
    pub season: Season,
    pub day: u8,                  // 1-28
    pub minute_of_day: u16,       // 0-1439, each day starts at 360 (6:00 AM)
    pub minute_length: Duration,  // real time per game-minute
    pub time_paused: bool,
    pub elapsed_real: Duration,   // accumulator for sub-minute ticks
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            year: 1,
            season: Season::Spring,
            day: 1,
            minute_of_day: DAY_START_MINUTE,
            minute_length: Duration::from_millis(DEFAULT_GAME_MINUTE_MILLIS),
            time_paused: false,
            elapsed_real: Duration::ZERO,
        }
    }
}

impl Calendar {
    /// Hour of the day (0-23).
    pub fn hour(&self) -> u8 {
        (self.minute_of_day / 60) as u8
    }

    /// Minute within the current hour (0-59).
    pub fn minute(&self) -> u8 {
        (self.minute_of_day % 60) as u8
    }

    pub fn season_name(&self) -> &'static str {
        self.season.name()
    }

    pub fn total_days_elapsed(&self) -> u32 {
        ((self.year - 1) * DAYS_PER_SEASON as u32 * SEASONS_PER_YEAR as u32)
            + (self.season.index() as u32 * DAYS_PER_SEASON as u32)
            + (self.day as u32 - 1)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD & FARMING
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Grass,
    Dirt,
    TilledSoil,
    WateredSoil,
    Stone,
    Water,
}

impl TileKind {
    pub const ALL: [TileKind; 6] = [
        TileKind::Grass,
        TileKind::Dirt,
        TileKind::TilledSoil,
        TileKind::WateredSoil,
        TileKind::Stone,
        TileKind::Water,
    ];

    /// Tilled or watered soil, the only tiles a crop can live on.
    pub fn is_soil(self) -> bool {
        matches!(self, TileKind::TilledSoil | TileKind::WateredSoil)
    }

    pub fn name(self) -> &'static str {
        match self {
            TileKind::Grass => "Grass",
            TileKind::Dirt => "Dirt",
            TileKind::TilledSoil => "TilledSoil",
            TileKind::WateredSoil => "WateredSoil",
            TileKind::Stone => "Stone",
            TileKind::Water => "Water",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropKind {
    Wheat,
    Corn,
    Tomato,
    Carrot,
}

impl CropKind {
    pub const ALL: [CropKind; 4] = [CropKind::Wheat, CropKind::Corn, CropKind::Tomato, CropKind::Carrot];

    pub fn name(self) -> &'static str {
        match self {
            CropKind::Wheat => "Wheat",
            CropKind::Corn => "Corn",
            CropKind::Tomato => "Tomato",
            CropKind::Carrot => "Carrot",
        }
    }

    pub fn seed(self) -> ItemKind {
        ItemKind::Seed(self)
    }

    pub fn produce(self) -> ItemKind {
        ItemKind::Produce(self)
    }
}

/// A planted crop. Growth is tracked as accumulated watered time so that it
/// is exactly additive no matter how the elapsed time is sliced into frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub kind: CropKind,
    pub(crate) watered: Duration,
    pub(crate) maturity: Duration,
}

impl Crop {
    pub fn new(kind: CropKind, maturity: Duration) -> Self {
        Self {
            kind,
            watered: Duration::ZERO,
            maturity,
        }
    }

    /// Growth in [0.0, 1.0].
    pub fn growth(&self) -> f32 {
        if self.maturity.is_zero() || self.watered >= self.maturity {
            return 1.0;
        }
        (self.watered.as_secs_f64() / self.maturity.as_secs_f64()) as f32
    }

    pub fn is_ready_to_harvest(&self) -> bool {
        self.watered >= self.maturity
    }
}

/// The farm: a fixed-size tile grid plus the crops planted on it.
///
/// Read queries treat out-of-bounds cells as `Stone`; mutations ignore them.
#[derive(Resource, Debug, Clone)]
pub struct FarmGrid {
    pub(crate) width: i32,
    pub(crate) height: i32,
    /// Row-major, index = y * width + x.
    pub(crate) tiles: Vec<TileKind>,
    /// Active crops. Key = (x, y).
    pub(crate) crops: HashMap<(i32, i32), Crop>,
    /// Watered time a freshly planted crop needs to mature.
    pub(crate) crop_maturity: Duration,
}

impl Default for FarmGrid {
    fn default() -> Self {
        Self::generate(WORLD_WIDTH, WORLD_HEIGHT, WORLD_SEED)
    }
}

impl FarmGrid {
    /// A grid filled with a single tile kind.
    pub fn filled(width: i32, height: i32, tile: TileKind) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![tile; width as usize * height as usize],
            crops: HashMap::new(),
            crop_maturity: Duration::from_secs(DEFAULT_CROP_MATURITY_SECS),
        }
    }

    pub fn with_crop_maturity(mut self, maturity: Duration) -> Self {
        self.crop_maturity = maturity;
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn crop_maturity(&self) -> Duration {
        self.crop_maturity
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get_tile(&self, x: i32, y: i32) -> TileKind {
        match self.index(x, y) {
            Some(i) => self.tiles[i],
            None => TileKind::Stone,
        }
    }

    pub fn get_crop(&self, x: i32, y: i32) -> Option<&Crop> {
        self.crops.get(&(x, y))
    }

    /// All planted crops with their cell.
    pub fn crops(&self) -> impl Iterator<Item = ((i32, i32), &Crop)> {
        self.crops.iter().map(|(&pos, crop)| (pos, crop))
    }

    pub fn crop_count(&self) -> usize {
        self.crops.len()
    }

    /// Number of cells currently holding `kind`.
    pub fn count_tiles(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

/// The single player actor: continuous position, last movement, energy.
#[derive(Resource, Debug, Clone)]
pub struct PlayerState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Last nonzero velocity. Survives stopping so the player keeps facing
    /// the direction they last walked.
    pub heading: Vec2,
    pub energy: f32,
    pub max_energy: f32,
    pub move_speed: f32,
    pub movement_energy_per_second: f32,
    pub idle_recovery_per_second: f32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            velocity: Vec2::ZERO,
            heading: Vec2::Y, // grid y grows downward, so this faces Down
            energy: MAX_ENERGY,
            max_energy: MAX_ENERGY,
            move_speed: PLAYER_MOVE_SPEED,
            movement_energy_per_second: MOVEMENT_ENERGY_PER_SECOND,
            idle_recovery_per_second: IDLE_RECOVERY_PER_SECOND,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Hoe,
    WateringCan,
}

/// Every item the player can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Seed(CropKind),
    Produce(CropKind),
    Tool(ToolKind),
}

impl ItemKind {
    pub fn display_name(self) -> String {
        match self {
            ItemKind::Seed(crop) => format!("{} Seeds", crop.name()),
            ItemKind::Produce(crop) => crop.name().to_string(),
            ItemKind::Tool(ToolKind::Hoe) => "Hoe".to_string(),
            ItemKind::Tool(ToolKind::WateringCan) => "Watering Can".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub quantity: u32,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// Hotbar slots; emptied slots stay in place.
    pub(crate) slots: Vec<Option<ItemStack>>,
    pub(crate) selected_slot: usize,
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            slots: vec![None; INVENTORY_SLOTS],
            selected_slot: 0,
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        let mut inventory = Self::empty();
        inventory.add(ItemKind::Seed(CropKind::Wheat), 10);
        inventory.add(ItemKind::Seed(CropKind::Corn), 5);
        inventory.add(ItemKind::Tool(ToolKind::Hoe), 1);
        inventory.add(ItemKind::Tool(ToolKind::WateringCan), 1);
        inventory
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT (written by the host each frame)
// ═══════════════════════════════════════════════════════════════════════

/// Movement intent and one-shot action triggers supplied by whatever polls
/// the keyboard. One-shot fields are cleared at the end of every frame.
/// `move_axis` is in grid space, so +y walks down the map.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    pub move_axis: Vec2,
    pub use_item: bool,
    pub harvest: bool,
    pub select_slot: Option<usize>,
    pub toggle_pause: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// FARM ACTIONS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FarmAction {
    /// Apply the selected hotbar item (hoe, watering can, seeds).
    UseSelectedItem,
    Harvest,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Tilled,
    Watered,
    Planted(CropKind),
    Harvested(CropKind),
    Rejected(ActionRejection),
}

/// Why an action was a no-op. Nothing is consumed when an action is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActionRejection {
    NoItemSelected,
    NotUsable(ItemKind),
    CannotTill,
    CannotWater,
    CannotPlant,
    NothingToHarvest,
    InventoryFull,
    NotEnoughEnergy { required: f32, available: f32 },
}

// ═══════════════════════════════════════════════════════════════════════
// PRESENTATION
// ═══════════════════════════════════════════════════════════════════════

/// Ambient light level (0.3 at night, 1.0 in full daylight).
#[derive(Resource, Debug, Clone)]
pub struct DayNightTint {
    pub intensity: f32,
}

impl Default for DayNightTint {
    fn default() -> Self {
        Self { intensity: 1.0 }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CONFIG
// ═══════════════════════════════════════════════════════════════════════

/// Tunable simulation constants. Loaded from RON by `data::config`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub world_width: i32,
    pub world_height: i32,
    pub world_seed: u64,
    pub game_minute_millis: u64,
    pub move_speed: f32,
    pub max_energy: f32,
    pub movement_energy_per_second: f32,
    pub idle_recovery_per_second: f32,
    pub tool_energy_cost: f32,
    pub harvest_energy_cost: f32,
    /// Fraction of full growth gained per real day of watered time.
    pub crop_growth_per_day: f64,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            world_seed: WORLD_SEED,
            game_minute_millis: DEFAULT_GAME_MINUTE_MILLIS,
            move_speed: PLAYER_MOVE_SPEED,
            max_energy: MAX_ENERGY,
            movement_energy_per_second: MOVEMENT_ENERGY_PER_SECOND,
            idle_recovery_per_second: IDLE_RECOVERY_PER_SECOND,
            tool_energy_cost: TOOL_ENERGY_COST,
            harvest_energy_cost: HARVEST_ENERGY_COST,
            crop_growth_per_day: CROP_GROWTH_PER_DAY,
            spawn_x: PLAYER_SPAWN_X,
            spawn_y: PLAYER_SPAWN_Y,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Sent once per rollover, carrying the day that just ended.
#[derive(Event, Debug, Clone)]
pub struct DayEndEvent {
    pub day: u8,
    pub season: Season,
    pub year: u32,
}

#[derive(Event, Debug, Clone)]
pub struct SeasonChangeEvent {
    pub new_season: Season,
    pub year: u32,
}

/// A request to act on a grid cell, usually the player's facing tile.
#[derive(Event, Debug, Clone)]
pub struct FarmActionEvent {
    pub action: FarmAction,
    pub target: IVec2,
}

/// Result of every processed FarmActionEvent.
#[derive(Event, Debug, Clone)]
pub struct ActionResolvedEvent {
    pub action: FarmAction,
    pub target: IVec2,
    pub outcome: ActionOutcome,
}

#[derive(Event, Debug, Clone)]
pub struct CropHarvestedEvent {
    pub crop: CropKind,
    pub x: i32,
    pub y: i32,
}

/// Grants items to the player (shops, gifts, debug tools).
#[derive(Event, Debug, Clone)]
pub struct ItemPickupEvent {
    pub item: ItemKind,
    pub quantity: u32,
}

#[derive(Event, Debug, Clone)]
pub struct ItemRemovedEvent {
    pub item: ItemKind,
    pub quantity: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TILE_SIZE: f32 = 32.0;
pub const PLAYER_SIZE: f32 = 32.0;

pub const WORLD_WIDTH: i32 = 50;
pub const WORLD_HEIGHT: i32 = 50;
pub const WORLD_SEED: u64 = 12345;
/// Largest accepted width or height.
pub const MAX_WORLD_DIMENSION: i32 = 4096;

pub const MINUTES_PER_DAY: u16 = 1440;
pub const DAY_START_MINUTE: u16 = 360; // 6:00 AM
pub const DEFAULT_GAME_MINUTE_MILLIS: u64 = 50;
pub const DAYS_PER_SEASON: u8 = 28;
pub const SEASONS_PER_YEAR: u8 = 4;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const CROP_GROWTH_PER_DAY: f64 = 0.2;
pub const DEFAULT_CROP_MATURITY_SECS: u64 = 432_000; // 5 days of watered time

pub const MAX_ENERGY: f32 = 100.0;
pub const PLAYER_MOVE_SPEED: f32 = 150.0;
pub const MOVEMENT_ENERGY_PER_SECOND: f32 = 2.0;
pub const IDLE_RECOVERY_PER_SECOND: f32 = 1.0;
pub const TOOL_ENERGY_COST: f32 = 5.0;
pub const HARVEST_ENERGY_COST: f32 = 3.0;
pub const PLAYER_SPAWN_X: f32 = 400.0;
pub const PLAYER_SPAWN_Y: f32 = 400.0;

pub const INVENTORY_SLOTS: usize = 10;
