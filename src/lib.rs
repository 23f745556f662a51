//! Eco Jumper - a two-phase eco-runner arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (runner physics, spawning, collisions,
//!   difficulty scaling, sorting puzzle)
//! - `session`: Top-level Menu -> Run -> Sorting state machine
//! - `records`: Best-of-session records (monotonic maxima)
//!
//! The crate is headless: rendering, input mapping, audio, and the periodic
//! timer all live in the host. The host delivers semantic input events and
//! drives `tick()` at a fixed cadence; the core never assumes a specific
//! event loop.

pub mod records;
pub mod session;
pub mod sim;

pub use records::SessionRecord;
pub use session::{LevelSummary, Session, SessionPhase};
pub use sim::{
    Aabb, Difficulty, DropOutcome, Entity, EntityKind, ObstacleKind, Player, RunInput, RunPhase,
    RunSimulation, SortPhase, SortingPuzzle, TrashKind,
};

/// Game configuration constants
pub mod consts {
    /// Host timer period driving `RunSimulation::tick` (~60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Playfield dimensions (y grows downward, origin top-left)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Resting y of the player's top edge; the ground surface sits at
    /// `GROUND_Y + PLAYER_SIZE`
    pub const GROUND_Y: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_START_X: f32 = 100.0;
    /// Vertical velocity applied on jump (negative = upward)
    pub const JUMP_VELOCITY: f32 = -15.0;
    /// Per-tick gravity added to vertical velocity
    pub const GRAVITY: f32 = 1.0;

    /// Health at level start; obstacle contact drains 1 per tick
    pub const MAX_HEALTH: u32 = 100;
    /// Score awarded per collected trash token
    pub const TRASH_SCORE: u32 = 10;
    /// Score removed on a wrong-bin drop (level and session totals, floored at 0)
    pub const WRONG_BIN_PENALTY: u32 = 5;
    /// Last playable level; difficulty fields are all at their caps here
    pub const FINAL_LEVEL: u32 = 10;

    /// Sorting phase layout
    pub const TOKEN_SIZE: f32 = 20.0;
    pub const TOKEN_GRID_ORIGIN_X: f32 = 50.0;
    pub const TOKEN_GRID_ORIGIN_Y: f32 = 100.0;
    pub const TOKEN_COL_PITCH: f32 = 30.0;
    pub const TOKEN_ROW_PITCH: f32 = 40.0;
    pub const TOKENS_PER_ROW: usize = 8;

    /// Bin layout: three fixed, non-overlapping drop regions
    pub const BIN_SIZE: f32 = 100.0;
    pub const BIN_Y: f32 = 420.0;
    pub const BIN_PAPER_X: f32 = 90.0;
    pub const BIN_PLASTIC_X: f32 = 350.0;
    pub const BIN_GLASS_X: f32 = 610.0;
}
