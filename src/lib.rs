//! Spaceship - A lane-based arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, game state)
//! - `game_loop`: Per-frame driver that feeds input and schedules ticks
//! - `render`: Render surface and stats display seams
//! - `input`: Key mapping and the per-frame input queue
//! - `platform`: Terminal (native) and canvas (web) frontends
//! - `tuning`: Data-driven game balance

pub mod game_loop;
pub mod input;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game_loop::{GameLoop, Schedule};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 200.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Ship defaults - fixed row near the bottom of the field
    pub const SHIP_WIDTH: f32 = 40.0;
    pub const SHIP_HEIGHT: f32 = 20.0;
    pub const SHIP_START_X: f32 = 80.0;
    pub const SHIP_Y: f32 = 460.0;
    /// Horizontal distance covered by one move input
    pub const SHIP_STEP: f32 = 20.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 20.0;
    /// Spawn lanes cover [0, 180) in 40-unit slots
    pub const LANE_WIDTH: f32 = 40.0;
    pub const LANE_COUNT: u32 = 5;
    /// Enemies spawn up to this far above the visible field
    pub const SPAWN_DEPTH: u32 = 200;
    /// Enemies below this y are recycled
    pub const ENEMY_DESPAWN_Y: f32 = 500.0;
    pub const ENEMIES_ON_SCREEN: usize = 8;
    pub const DEFAULT_ENEMY_SPEED: f32 = 3.0;
    pub const FAST_ENEMY_SPEED: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: f32 = 4.0;
    /// Upward travel per tick
    pub const PROJECTILE_STEP: f32 = 2.0;
    /// Spawn offset from the ship's top-left corner
    pub const PROJECTILE_OFFSET_X: f32 = 20.0;
    pub const PROJECTILE_OFFSET_Y: f32 = 4.0;

    /// Health and scoring
    pub const STARTING_HEALTH: i32 = 100;
    pub const CONTACT_DAMAGE: i32 = 10;
    pub const SURVIVAL_SCORE: u64 = 1;
    pub const KILL_SCORE: u64 = 1;
    /// Scores at which enemy speed is bumped by one
    pub const SPEED_MILESTONES: [u64; 5] = [1000, 2000, 3000, 4000, 5000];

    /// Nominal display refresh rate
    pub const FRAME_RATE: u32 = 60;
}
