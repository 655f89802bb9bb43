//! Smile Dash - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Score text and game-over overlay projection
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod hud;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use hud::HudView;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default surface size used by the headless runner and tests
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_GRAVITY: f32 = 0.5;
    pub const PLAYER_LIFT: f32 = -10.0;
    pub const PLAYER_HORIZONTAL_SPEED: f32 = 5.0;
    /// Player growth per safe target eaten
    pub const PLAYER_GROWTH: f32 = 5.0;

    /// Moving target defaults
    pub const TARGET_SIZE: f32 = 30.0;
    /// Horizontal scroll per frame (leftward)
    pub const TARGET_DX: f32 = -2.0;
    /// Maximum vertical drift magnitude per frame
    pub const TARGET_DRIFT: f32 = 1.0;
    /// Probability that a spawned target is a hazard
    pub const HAZARD_CHANCE: f64 = 0.2;
    /// Frames between target spawns
    pub const TARGET_SPAWN_INTERVAL: u64 = 60;
    /// Score per safe target eaten
    pub const SCORE_PER_TARGET: u64 = 10;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    /// Horizontal scroll per frame (leftward, faster than targets)
    pub const OBSTACLE_SPEED: f32 = 3.0;
    /// Frames between obstacle pair spawns
    pub const OBSTACLE_SPAWN_INTERVAL: u64 = 120;

    /// Gap between paired obstacles
    pub const GAP_INITIAL: f32 = 600.0;
    pub const GAP_STEP: f32 = 5.0;
    pub const GAP_MIN: f32 = 150.0;
}
