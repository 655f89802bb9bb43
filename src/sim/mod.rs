//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Input applied only from the drained queue
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{Aabb, TargetOutcome, resolve_obstacles, resolve_targets};
pub use input::{Direction, InputEvent, InputQueue, apply_input};
pub use motion::{update_obstacles, update_player, update_targets};
pub use spawn::{maybe_spawn_obstacle_pair, maybe_spawn_target};
pub use state::{
    GameEvent, GamePhase, GameState, Mood, MovingTarget, Obstacle, ObstacleSide, Player,
    TargetKind, Viewport,
};
pub use tick::{FrameOutcome, FrameRenderer, Headless, game_over, tick};
