//! Game balance tuning
//!
//! Every gameplay constant lives here so a host can override them from JSON
//! without recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Side length of the player's square hitbox at spawn
    pub player_size: f32,
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Velocity set on jump (negative = up)
    pub lift: f32,
    /// X step per lateral input
    pub horizontal_speed: f32,
    /// Size gained per safe target eaten
    pub growth: f32,
    /// Spawn position as a fraction of the viewport
    pub player_start_x: f32,
    pub player_start_y: f32,

    // === Targets ===
    pub target_size: f32,
    /// Horizontal velocity per frame (must be negative)
    pub target_dx: f32,
    /// Maximum vertical drift per frame
    pub target_drift: f32,
    /// Chance (0-1) that a spawned target is a hazard
    pub hazard_chance: f64,
    /// Frames between target spawns
    pub target_interval: u64,
    /// Score per safe target eaten
    pub score_per_target: u64,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Leftward scroll per frame
    pub obstacle_speed: f32,
    /// Frames between obstacle pair spawns
    pub obstacle_interval: u64,

    // === Difficulty ===
    pub gap_initial: f32,
    pub gap_step: f32,
    pub gap_min: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            gravity: PLAYER_GRAVITY,
            lift: PLAYER_LIFT,
            horizontal_speed: PLAYER_HORIZONTAL_SPEED,
            growth: PLAYER_GROWTH,
            player_start_x: 0.25,
            player_start_y: 0.5,

            target_size: TARGET_SIZE,
            target_dx: TARGET_DX,
            target_drift: TARGET_DRIFT,
            hazard_chance: HAZARD_CHANCE,
            target_interval: TARGET_SPAWN_INTERVAL,
            score_per_target: SCORE_PER_TARGET,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_interval: OBSTACLE_SPAWN_INTERVAL,

            gap_initial: GAP_INITIAL,
            gap_step: GAP_STEP,
            gap_min: GAP_MIN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every parameter is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(value: f32) -> bool {
            value.is_finite() && value > 0.0
        }

        if !positive(self.player_size) {
            return Err(ConfigError::tuning("player_size", "must be positive"));
        }
        if !positive(self.gravity) {
            return Err(ConfigError::tuning("gravity", "must be positive"));
        }
        if !(self.lift.is_finite() && self.lift < 0.0) {
            return Err(ConfigError::tuning("lift", "must be negative"));
        }
        if !positive(self.horizontal_speed) {
            return Err(ConfigError::tuning("horizontal_speed", "must be positive"));
        }
        if !(self.growth.is_finite() && self.growth >= 0.0) {
            return Err(ConfigError::tuning("growth", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.player_start_x) {
            return Err(ConfigError::tuning("player_start_x", "must be within 0-1"));
        }
        if !(0.0..=1.0).contains(&self.player_start_y) {
            return Err(ConfigError::tuning("player_start_y", "must be within 0-1"));
        }
        if !positive(self.target_size) {
            return Err(ConfigError::tuning("target_size", "must be positive"));
        }
        if !(self.target_dx.is_finite() && self.target_dx < 0.0) {
            return Err(ConfigError::tuning("target_dx", "must be negative"));
        }
        if !(self.target_drift.is_finite() && self.target_drift >= 0.0) {
            return Err(ConfigError::tuning("target_drift", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.hazard_chance) {
            return Err(ConfigError::tuning("hazard_chance", "must be within 0-1"));
        }
        if self.target_interval == 0 {
            return Err(ConfigError::tuning("target_interval", "must be non-zero"));
        }
        if !positive(self.obstacle_width) {
            return Err(ConfigError::tuning("obstacle_width", "must be positive"));
        }
        if !positive(self.obstacle_speed) {
            return Err(ConfigError::tuning("obstacle_speed", "must be positive"));
        }
        if self.obstacle_interval == 0 {
            return Err(ConfigError::tuning("obstacle_interval", "must be non-zero"));
        }
        if !positive(self.gap_min) {
            return Err(ConfigError::tuning("gap_min", "must be positive"));
        }
        if !(self.gap_initial.is_finite() && self.gap_initial >= self.gap_min) {
            return Err(ConfigError::tuning("gap_initial", "must be at least gap_min"));
        }
        if !(self.gap_step.is_finite() && self.gap_step >= 0.0) {
            return Err(ConfigError::tuning("gap_step", "must not be negative"));
        }
        Ok(())
    }
}
