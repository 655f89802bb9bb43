//! Game state and core simulation types
//!
//! `GameState` is the single world aggregate. Every simulation step takes it
//! by `&mut` so there is no ambient mutation anywhere in the crate.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are being simulated
    Running,
    /// Run ended; terminal until restart
    GameOver,
}

/// Cosmetic player expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    Happy,
    /// Shown once the run has ended
    Defeated,
}

/// Drawing surface dimensions in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

/// The player-controlled square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Side length of the square hitbox
    pub size: f32,
    /// Vertical speed (positive = down)
    pub velocity: f32,
    pub gravity: f32,
    /// Velocity applied on jump
    pub lift: f32,
    /// X step per lateral input
    pub horizontal_speed: f32,
    pub mood: Mood,
}

impl Player {
    /// Fresh player for a new run
    pub fn spawn(viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                viewport.width * tuning.player_start_x,
                viewport.height * tuning.player_start_y,
            ),
            size: tuning.player_size,
            velocity: 0.0,
            gravity: tuning.gravity,
            lift: tuning.lift,
            horizontal_speed: tuning.horizontal_speed,
            mood: Mood::Happy,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// Target kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    /// Eaten for score and growth
    Safe,
    /// Ends the run on contact
    Hazard,
}

/// A drifting target entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingTarget {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    kind: TargetKind,
    /// Per-frame displacement
    pub vel: Vec2,
}

impl MovingTarget {
    pub fn new(id: u32, pos: Vec2, size: f32, kind: TargetKind, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            size,
            kind,
            vel,
        }
    }

    /// Kind is fixed at creation
    #[inline]
    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// Which half of an obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleSide {
    /// Hangs from y = 0
    Top,
    /// Stands on the bottom edge
    Bottom,
}

/// One half of a gap obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Shared by both halves of a pair
    pub pair_id: u32,
    pub spawn_frame: u64,
    pub side: ObstacleSide,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }
}

/// Notifications for the UI sink, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A safe target was eaten
    TargetEaten { target_id: u32, score: u64 },
    /// Run ended
    GameOver { final_score: u64 },
    /// World reset to its initial values
    Restarted,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG (continues across restarts)
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub viewport: Viewport,
    /// Validated once in `new`; read-only afterwards
    pub(crate) tuning: Tuning,
    /// Simulated frame counter
    pub frame: u64,
    pub score: u64,
    /// Current vertical gap between obstacle halves
    pub gap_size: f32,
    pub phase: GamePhase,
    pub player: Player,
    /// Active targets (spawn order)
    pub targets: Vec<MovingTarget>,
    /// Active obstacles (spawn order, pairs adjacent)
    pub obstacles: Vec<Obstacle>,
    /// Pending UI notifications
    #[serde(skip)]
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new world with the given seed
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            player: Player::spawn(viewport, &tuning),
            gap_size: tuning.gap_initial,
            tuning,
            frame: 0,
            score: 0,
            phase: GamePhase::Running,
            targets: Vec::new(),
            obstacles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        })
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset the world to its initial values.
    ///
    /// Valid from any phase; restarting a running game is the same full reset.
    /// Undrained events are kept ahead of `Restarted`.
    pub fn restart(&mut self) {
        self.player = Player::spawn(self.viewport, &self.tuning);
        self.targets.clear();
        self.obstacles.clear();
        self.frame = 0;
        self.score = 0;
        self.gap_size = self.tuning.gap_initial;
        self.phase = GamePhase::Running;
        self.next_id = 1;
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted (seed {})", self.seed);
    }

    /// Change surface dimensions; later spawns and clamps use the new size.
    ///
    /// The player is pulled back inside vertically so a frozen world still
    /// shows it on the surface.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.viewport = Viewport::new(width, height)?;
        let floor = height - self.player.size;
        if self.player.pos.y > floor {
            self.player.pos.y = floor;
        }
        if self.player.pos.y < 0.0 {
            self.player.pos.y = 0.0;
        }
        log::info!("Viewport resized to {}x{}", width, height);
        Ok(())
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending UI notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_viewport_rejects_degenerate_sizes() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 600.0).is_err());
        assert!(Viewport::new(800.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_initial_world() {
        let state = GameState::new(7, viewport(), Tuning::default()).unwrap();
        assert!(state.running());
        assert_eq!(state.frame, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.gap_size, GAP_INITIAL);
        assert!(state.targets.is_empty());
        assert!(state.obstacles.is_empty());

        let player = &state.player;
        assert_eq!(player.pos, Vec2::new(200.0, 300.0));
        assert_eq!(player.size, PLAYER_SIZE);
        assert_eq!(player.velocity, 0.0);
        assert_eq!(player.gravity, PLAYER_GRAVITY);
        assert_eq!(player.lift, PLAYER_LIFT);
        assert_eq!(player.horizontal_speed, PLAYER_HORIZONTAL_SPEED);
        assert_eq!(player.mood, Mood::Happy);
    }

    #[test]
    fn test_tuning_is_the_validated_config() {
        let tuning = Tuning {
            hazard_chance: 0.9,
            ..Default::default()
        };
        let state = GameState::new(7, viewport(), tuning.clone()).unwrap();
        assert_eq!(state.tuning(), &tuning);
        assert!(state.tuning().validate().is_ok());
    }

    #[test]
    fn test_rejects_invalid_tuning() {
        let tuning = Tuning {
            gravity: -1.0,
            ..Default::default()
        };
        assert!(GameState::new(7, viewport(), tuning).is_err());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(7, viewport(), Tuning::default()).unwrap();
        state.frame = 500;
        state.score = 90;
        state.gap_size = 300.0;
        state.phase = GamePhase::GameOver;
        state.player.size = 80.0;
        state.player.mood = Mood::Defeated;
        let id = state.next_entity_id();
        state.targets.push(MovingTarget::new(
            id,
            Vec2::ZERO,
            TARGET_SIZE,
            TargetKind::Safe,
            Vec2::new(TARGET_DX, 0.0),
        ));

        state.restart();

        assert!(state.running());
        assert_eq!(state.frame, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.gap_size, GAP_INITIAL);
        assert!(state.targets.is_empty());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player, Player::spawn(state.viewport, state.tuning()));
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_restart_keeps_undrained_events() {
        let mut state = GameState::new(7, viewport(), Tuning::default()).unwrap();
        state.push_event(GameEvent::TargetEaten {
            target_id: 3,
            score: SCORE_PER_TARGET,
        });
        state.push_event(GameEvent::GameOver {
            final_score: SCORE_PER_TARGET,
        });

        state.restart();

        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::TargetEaten {
                    target_id: 3,
                    score: SCORE_PER_TARGET
                },
                GameEvent::GameOver {
                    final_score: SCORE_PER_TARGET
                },
                GameEvent::Restarted,
            ]
        );
    }

    #[test]
    fn test_resize() {
        let mut state = GameState::new(7, viewport(), Tuning::default()).unwrap();
        assert!(state.resize(1024.0, 768.0).is_ok());
        assert_eq!(state.viewport, Viewport::new(1024.0, 768.0).unwrap());

        assert!(state.resize(0.0, 768.0).is_err());
        // Failed resize leaves the old viewport
        assert_eq!(state.viewport.width, 1024.0);
    }

    #[test]
    fn test_resize_pulls_player_inside() {
        let mut state = GameState::new(7, viewport(), Tuning::default()).unwrap();
        state.player.pos.y = 580.0;
        state.phase = GamePhase::GameOver;

        state.resize(800.0, 400.0).unwrap();
        assert_eq!(state.player.pos.y, 400.0 - PLAYER_SIZE);

        // Surface shorter than the player: pinned to the top
        state.resize(800.0, 20.0).unwrap();
        assert_eq!(state.player.pos.y, 0.0);

        // Growing the surface leaves the player where it is
        state.resize(800.0, 900.0).unwrap();
        assert_eq!(state.player.pos.y, 0.0);
    }
}
