//! Per-frame orchestration
//!
//! Core game loop that advances the simulation by exactly one frame.

use super::collision::{resolve_obstacles, resolve_targets};
use super::input::{InputQueue, apply_input};
use super::motion::{update_obstacles, update_player, update_targets};
use super::spawn::{maybe_spawn_obstacle_pair, maybe_spawn_target};
use super::state::{GameEvent, GamePhase, GameState, Mood};

/// Drawing collaborator, called once per simulated frame after integration
/// and collision resolution
pub trait FrameRenderer {
    fn draw(&mut self, state: &GameState);
}

/// Renderer that draws nothing (tests, native runner)
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl FrameRenderer for Headless {
    fn draw(&mut self, _state: &GameState) {}
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// Run is over; do not schedule until restart
    Halted,
}

/// Advance the game by one frame.
///
/// Order: input, spawn, integrate/prune, targets, obstacles, draw, frame count.
/// Drawing after resolution means the frame that ends the run presents the
/// defeated player. Nothing is touched (the input queue included) once the
/// run has ended.
pub fn tick<R: FrameRenderer + ?Sized>(
    state: &mut GameState,
    inputs: &mut InputQueue,
    renderer: &mut R,
) -> FrameOutcome {
    if !state.running() {
        return FrameOutcome::Halted;
    }

    for event in inputs.drain() {
        apply_input(state, event);
    }

    maybe_spawn_target(state);
    maybe_spawn_obstacle_pair(state);

    update_targets(&mut state.targets);
    update_obstacles(&mut state.obstacles, state.tuning.obstacle_speed);
    update_player(&mut state.player, state.viewport);

    let targets = resolve_targets(state);
    if targets.hazard_hit || resolve_obstacles(state) {
        game_over(state);
    }

    renderer.draw(state);

    state.frame += 1;
    log::trace!("Frame {} done (score {})", state.frame, state.score);

    if state.running() {
        FrameOutcome::Continue
    } else {
        FrameOutcome::Halted
    }
}

/// Terminal transition. Only the first call of a run has any effect.
pub fn game_over(state: &mut GameState) {
    if !state.running() {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.player.mood = Mood::Defeated;
    state.push_event(GameEvent::GameOver {
        final_score: state.score,
    });
    log::info!(
        "Game over at frame {} with score {}",
        state.frame,
        state.score
    );
}
