//! Periodic entity spawning and the gap difficulty ramp

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, MovingTarget, Obstacle, ObstacleSide, TargetKind};

/// Spawn one target at the right edge when the target cadence is reached
pub fn maybe_spawn_target(state: &mut GameState) {
    if !state.frame.is_multiple_of(state.tuning.target_interval) {
        return;
    }

    let y = state.rng.random_range(0.0..state.viewport.height);
    let kind = if state.rng.random_bool(state.tuning.hazard_chance) {
        TargetKind::Hazard
    } else {
        TargetKind::Safe
    };
    // Drift in [-drift, drift)
    let dy = (state.rng.random::<f32>() - 0.5) * 2.0 * state.tuning.target_drift;

    let id = state.next_entity_id();
    state.targets.push(MovingTarget::new(
        id,
        Vec2::new(state.viewport.width, y),
        state.tuning.target_size,
        kind,
        Vec2::new(state.tuning.target_dx, dy),
    ));
    log::debug!("Spawned {:?} target {} at y={:.1}", kind, id, y);
}

/// Spawn a top/bottom obstacle pair and narrow the gap when the obstacle
/// cadence is reached
pub fn maybe_spawn_obstacle_pair(state: &mut GameState) {
    if !state.frame.is_multiple_of(state.tuning.obstacle_interval) {
        return;
    }

    let height = state.viewport.height;
    let gap = state.gap_size;
    let x = state.viewport.width;
    let width = state.tuning.obstacle_width;

    // A viewport shorter than the gap leaves nothing to randomize
    let free_space = height - gap;
    let top_height = if free_space > 0.0 {
        state.rng.random_range(0.0..free_space)
    } else {
        0.0
    };

    let pair_id = state.next_entity_id();
    let top = Obstacle {
        id: pair_id,
        pair_id,
        spawn_frame: state.frame,
        side: ObstacleSide::Top,
        pos: Vec2::new(x, 0.0),
        width,
        height: top_height,
    };
    let bottom = Obstacle {
        id: state.next_entity_id(),
        pair_id,
        spawn_frame: state.frame,
        side: ObstacleSide::Bottom,
        pos: Vec2::new(x, top_height + gap),
        width,
        height: (height - top_height - gap).max(0.0),
    };
    state.obstacles.push(top);
    state.obstacles.push(bottom);

    state.gap_size = (gap - state.tuning.gap_step).max(state.tuning.gap_min);
    log::debug!(
        "Spawned obstacle pair {} (top={:.1}, gap={:.1}, next gap={:.1})",
        pair_id,
        top_height,
        gap,
        state.gap_size
    );
}
