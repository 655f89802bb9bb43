//! Per-frame motion integration and off-screen pruning

use glam::Vec2;

use super::state::{MovingTarget, Obstacle, Player, Viewport};

/// Explicit Euler step under gravity, clamped to the viewport.
///
/// Horizontal position is left to input.
pub fn update_player(player: &mut Player, viewport: Viewport) {
    player.velocity += player.gravity;
    player.pos.y += player.velocity;

    // Floor
    if player.pos.y + player.size > viewport.height {
        player.pos.y = viewport.height - player.size;
        player.velocity = 0.0;
    }

    // Ceiling
    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
        player.velocity = 0.0;
    }
}

/// Move targets by their velocity and drop those fully past the left edge
pub fn update_targets(targets: &mut Vec<MovingTarget>) {
    targets.retain_mut(|target| {
        target.pos += target.vel;
        target.pos.x + target.size >= 0.0
    });
}

/// Scroll obstacles left and drop those fully past the left edge
pub fn update_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32) {
    obstacles.retain_mut(|obs| {
        obs.pos += Vec2::new(-speed, 0.0);
        obs.pos.x + obs.width >= 0.0
    });
}
