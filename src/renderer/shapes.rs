//! Shape generation for 2D primitives
//!
//! All positions are in world units (origin top-left, y down). The pipeline
//! maps them to clip space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Mood, MovingTarget, Player, TargetKind};

/// Segments used for target discs
const DISC_SEGMENTS: u32 = 16;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let max = min + size;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Player square with a simple face (mouth flips when defeated)
pub fn player(player: &Player) -> Vec<Vertex> {
    let body = match player.mood {
        Mood::Happy => colors::PLAYER_HAPPY,
        Mood::Defeated => colors::PLAYER_DEFEATED,
    };
    let s = player.size;
    let p = player.pos;

    let mut vertices = rect(p, Vec2::splat(s), body);

    // Eyes
    let eye = Vec2::splat(s * 0.15);
    vertices.extend(rect(p + Vec2::new(s * 0.25, s * 0.25), eye, colors::FACE));
    vertices.extend(rect(p + Vec2::new(s * 0.6, s * 0.25), eye, colors::FACE));

    // Mouth: corners up when happy, down when defeated
    let mouth_y = s * 0.65;
    let corner_dy = match player.mood {
        Mood::Happy => -s * 0.1,
        Mood::Defeated => s * 0.1,
    };
    let mouth = Vec2::new(s * 0.4, s * 0.08);
    vertices.extend(rect(p + Vec2::new(s * 0.3, mouth_y), mouth, colors::FACE));
    vertices.extend(rect(
        p + Vec2::new(s * 0.2, mouth_y + corner_dy),
        Vec2::splat(s * 0.1),
        colors::FACE,
    ));
    vertices.extend(rect(
        p + Vec2::new(s * 0.7, mouth_y + corner_dy),
        Vec2::splat(s * 0.1),
        colors::FACE,
    ));

    vertices
}

/// Target disc inscribed in its hitbox
pub fn target(target: &MovingTarget) -> Vec<Vertex> {
    let color = match target.kind() {
        TargetKind::Safe => colors::TARGET_SAFE,
        TargetKind::Hazard => colors::TARGET_HAZARD,
    };
    let radius = target.size / 2.0;
    circle(target.pos + Vec2::splat(radius), radius, color, DISC_SEGMENTS)
}

/// Full scene: obstacles, then targets, then the player on top
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        state.obstacles.len() * 6 + state.targets.len() * (DISC_SEGMENTS as usize * 3) + 36,
    );

    for obs in &state.obstacles {
        vertices.extend(rect(
            obs.pos,
            Vec2::new(obs.width, obs.height),
            colors::OBSTACLE,
        ));
    }
    for t in &state.targets {
        vertices.extend(target(t));
    }
    vertices.extend(player(&state.player));

    vertices
}
