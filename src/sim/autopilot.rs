//! Idle/demo mode - a simple AI that plays the game
//!
//! Steers toward the middle of the next gap and shies away from hazards.
//! Used by the headless runner and the browser's demo toggle.

use glam::Vec2;

use super::input::{Direction, InputEvent};
use super::state::{GameState, ObstacleSide, TargetKind};

/// How far ahead (in x) a hazard must be before the pilot reacts
const HAZARD_LOOKAHEAD: f32 = 120.0;

/// Pick this frame's inputs for the demo pilot
pub fn autopilot(state: &GameState) -> Vec<InputEvent> {
    let mut inputs = Vec::new();
    if !state.running() {
        return inputs;
    }

    let player = &state.player;
    let center = player.pos + Vec2::splat(player.size / 2.0);

    // Aim for the centre of the nearest gap still ahead of the player
    let target_y = state
        .obstacles
        .iter()
        .filter(|obs| obs.side == ObstacleSide::Bottom && obs.pos.x + obs.width >= player.pos.x)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        .map(|bottom| {
            let gap_top = state
                .obstacles
                .iter()
                .find(|obs| obs.pair_id == bottom.pair_id && obs.side == ObstacleSide::Top)
                .map(|top| top.pos.y + top.height)
                .unwrap_or(bottom.pos.y - state.gap_size);
            (gap_top + bottom.pos.y) / 2.0
        })
        .unwrap_or(state.viewport.height / 2.0);

    // Dodge a hazard that is about to reach us
    let threat = state
        .targets
        .iter()
        .filter(|t| t.kind() == TargetKind::Hazard)
        .filter(|t| t.pos.x >= player.pos.x - t.size && t.pos.x - center.x < HAZARD_LOOKAHEAD)
        .find(|t| (t.pos.y + t.size / 2.0 - center.y).abs() < player.size + t.size);

    let mut aim = target_y;
    if let Some(hazard) = threat {
        let hazard_y = hazard.pos.y + hazard.size / 2.0;
        aim = if hazard_y > center.y {
            hazard_y - player.size - hazard.size
        } else {
            hazard_y + player.size + hazard.size
        };
        if hazard.pos.x > center.x {
            inputs.push(InputEvent::MoveLateral(Direction::Left));
        }
    }

    // Jump only while falling (or still) and below the aim point
    if center.y > aim && player.velocity >= 0.0 {
        inputs.push(InputEvent::Jump);
    }

    inputs
}
