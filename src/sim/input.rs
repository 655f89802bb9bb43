//! Player input events
//!
//! Hosts push events as they arrive; the frame loop drains the queue once at
//! the start of each frame so ordering is deterministic.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Lateral movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// A single input command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Click/tap: set velocity to lift
    Jump,
    /// Arrow key: step sideways
    MoveLateral(Direction),
}

/// FIFO of pending input
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Remove and return all pending events in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Apply one input to the player. Ignored once the run is over.
pub fn apply_input(state: &mut GameState, event: InputEvent) {
    if !state.running() {
        return;
    }

    let player = &mut state.player;
    match event {
        InputEvent::Jump => player.velocity = player.lift,
        InputEvent::MoveLateral(direction) => {
            player.pos.x += direction.sign() * player.horizontal_speed;
        }
    }
}
