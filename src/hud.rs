//! HUD projection
//!
//! Turns the world into the handful of strings and flags the page displays.
//! The browser host copies these into the DOM each frame.

use serde::Serialize;

use crate::sim::GameState;

/// What the UI should currently show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudView {
    /// Running score label
    pub score_text: String,
    /// Final score for the game-over overlay (only once the run ended)
    pub final_score: Option<u64>,
    /// Whether the game-over overlay is visible
    pub game_over_visible: bool,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        let over = !state.running();
        Self {
            score_text: format!("Score: {}", state.score),
            final_score: over.then_some(state.score),
            game_over_visible: over,
        }
    }
}
