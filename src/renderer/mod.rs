//! WebGPU rendering module
//!
//! Drawing is a pure projection of the world: `shapes::scene` builds the
//! vertex list, `RenderState` uploads and presents it.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

use crate::sim::{FrameRenderer, GameState};

/// Captures the scene for the current frame so the host can present it
/// after the simulation step returns
#[derive(Debug, Default)]
pub struct SceneBuffer {
    vertices: Vec<Vertex>,
    frames_drawn: u64,
}

impl SceneBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of draw requests received
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl FrameRenderer for SceneBuffer {
    fn draw(&mut self, state: &GameState) {
        self.vertices = shapes::scene(state);
        self.frames_drawn += 1;
    }
}
