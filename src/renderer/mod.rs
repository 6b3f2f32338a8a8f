//! Rendering collaborator
//!
//! The simulation never draws. Each tick the host composes a `Scene` (an
//! ordered list of primitives) from the game state and hands it to a
//! `Renderer`. `VertexBatch` turns a scene into GPU-ready vertices.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{DrawCommand, Scene, compose};
pub use shapes::VertexBatch;
pub use vertex::{Color, Vertex, colors};

/// Sink for per-tick scenes
pub trait Renderer {
    fn draw(&mut self, scene: &Scene);
}

/// Discards every scene (headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _scene: &Scene) {}
}
