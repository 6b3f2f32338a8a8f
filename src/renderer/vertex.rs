//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (field units) and colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// RGBA colour
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const FIELD_GREEN: Color = [30.0 / 255.0, 128.0 / 255.0, 30.0 / 255.0, 1.0];
    /// Left side flash
    pub const RED: Color = [240.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0];
    /// Right side flash
    pub const BLUE: Color = [50.0 / 255.0, 50.0 / 255.0, 240.0 / 255.0, 1.0];
}
