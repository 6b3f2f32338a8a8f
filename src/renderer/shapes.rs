//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::Renderer;
use super::scene::{DrawCommand, Scene};
use super::vertex::{Color, Vertex};

/// Segments used for every circle
pub const CIRCLE_SEGMENTS: u32 = 64;
/// Stroke width of ripple outlines
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(center: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let half = size / 2.0;
    let min = center - half;
    let max = center + half;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(max.x, min.y, color),
    ]
}

/// Unit vector at step `i` of `segments` around the circle
fn rim_dir(i: u32, segments: u32) -> Vec2 {
    let (sin, cos) = (i as f32 / segments as f32 * 2.0 * PI).sin_cos();
    Vec2::new(cos, sin)
}

/// Triangle fan for a filled disc
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let a = center + rim_dir(i, segments) * radius;
        let b = center + rim_dir(i + 1, segments) * radius;
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }
    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: Color,
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let d1 = rim_dir(i, segments);
        let d2 = rim_dir(i + 1, segments);
        let inner1 = center + d1 * inner_radius;
        let outer1 = center + d1 * outer_radius;
        let inner2 = center + d2 * inner_radius;
        let outer2 = center + d2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Tessellate one draw command
pub fn tessellate(command: &DrawCommand) -> Vec<Vertex> {
    match *command {
        DrawCommand::Rect {
            center,
            size,
            color,
        } => rect(center, size, color),
        DrawCommand::Disc {
            center,
            radius,
            color,
        } => circle(center, radius, color, CIRCLE_SEGMENTS),
        DrawCommand::RingOutline {
            center,
            radius,
            color,
        } => {
            let half = OUTLINE_WIDTH / 2.0;
            ring(
                center,
                (radius - half).max(0.0),
                radius + half,
                color,
                CIRCLE_SEGMENTS,
            )
        }
    }
}

/// Renderer that keeps the last scene as a triangle list
#[derive(Debug, Default)]
pub struct VertexBatch {
    pub clear: Color,
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes ready for a GPU vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Interleaved `x, y, r, g, b, a` floats
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Renderer for VertexBatch {
    fn draw(&mut self, scene: &Scene) {
        self.clear = scene.clear;
        self.vertices.clear();
        for command in &scene.commands {
            self.vertices.extend(tessellate(command));
        }
    }
}
