//! Rendering surface
//!
//! The simulation never draws. Presentation code walks a [`GameState`] and
//! issues primitive calls against a [`Surface`]; a real backend implements the
//! trait over its own API. [`VertexSurface`] is a headless implementation that
//! tessellates into a flat triangle list.
//!
//! [`GameState`]: crate::sim::GameState

pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::sim::Position;

pub use scene::draw_scene;
pub use vertex::{Color, Vertex, colors};

/// Primitive drawing operations
pub trait Surface {
    fn begin_frame(&mut self);
    fn clear(&mut self, color: Color);
    fn rectangle(&mut self, center: Position, size: Vec2, color: Color);
    fn triangle(&mut self, a: Position, b: Position, c: Position, color: Color);
    fn circle(&mut self, center: Position, radius: f32, color: Color);
    fn text(&mut self, at: Position, text: &str, size: f32, color: Color);
    fn end_frame(&mut self);
}

/// A text draw call kept for inspection
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub at: Position,
    pub text: String,
    pub size: f32,
    pub color: Color,
}

/// Segments used when tessellating circles
const CIRCLE_SEGMENTS: u32 = 12;

/// Headless surface recording one frame of triangles and text
#[derive(Debug, Default)]
pub struct VertexSurface {
    pub clear_color: Color,
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
    in_frame: bool,
    frames: u64,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangle list of the current (or last finished) frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data as raw bytes, ready for a GPU buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Number of completed frames
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for VertexSurface {
    fn begin_frame(&mut self) {
        if self.in_frame {
            log::warn!("begin_frame called twice without end_frame");
        }
        self.vertices.clear();
        self.labels.clear();
        self.in_frame = true;
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn rectangle(&mut self, center: Position, size: Vec2, color: Color) {
        self.vertices
            .extend(shapes::rectangle(center.as_vec2(), size, color));
    }

    fn triangle(&mut self, a: Position, b: Position, c: Position, color: Color) {
        self.vertices.extend(shapes::triangle(
            a.as_vec2(),
            b.as_vec2(),
            c.as_vec2(),
            color,
        ));
    }

    fn circle(&mut self, center: Position, radius: f32, color: Color) {
        self.vertices.extend(shapes::circle(
            center.as_vec2(),
            radius,
            color,
            CIRCLE_SEGMENTS,
        ));
    }

    fn text(&mut self, at: Position, text: &str, size: f32, color: Color) {
        self.labels.push(TextLabel {
            at,
            text: text.to_string(),
            size,
            color,
        });
    }

    fn end_frame(&mut self) {
        if self.in_frame {
            self.in_frame = false;
            self.frames += 1;
        }
    }
}
