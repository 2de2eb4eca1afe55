//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA, 0..=1 per channel
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.02, 0.02, 0.05, 1.0];
    pub const ARENA_WALL: Color = [0.3, 0.3, 0.4, 1.0];
    pub const PLAYER: Color = [0.2, 0.8, 0.4, 1.0];
    pub const ENEMY: Color = [0.9, 0.3, 0.25, 1.0];
    pub const HEALTH_BAR: Color = [0.95, 0.85, 0.3, 1.0];
    pub const PLAYER_SHOT: Color = [0.6, 0.9, 1.0, 1.0];
    pub const ENEMY_SHOT: Color = [1.0, 0.6, 0.2, 1.0];
    pub const HUD_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}
