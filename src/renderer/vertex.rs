//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
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

/// Convert 0xRRGGBB to RGBA floats
pub fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [r, g, b, alpha]
}

/// Colors for table elements
pub mod colors {
    pub const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.2];
    pub const OUTLINE: [f32; 4] = [0.172, 0.243, 0.314, 1.0]; // #2c3e50
    pub const TABLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
