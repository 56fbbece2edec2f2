//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Clip-space 2D vertex with position and color
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

    /// Buffer layout for the host's render pipeline: `position` at shader
    /// location 0, `color` at location 1. Buffers come from
    /// [`frame_vertices`](super::shapes::frame_vertices).
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Palette for platforms, the flag, buttons and phase backgrounds
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const SKY: [f32; 4] = rgb(135, 206, 235);
    pub const PLATFORM: [f32; 4] = rgb(139, 69, 19); // saddle brown
    pub const FLAG: [f32; 4] = rgb(255, 0, 0);
    pub const BUTTON: [f32; 4] = rgb(70, 130, 200);
    pub const MENU_BACKGROUND: [f32; 4] = rgb(0, 0, 0);
    pub const COMPLETE_BACKGROUND: [f32; 4] = rgb(0, 100, 0);
    pub const GAME_OVER_BACKGROUND: [f32; 4] = rgb(139, 0, 0);
    pub const TEXT: [f32; 4] = rgb(255, 255, 255);
    pub const GOLD: [f32; 4] = rgb(255, 215, 0);
}
