//! Shape generation for 2D primitives
//!
//! Converts the filled rectangles of a [`RenderFrame`] into clip-space
//! triangles. Sprites and text need textures and fonts and are left to the
//! host.

use glam::Vec2;

use super::frame::RenderFrame;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Screen pixels (origin top-left, y down) to clip space (origin centre, y up)
#[inline]
pub fn screen_to_clip(p: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(p.x / screen.x * 2.0 - 1.0, 1.0 - p.y / screen.y * 2.0)
}

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: [f32; 4], screen: Vec2) -> [Vertex; 6] {
    let tl = screen_to_clip(Vec2::new(rect.left(), rect.top()), screen);
    let br = screen_to_clip(Vec2::new(rect.right(), rect.bottom()), screen);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Triangles for every filled rect in the frame, in draw order
pub fn frame_vertices(frame: &RenderFrame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(frame.rects.len() * 6);
    for filled in &frame.rects {
        vertices.extend_from_slice(&rect(&filled.rect, filled.color, frame.screen));
    }
    vertices
}
