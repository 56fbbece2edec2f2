//! Rendering support
//!
//! The core builds a [`RenderFrame`] snapshot; the host's GPU pipeline draws
//! it using the vertex layout from [`Vertex::desc`].

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{FilledRect, RenderFrame, Sprite, Text, TextAnchor, build_frame};
pub use shapes::frame_vertices;
pub use vertex::Vertex;
