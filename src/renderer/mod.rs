//! wgpu rendering module
//!
//! Everything is drawn as flat-colored quads, text included.

pub mod font;
pub mod frame;
pub mod pipeline;
pub mod vertex;

pub use frame::{FrameSurface, FrontBuffer};
pub use pipeline::RenderState;
pub use vertex::Vertex;
