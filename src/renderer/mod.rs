//! 2D rendering module
//!
//! A read-only projection of the simulation onto any `Surface`.

pub mod scene;
pub mod shapes;
pub mod surface;

pub use scene::Renderer;
pub use surface::{Color, CommandList, DrawCommand, Paint, Surface, TextAlign};
