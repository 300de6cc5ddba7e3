//! Renderers built into the crate. Front-ends with their own drawing surface implement
//! [Renderer](crate::render::Renderer) themselves.

mod ascii_renderer;

pub use ascii_renderer::AsciiRenderer;
