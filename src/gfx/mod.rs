//! 2D graphics
//!
//! Games draw into a CPU-side [`Surface`] with blits and text; the
//! [`Presenter`] uploads the finished frame to the GPU each frame.

mod camera;
mod color;
mod presenter;
mod surface;
mod text;

pub use camera::Camera2D;
pub use color::Color;
pub use presenter::Presenter;
pub use surface::Surface;
pub use text::TextRenderer;
