//! Canvas 2D rendering module
//!
//! Frames are drawn through the [`RenderSurface`] trait so the same drawing
//! code runs against the browser canvas and the in-memory recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;
pub mod recorder;

pub use frame::draw_frame;
pub use recorder::{DrawCommand, RecordingSurface};

/// The slice of a 2D drawing context the game needs
pub trait RenderSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn set_fill_style(&mut self, style: &str);
    fn set_font(&mut self, font: &str);
}
