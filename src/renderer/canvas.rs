//! Browser canvas backend

use web_sys::CanvasRenderingContext2d;

use super::RenderSurface;

impl RenderSurface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if let Err(e) = CanvasRenderingContext2d::fill_text(self, text, x, y) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn set_fill_style(&mut self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }
}
