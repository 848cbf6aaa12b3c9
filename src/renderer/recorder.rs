//! In-memory render surface
//!
//! Records every call as a [`DrawCommand`]. Used by tests and the native
//! headless runner.

use serde::Serialize;

use super::RenderSurface;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    FillText { text: String, x: f64, y: f64 },
    SetFillStyle(String),
    SetFont(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands since the last `clear_rect` covering the origin (the current frame)
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::ClearRect { x, y, .. } if *x == 0.0 && *y == 0.0))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// True if any recorded text equals `text`
    pub fn has_text(&self, text: &str) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::FillText { text: t, .. } if t == text))
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn set_fill_style(&mut self, style: &str) {
        self.commands.push(DrawCommand::SetFillStyle(style.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::SetFont(font.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_frame_starts_at_latest_clear() {
        let mut surface = RecordingSurface::new();
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);
        surface.fill_text("a", 1.0, 1.0);
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);
        surface.fill_text("b", 1.0, 1.0);

        let frame = surface.last_frame();
        assert_eq!(frame.len(), 2);
        assert!(surface.has_text("a"));
        assert_eq!(
            frame[1],
            DrawCommand::FillText {
                text: "b".into(),
                x: 1.0,
                y: 1.0
            }
        );
    }
}
