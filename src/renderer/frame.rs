//! Per-frame drawing of a session

use super::RenderSurface;
use crate::sim::{GamePhase, GameState, Player};
use crate::ui;

const GLYPH_FONT: &str = "40px Arial";
const HUD_FONT: &str = "20px Arial";
const PAUSED_FONT: &str = "30px Arial";

/// Glyph baselines sit below the entity's top edge
const PLAYER_BASELINE: f64 = 40.0;
const OBJECT_BASELINE: f64 = 30.0;

const HUD_Y: f64 = 30.0;
const HUD_MARGIN: f64 = 10.0;
/// Lives readout is right-aligned by offsetting from the right edge
const LIVES_OFFSET: f64 = 90.0;

const PAUSE_SHADE: &str = "rgba(0, 0, 0, 0.5)";
/// Half the rendered width of the paused label
const PAUSED_HALF_WIDTH: f64 = 60.0;

/// Draw one frame. Output depends only on `state`.
pub fn draw_frame<S: RenderSurface + ?Sized>(surface: &mut S, state: &GameState) {
    let w = state.arena.width as f64;
    let h = state.arena.height as f64;

    surface.clear_rect(0.0, 0.0, w, h);

    // Glyphs
    surface.set_font(GLYPH_FONT);
    surface.fill_text(
        Player::GLYPH,
        state.player.pos.x as f64,
        state.player.pos.y as f64 + PLAYER_BASELINE,
    );
    for obj in &state.objects {
        surface.fill_text(
            obj.fruit.glyph(),
            obj.pos.x as f64,
            obj.pos.y as f64 + OBJECT_BASELINE,
        );
    }

    // HUD
    surface.set_fill_style("black");
    surface.set_font(HUD_FONT);
    surface.fill_text(&ui::score_label(state.score), HUD_MARGIN, HUD_Y);
    surface.fill_text(&ui::lives_label(state.lives), w - LIVES_OFFSET, HUD_Y);

    if state.phase == GamePhase::Paused {
        surface.set_fill_style(PAUSE_SHADE);
        surface.fill_rect(0.0, 0.0, w, h);
        surface.set_fill_style("white");
        surface.set_font(PAUSED_FONT);
        surface.fill_text(ui::PAUSED_LABEL, w / 2.0 - PAUSED_HALF_WIDTH, h / 2.0);
    }
}
