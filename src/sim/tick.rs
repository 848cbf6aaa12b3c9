//! Per-frame simulation step and session lifecycle
//!
//! One `tick` runs per host animation callback, driven by the callback's
//! timestamp. Falling motion is normalized to a ~60 fps baseline so the game
//! plays at the same speed whatever the display refresh rate.

use super::collision::{Collision, check_object};
use super::input::{Direction, Steer, TickInput};
use super::spawn::maybe_spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// What a tick produced
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Whether the host should request another animation frame
    pub reschedule: bool,
}

/// Begin a session, or restart one from any phase (including Over)
pub fn start(state: &mut GameState, now_ms: f64) -> Option<GameEvent> {
    if state.phase == GamePhase::Over {
        log::info!("Restarting after game over (final score {})", state.score);
    }

    state.phase = GamePhase::Running;
    state.score = 0;
    state.lives = STARTING_LIVES;
    state.objects.clear();
    state.spawn_interval_ms = state.tuning.spawn_interval_ms;
    state.last_frame_ms = now_ms;

    log::info!("Session started (seed {})", state.seed);
    Some(GameEvent::Started)
}

/// Flip between Running and Paused. Resuming re-anchors the frame clock so
/// the paused duration is never simulated.
pub fn toggle_pause(state: &mut GameState, now_ms: f64) -> Option<GameEvent> {
    match state.phase {
        GamePhase::Running => {
            state.phase = GamePhase::Paused;
            log::info!("Paused at score {}", state.score);
            Some(GameEvent::Paused)
        }
        GamePhase::Paused => {
            state.phase = GamePhase::Running;
            state.last_frame_ms = now_ms;
            log::info!("Resumed");
            Some(GameEvent::Resumed)
        }
        GamePhase::Idle | GamePhase::Over => None,
    }
}

/// Apply one movement command to the basket
pub fn apply_steer(state: &mut GameState, steer: Steer) {
    let dx = match steer {
        Steer::Step(dir) => dir.sign() * state.tuning.move_step,
        Steer::Drag { delta } => delta * state.tuning.drag_sensitivity,
    };
    state.player.shift(dx, state.arena.width);
}

/// Advance the session to `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> TickOutcome {
    if !state.is_running() {
        return TickOutcome::default();
    }

    state.frames += 1;
    let mut events = Vec::new();

    for steer in &input.steers {
        apply_steer(state, *steer);
    }

    let elapsed = (now_ms - state.last_frame_ms).max(0.0);
    state.last_frame_ms = now_ms;

    for obj in &mut state.objects {
        obj.fall(elapsed);
    }

    resolve_collisions(state, &mut events);

    if state.is_running() {
        if let Some((id, fruit)) = maybe_spawn(state, now_ms) {
            events.push(GameEvent::Spawned { id, fruit });
        }
    }

    TickOutcome {
        events,
        reschedule: state.is_running(),
    }
}

/// Single collision pass in spawn order. Survivors are rebuilt into a new
/// list; once the run ends the remaining objects are kept untouched.
fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let basket = state.player.rect();
    let floor = state.arena.height;
    let objects = std::mem::take(&mut state.objects);
    let mut survivors = Vec::with_capacity(objects.len());

    for obj in objects {
        if !state.is_running() {
            survivors.push(obj);
            continue;
        }

        match check_object(&obj.rect(), &basket, floor) {
            Some(Collision::Miss) => {
                state.lives = state.lives.saturating_sub(1);
                log::debug!("Missed {} (id {}), {} lives left", obj.fruit.glyph(), obj.id, state.lives);
                events.push(GameEvent::Missed {
                    id: obj.id,
                    lives: state.lives,
                });

                if state.lives == 0 {
                    state.phase = GamePhase::Over;
                    log::info!("Game over with score {}", state.score);
                    events.push(GameEvent::GameOver { score: state.score });
                }
            }
            Some(Collision::Catch) => {
                state.score = state.score.saturating_add(1);
                log::debug!("Caught {} (id {}), score {}", obj.fruit.glyph(), obj.id, state.score);
                events.push(GameEvent::Caught {
                    id: obj.id,
                    score: state.score,
                });

                if state.score % BACKGROUND_SHIFT_EVERY == 0 {
                    events.push(GameEvent::BackgroundShift {
                        angle_deg: state.score,
                    });
                }
            }
            None => survivors.push(obj),
        }
    }

    state.objects = survivors;
}

/// Demo-mode driver: steer toward the lowest fruit still above the basket
pub fn autopilot(state: &GameState) -> Option<Direction> {
    let basket = state.player.rect();
    let target = state
        .objects
        .iter()
        .filter(|o| o.rect().bottom() < basket.top())
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    let target_center = target.pos.x + target.size.x / 2.0;
    let basket_center = basket.left() + basket.size.x / 2.0;
    let diff = target_center - basket_center;

    // Within half a step is close enough; avoids jittering around the target
    if diff.abs() <= state.tuning.move_step / 2.0 {
        None
    } else if diff < 0.0 {
        Some(Direction::Left)
    } else {
        Some(Direction::Right)
    }
}
