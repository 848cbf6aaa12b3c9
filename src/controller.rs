//! Session controller
//!
//! Owns one [`GameState`], the input queue and the settings. Hosts feed it
//! input events and animation timestamps; it answers with [`GameEvent`]s and
//! whether the animation loop should keep running.

use crate::renderer::{RenderSurface, draw_frame};
use crate::settings::Settings;
use crate::sim::{
    self, Arena, GameEvent, GamePhase, GameState, InputEvent, InputQueue, TickOutcome,
};

/// Result of feeding one input event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    /// Lifecycle change caused by the event, if any
    pub event: Option<GameEvent>,
    /// The host must request an animation frame to (re)enter the loop
    pub start_loop: bool,
}

pub struct GameController {
    state: GameState,
    queue: InputQueue,
    settings: Settings,
    /// Autopilot steers the basket each frame
    demo_mode: bool,
}

impl GameController {
    pub fn new(seed: u64, arena: Arena, settings: Settings) -> Self {
        Self {
            state: GameState::new(seed, arena, settings.tuning),
            queue: InputQueue::new(),
            settings,
            demo_mode: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn toggle_demo_mode(&mut self) -> bool {
        self.demo_mode = !self.demo_mode;
        log::info!("Demo mode: {}", self.demo_mode);
        self.demo_mode
    }

    /// Feed one input event at host time `now_ms`
    pub fn dispatch(&mut self, event: InputEvent, now_ms: f64) -> Dispatch {
        match event {
            InputEvent::Start => {
                let event = sim::start(&mut self.state, now_ms);
                if event.is_some() {
                    self.queue.clear();
                }
                Dispatch {
                    start_loop: event.is_some(),
                    event,
                }
            }
            InputEvent::TogglePause => {
                let event = sim::toggle_pause(&mut self.state, now_ms);
                if event == Some(GameEvent::Paused) {
                    self.queue.clear();
                }
                Dispatch {
                    start_loop: event == Some(GameEvent::Resumed),
                    event,
                }
            }
            other => {
                self.queue.push(other, self.state.is_running());
                Dispatch::default()
            }
        }
    }

    /// Run one animation callback: simulate up to `now_ms`, then draw
    pub fn frame<S: RenderSurface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> TickOutcome {
        if self.demo_mode && self.state.is_running() {
            if let Some(dir) = sim::autopilot(&self.state) {
                self.queue.push(InputEvent::Move(dir), true);
            }
        }

        let input = self.queue.drain();
        let outcome = sim::tick(&mut self.state, &input, now_ms);
        if self.state.phase == GamePhase::Over {
            self.queue.clear();
        }

        draw_frame(surface, &self.state);
        outcome
    }

    /// Draw the current state without advancing it (e.g. to show the pause overlay)
    pub fn redraw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        draw_frame(surface, &self.state);
    }
}
