//! Input events and the per-tick input queue
//!
//! The host pushes raw events as they arrive; movement is buffered as
//! [`Steer`] commands and drained once per tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Horizontal direction for discrete moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Raw input from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Start button
    Start,
    /// Pause button or `p` key
    TogglePause,
    /// Arrow keys
    Move(Direction),
    /// Touch began at client x
    DragStart { x: f32 },
    /// Touch moved to client x
    DragMove { x: f32 },
}

/// A movement command applied during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steer {
    /// One fixed step
    Step(Direction),
    /// Raw drag delta in client pixels (sensitivity applied by the sim)
    Drag { delta: f32 },
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement in arrival order
    pub steers: Vec<Steer>,
}

/// Buffer between input handlers and the simulation
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<Steer>,
    drag_anchor: Option<f32>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movement or drag event. `accepting` is false while the
    /// session is not running; movement is then dropped and the drag anchor
    /// is left where it was.
    pub fn push(&mut self, event: InputEvent, accepting: bool) {
        match event {
            InputEvent::DragStart { x } => {
                self.drag_anchor = Some(x);
            }
            InputEvent::DragMove { x } if accepting => {
                let anchor = self.drag_anchor.unwrap_or(x);
                self.pending.push_back(Steer::Drag { delta: x - anchor });
                self.drag_anchor = Some(x);
            }
            InputEvent::Move(dir) if accepting => {
                self.pending.push_back(Steer::Step(dir));
            }
            _ => {}
        }
    }

    /// Take everything queued since the last tick
    pub fn drain(&mut self) -> TickInput {
        TickInput {
            steers: self.pending.drain(..).collect(),
        }
    }

    /// Drop queued movement (on pause and game over)
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
