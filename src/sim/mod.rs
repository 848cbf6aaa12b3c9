//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only from host timestamps passed in
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Collision, Rect, check_object};
pub use input::{Direction, InputEvent, InputQueue, Steer, TickInput};
pub use spawn::{maybe_spawn, spawn_object};
pub use state::{Arena, FallingObject, Fruit, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickOutcome, apply_steer, autopilot, start, tick, toggle_pause};
