//! Fruit Catch - A falling-fruit arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `renderer`: Frame drawing through an abstract 2D surface
//! - `controller`: Session owner tying input, simulation and rendering together
//! - `settings`: Data-driven gameplay tuning
//! - `ui`: Overlay text and HUD labels

pub mod controller;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use controller::GameController;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions (the host overrides these with the real canvas size)
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Player basket
    pub const PLAYER_START_X: f32 = 175.0;
    pub const PLAYER_START_Y: f32 = 450.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Falling fruit
    pub const OBJECT_WIDTH: f32 = 40.0;
    pub const OBJECT_HEIGHT: f32 = 40.0;

    /// Lives at the start of every session
    pub const STARTING_LIVES: u8 = 3;

    /// Frame duration the fall speed is expressed in (~60 fps)
    pub const BASELINE_FRAME_MS: f64 = 16.67;

    /// Every this many points the page background rotates
    pub const BACKGROUND_SHIFT_EVERY: u32 = 10;

    /// How long the host keeps the death effect on screen
    pub const DEATH_EFFECT_MS: i32 = 800;
}

/// Clamp a horizontal position so a box of `width` stays inside `[0, arena_width]`
#[inline]
pub fn clamp_to_arena(x: f32, width: f32, arena_width: f32) -> f32 {
    x.clamp(0.0, (arena_width - width).max(0.0))
}
