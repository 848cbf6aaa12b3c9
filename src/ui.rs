//! HUD labels and overlay text

use crate::sim::GamePhase;

pub const PAUSED_LABEL: &str = "PAUSED";
pub const GAME_OVER_TITLE: &str = "Game Over!";
pub const PLAY_AGAIN_LABEL: &str = "Play again";
pub const DEATH_GLYPH: &str = "💀";

/// Gradient stops used when the background rotates
const BACKGROUND_STOPS: &str = "#ff9a9e, #ffb347, #ffda77, #a8e6cf, #dcedc1";

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn lives_label(lives: u8) -> String {
    format!("Lives: {}", lives)
}

pub fn final_score_label(score: u32) -> String {
    format!("Final score: {}", score)
}

/// Congratulation tier shown on the game-over overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTier {
    NoPoints,
    Beginner,
    Decent,
    Skilled,
    Master,
}

impl MessageTier {
    pub fn for_score(score: u32) -> Self {
        match score {
            0 => MessageTier::NoPoints,
            1..=4 => MessageTier::Beginner,
            5..=9 => MessageTier::Decent,
            10..=19 => MessageTier::Skilled,
            _ => MessageTier::Master,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MessageTier::NoPoints => "Give it another go!",
            MessageTier::Beginner => "Nice try! You can do better!",
            MessageTier::Decent => "Well played! You almost reached 10!",
            MessageTier::Skilled => "Impressive! You're really good!",
            MessageTier::Master => "Incredible! You're a master!",
        }
    }
}

pub fn game_over_message(score: u32) -> &'static str {
    MessageTier::for_score(score).message()
}

/// CSS background for a score that just crossed a multiple of ten
pub fn background_gradient(angle_deg: u32) -> String {
    format!("linear-gradient({}deg, {})", angle_deg, BACKGROUND_STOPS)
}

/// Start button text: "Start" before the first run, "Restart" afterwards
pub fn start_button_label(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Idle => "Start",
        _ => "Restart",
    }
}

pub fn pause_button_label(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Paused => "Resume",
        _ => "Pause",
    }
}

/// Pause button is only offered while a run is in progress
pub fn pause_button_visible(phase: GamePhase) -> bool {
    matches!(phase, GamePhase::Running | GamePhase::Paused)
}
