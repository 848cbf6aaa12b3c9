//! Game state and core simulation types
//!
//! Everything a session needs to advance lives in [`GameState`]; nothing here
//! touches the DOM or a render surface.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::clamp_to_arena;
use crate::consts::*;
use crate::settings::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    Idle,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Run ended; only a new start leaves this phase
    Over,
}

/// Playable area in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// Fruit glyphs an object can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fruit {
    Apple,
    Banana,
    Cherries,
    Strawberry,
    Pineapple,
    Grapes,
}

impl Fruit {
    pub const ALL: [Fruit; 6] = [
        Fruit::Apple,
        Fruit::Banana,
        Fruit::Cherries,
        Fruit::Strawberry,
        Fruit::Pineapple,
        Fruit::Grapes,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            Fruit::Apple => "🍎",
            Fruit::Banana => "🍌",
            Fruit::Cherries => "🍒",
            Fruit::Strawberry => "🍓",
            Fruit::Pineapple => "🍍",
            Fruit::Grapes => "🍇",
        }
    }

    /// Pick a fruit uniformly at random
    pub fn random(rng: &mut Pcg32) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Something the host should react to (overlays, effects, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Spawned { id: u32, fruit: Fruit },
    Caught { id: u32, score: u32 },
    /// A fruit hit the floor; `lives` is what is left
    Missed { id: u32, lives: u8 },
    /// Rotate the page background gradient to `angle_deg`
    BackgroundShift { angle_deg: u32 },
    GameOver { score: u32 },
}

/// The player's basket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    pub const GLYPH: &'static str = "🧺";

    pub fn new(arena: &Arena) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Vec2::new(
                clamp_to_arena(PLAYER_START_X, size.x, arena.width),
                PLAYER_START_Y,
            ),
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Move horizontally by `dx`, staying fully inside the arena
    pub fn shift(&mut self, dx: f32, arena_width: f32) {
        self.pos.x = clamp_to_arena(self.pos.x + dx, self.size.x, arena_width);
    }
}

/// A falling fruit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per baseline frame
    pub speed: f32,
    pub fruit: Fruit,
}

impl FallingObject {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Advance by `elapsed_ms` of wall time
    pub fn fall(&mut self, elapsed_ms: f64) {
        self.pos.y += self.speed * (elapsed_ms / BASELINE_FRAME_MS) as f32;
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub arena: Arena,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub player: Player,
    /// Live objects in spawn order
    pub objects: Vec<FallingObject>,
    pub spawn_interval_ms: f64,
    /// Host timestamp of the last spawn
    pub last_spawn_ms: f64,
    /// Host timestamp of the last simulated frame
    pub last_frame_ms: f64,
    /// Simulated frame counter
    pub frames: u64,
    next_id: u32,
}

impl GameState {
    /// Create an idle session with the given seed
    pub fn new(seed: u64, arena: Arena, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            phase: GamePhase::Idle,
            score: 0,
            lives: STARTING_LIVES,
            player: Player::new(&arena),
            objects: Vec::new(),
            spawn_interval_ms: tuning.spawn_interval_ms,
            last_spawn_ms: 0.0,
            last_frame_ms: 0.0,
            frames: 0,
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Fall speed for an object spawned at the current score
    pub fn fall_speed(&self) -> f32 {
        self.tuning.base_fall_speed + self.tuning.speed_per_point * self.score as f32
    }

    /// True when the simulation advances on each tick
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(7, Arena::default(), Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert!(state.objects.is_empty());
        assert_eq!(state.player.pos, Vec2::new(175.0, 450.0));
    }

    #[test]
    fn test_entity_ids_wrap() {
        let mut state = GameState::new(7, Arena::default(), Tuning::default());
        assert_eq!(state.next_entity_id(), 1);
        assert_eq!(state.next_entity_id(), 2);

        state.next_id = u32::MAX;
        assert_eq!(state.next_entity_id(), u32::MAX);
        assert_eq!(state.next_entity_id(), 0);
    }

    #[test]
    fn test_player_shift_clamps() {
        let arena = Arena::default();
        let mut player = Player::new(&arena);

        player.shift(-1000.0, arena.width);
        assert_eq!(player.pos.x, 0.0);

        player.shift(1000.0, arena.width);
        assert_eq!(player.pos.x, arena.width - PLAYER_WIDTH);
    }

    #[test]
    fn test_player_start_clamped_on_narrow_arena() {
        let arena = Arena {
            width: 200.0,
            height: 500.0,
        };
        let player = Player::new(&arena);
        assert_eq!(player.pos.x, 140.0);
    }

    #[test]
    fn test_fall_speed_grows_with_score() {
        let mut state = GameState::new(1, Arena::default(), Tuning::default());
        assert!((state.fall_speed() - 2.0).abs() < 1e-6);
        state.score = 15;
        assert!((state.fall_speed() - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_fall_normalized_to_baseline_frame() {
        let mut obj = FallingObject {
            id: 1,
            pos: Vec2::ZERO,
            size: Vec2::new(OBJECT_WIDTH, OBJECT_HEIGHT),
            speed: 2.0,
            fruit: Fruit::Apple,
        };
        obj.fall(BASELINE_FRAME_MS * 3.0);
        assert!((obj.pos.y - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_random_fruit_covers_all_glyphs() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Fruit::random(&mut rng));
        }
        assert_eq!(seen.len(), Fruit::ALL.len());
    }
}
