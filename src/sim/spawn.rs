//! Fruit spawning

use glam::Vec2;
use rand::Rng;

use super::state::{FallingObject, Fruit, GameState};
use crate::consts::{OBJECT_HEIGHT, OBJECT_WIDTH};

/// Spawn one object if more than the spawn interval has passed since the last
/// spawn. Returns the new object's id and fruit.
pub fn maybe_spawn(state: &mut GameState, now_ms: f64) -> Option<(u32, Fruit)> {
    if now_ms - state.last_spawn_ms <= state.spawn_interval_ms {
        return None;
    }
    let spawned = spawn_object(state);
    state.last_spawn_ms = now_ms;
    Some(spawned)
}

/// Create a fruit at the top of the arena at a uniformly random x
pub fn spawn_object(state: &mut GameState) -> (u32, Fruit) {
    let max_x = (state.arena.width - OBJECT_WIDTH).max(0.0);
    let x = if max_x > 0.0 {
        state.rng.random_range(0.0..max_x)
    } else {
        0.0
    };
    let fruit = Fruit::random(&mut state.rng);
    let speed = state.fall_speed();
    let id = state.next_entity_id();

    state.objects.push(FallingObject {
        id,
        pos: Vec2::new(x, 0.0),
        size: Vec2::new(OBJECT_WIDTH, OBJECT_HEIGHT),
        speed,
        fruit,
    });
    log::debug!("Spawned {} (id {}) at x={:.1} speed={:.2}", fruit.glyph(), id, x, speed);

    (id, fruit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::state::Arena;

    fn state() -> GameState {
        GameState::new(4242, Arena::default(), Tuning::default())
    }

    #[test]
    fn test_spawn_waits_for_interval() {
        let mut state = state();
        state.last_spawn_ms = 1000.0;

        // Exactly one interval later is not enough
        assert!(maybe_spawn(&mut state, 3000.0).is_none());
        assert!(state.objects.is_empty());

        assert!(maybe_spawn(&mut state, 3000.5).is_some());
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.last_spawn_ms, 3000.5);

        // Timer reset
        assert!(maybe_spawn(&mut state, 4000.0).is_none());
        assert_eq!(state.objects.len(), 1);
    }

    #[test]
    fn test_spawned_object_shape() {
        let mut state = state();
        state.score = 7;
        let (id, fruit) = spawn_object(&mut state);

        let obj = &state.objects[0];
        assert_eq!(obj.id, id);
        assert_eq!(obj.fruit, fruit);
        assert_eq!(obj.pos.y, 0.0);
        assert_eq!(obj.size, Vec2::new(40.0, 40.0));
        assert!((obj.speed - 2.7).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_x_within_arena() {
        let mut state = state();
        for _ in 0..200 {
            spawn_object(&mut state);
        }
        let max_x = state.arena.width - OBJECT_WIDTH;
        assert!(state.objects.iter().all(|o| o.pos.x >= 0.0 && o.pos.x < max_x));
    }

    #[test]
    fn test_spawn_on_arena_narrower_than_object() {
        let mut state = GameState::new(
            1,
            Arena {
                width: 30.0,
                height: 500.0,
            },
            Tuning::default(),
        );
        spawn_object(&mut state);
        assert_eq!(state.objects[0].pos.x, 0.0);
    }

    #[test]
    fn test_spawn_ids_unique() {
        let mut state = state();
        let a = spawn_object(&mut state).0;
        let b = spawn_object(&mut state).0;
        assert_ne!(a, b);
    }
}
