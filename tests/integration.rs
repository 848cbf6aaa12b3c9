// Integration tests (native) for the `fruit-catch` crate.
// These drive the controller the way the browser host does, with a recording
// surface standing in for the canvas.

use fruit_catch::consts::BASELINE_FRAME_MS;
use fruit_catch::renderer::{DrawCommand, RecordingSurface};
use fruit_catch::sim::{Arena, Direction, GameEvent, GamePhase, InputEvent};
use fruit_catch::{GameController, Settings};

fn new_game(seed: u64) -> GameController {
    GameController::new(seed, Arena::default(), Settings::default())
}

// Park the basket on the left edge and let fruit rain until the run ends.
#[test]
fn session_runs_until_game_over() {
    let mut game = new_game(31337);
    let mut surface = RecordingSurface::new();
    let mut now = 0.0;
    assert!(game.dispatch(InputEvent::Start, now).start_loop);

    for _ in 0..20 {
        game.dispatch(InputEvent::Move(Direction::Left), now);
    }

    let mut game_overs = 0;
    let mut misses = 0;
    for _ in 0..60 * 60 * 10 {
        now += BASELINE_FRAME_MS;
        let outcome = game.frame(now, &mut surface);
        for event in &outcome.events {
            match event {
                GameEvent::GameOver { .. } => game_overs += 1,
                GameEvent::Missed { .. } => misses += 1,
                _ => {}
            }
        }
        assert!(game.state().lives <= 3);
        if !outcome.reschedule {
            break;
        }
    }

    assert_eq!(game.phase(), GamePhase::Over);
    assert_eq!(game.state().lives, 0);
    assert_eq!(game_overs, 1);
    assert_eq!(misses, 3);
    assert_eq!(game.state().player.pos.x, 0.0);

    // Frozen after the run ends
    let (score, frames) = (game.state().score, game.state().frames);
    let outcome = game.frame(now + 10_000.0, &mut surface);
    assert!(!outcome.reschedule);
    assert!(outcome.events.is_empty());
    assert_eq!((game.state().score, game.state().frames), (score, frames));

    // Pause has no effect once over
    assert_eq!(game.dispatch(InputEvent::TogglePause, now).event, None);
    assert_eq!(game.phase(), GamePhase::Over);

    // Restart button begins a fresh run and re-enters the loop
    now += 10_000.0;
    let restart = game.dispatch(InputEvent::Start, now);
    assert_eq!(restart.event, Some(GameEvent::Started));
    assert!(restart.start_loop);
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!((game.state().score, game.state().lives), (0, 3));
    assert!(game.state().objects.is_empty());

    let outcome = game.frame(now + BASELINE_FRAME_MS, &mut surface);
    assert!(outcome.reschedule);
    assert!(game.state().frames > frames);
}

#[test]
fn restart_resets_running_session() {
    let mut game = new_game(5);
    let mut surface = RecordingSurface::new();
    game.dispatch(InputEvent::Start, 0.0);

    let mut now = 0.0;
    while game.state().objects.is_empty() {
        now += BASELINE_FRAME_MS;
        game.frame(now, &mut surface);
    }

    let dispatch = game.dispatch(InputEvent::Start, now);
    assert_eq!(dispatch.event, Some(GameEvent::Started));
    let state = game.state();
    assert_eq!(state.score, 0);
    assert_eq!(state.lives, 3);
    assert!(state.objects.is_empty());
    assert_eq!(state.spawn_interval_ms, 2000.0);
}

#[test]
fn pause_holds_positions_across_long_gap() {
    let mut game = new_game(8);
    let mut surface = RecordingSurface::new();
    game.dispatch(InputEvent::Start, 0.0);

    let mut now = 0.0;
    while game.state().objects.is_empty() {
        now += BASELINE_FRAME_MS;
        game.frame(now, &mut surface);
    }
    let y = game.state().objects[0].pos.y;

    game.dispatch(InputEvent::TogglePause, now);
    // A stray callback while paused changes nothing
    let outcome = game.frame(now + 3000.0, &mut surface);
    assert!(!outcome.reschedule);
    assert_eq!(game.state().objects[0].pos.y, y);
    assert!(surface.has_text("PAUSED"));

    now += 60_000.0;
    assert!(game.dispatch(InputEvent::TogglePause, now).start_loop);
    now += BASELINE_FRAME_MS;
    game.frame(now, &mut surface);

    let obj = &game.state().objects[0];
    assert!((obj.pos.y - (y + obj.speed)).abs() < 1e-3);
}

#[test]
fn hud_tracks_score_and_lives() {
    let mut game = new_game(99);
    let mut surface = RecordingSurface::new();
    game.dispatch(InputEvent::Start, 0.0);
    game.frame(BASELINE_FRAME_MS, &mut surface);

    let frame = surface.last_frame();
    assert!(frame.contains(&DrawCommand::FillText {
        text: "Score: 0".into(),
        x: 10.0,
        y: 30.0
    }));
    assert!(frame.contains(&DrawCommand::FillText {
        text: "Lives: 3".into(),
        x: 310.0,
        y: 30.0
    }));
}

#[test]
fn drag_moves_basket_with_sensitivity() {
    let mut game = new_game(1);
    let mut surface = RecordingSurface::new();
    game.dispatch(InputEvent::Start, 0.0);
    let x0 = game.state().player.pos.x;

    game.dispatch(InputEvent::DragStart { x: 200.0 }, 1.0);
    game.dispatch(InputEvent::DragMove { x: 220.0 }, 2.0);
    game.frame(BASELINE_FRAME_MS, &mut surface);

    assert!((game.state().player.pos.x - (x0 + 30.0)).abs() < 1e-4);
}

#[test]
fn custom_settings_flow_into_session() {
    let settings =
        Settings::from_json(r#"{"tuning": {"move_step": 50, "spawn_interval_ms": 500}}"#).unwrap();
    let mut game = GameController::new(2, Arena::default(), settings);
    game.dispatch(InputEvent::Start, 0.0);
    assert_eq!(game.state().spawn_interval_ms, 500.0);

    let x0 = game.state().player.pos.x;
    game.dispatch(InputEvent::Move(Direction::Left), 1.0);
    game.frame(501.0, &mut RecordingSurface::new());
    assert_eq!(game.state().player.pos.x, x0 - 50.0);
    assert_eq!(game.state().objects.len(), 1);
}
