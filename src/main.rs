//! Fruit Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent};

    use fruit_catch::consts::DEATH_EFFECT_MS;
    use fruit_catch::sim::{Arena, Direction, GameEvent, GamePhase, InputEvent};
    use fruit_catch::{GameController, Settings, ui};

    const CANVAS_ID: &str = "gameCanvas";
    const START_BUTTON_ID: &str = "startButton";
    const PAUSE_BUTTON_ID: &str = "pauseButton";
    const GAME_OVER_ID: &str = "gameOverOverlay";

    const DEATH_EFFECT_STYLE: &str = "position: fixed; left: 50%; top: 50%; \
        transform: translate(-50%, -50%); font-size: 80px; color: red; \
        pointer-events: none; animation: fadeInOut 0.8s ease-in-out; z-index: 1000;";

    const GAME_OVER_STYLE: &str = "position: absolute; top: 50%; left: 50%; \
        transform: translate(-50%, -50%); background: rgba(0, 0, 0, 0.85); \
        padding: 2rem; border-radius: 15px; text-align: center; \
        animation: fadeIn 0.5s ease-in; border: 3px solid #ff6b6b; \
        min-width: 300px; z-index: 1000;";

    /// Game instance holding all state
    struct Game {
        controller: GameController,
        ctx: CanvasRenderingContext2d,
        canvas: HtmlCanvasElement,
        /// An animation frame is pending
        loop_active: bool,
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }

        log::info!("Fruit Catch starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no #gameCanvas element"))?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let settings = Settings::load(&canvas);
        let arena = Arena {
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        };
        let seed = js_sys::Date::now() as u64;
        log::info!(
            "Game initialized with seed: {} ({}x{})",
            seed,
            arena.width,
            arena.height
        );

        let game = Rc::new(RefCell::new(Game {
            controller: GameController::new(seed, arena, settings),
            ctx,
            canvas: canvas.clone(),
            loop_active: false,
        }));

        setup_buttons(game.clone());
        setup_keyboard(game.clone());
        setup_touch(&canvas, game);
        update_buttons(GamePhase::Idle);

        log::info!("Fruit Catch ready");
        Ok(())
    }

    /// Route an input event through the controller and react to the result
    fn dispatch(game: &Rc<RefCell<Game>>, event: InputEvent) {
        let schedule = {
            let mut g = game.borrow_mut();
            let result = g.controller.dispatch(event, now_ms());

            if let Some(ref ev) = result.event {
                apply_event(&g, ev);
            }
            if result.event == Some(GameEvent::Paused) {
                let Game { controller, ctx, .. } = &mut *g;
                controller.redraw(ctx);
            }
            if result.event.is_some() {
                update_buttons(g.controller.phase());
            }

            // A restart while the loop is already running must not start a second chain
            let schedule = result.start_loop && !g.loop_active;
            if schedule {
                g.loop_active = true;
            }
            schedule
        };

        if schedule {
            request_animation_frame(game.clone());
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let reschedule = {
            let mut g = game.borrow_mut();
            let outcome = {
                let Game { controller, ctx, .. } = &mut *g;
                controller.frame(time, ctx)
            };

            for event in &outcome.events {
                apply_event(&g, event);
            }
            if g.controller.phase() == GamePhase::Over {
                update_buttons(GamePhase::Over);
            }

            g.loop_active = outcome.reschedule;
            outcome.reschedule
        };

        if reschedule {
            request_animation_frame(game);
        }
    }

    /// Apply the DOM side of a game event
    fn apply_event(game: &Game, event: &GameEvent) {
        let settings = game.controller.settings();
        match event {
            GameEvent::Missed { .. } if settings.death_effect_enabled() => show_death_effect(),
            GameEvent::BackgroundShift { angle_deg } if settings.background_shift_enabled() => {
                set_background(*angle_deg)
            }
            GameEvent::GameOver { score } => show_game_over(&game.canvas, *score),
            GameEvent::Started => hide_game_over(),
            _ => {}
        }
    }

    fn update_buttons(phase: GamePhase) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id(START_BUTTON_ID) {
            btn.set_text_content(Some(ui::start_button_label(phase)));
        }

        if let Some(btn) = document
            .get_element_by_id(PAUSE_BUTTON_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            btn.set_text_content(Some(ui::pause_button_label(phase)));
            let display = if ui::pause_button_visible(phase) {
                "inline-block"
            } else {
                "none"
            };
            let _ = btn.style().set_property("display", display);
        }
    }

    /// Flash a skull in the middle of the page; removed after a short delay
    fn show_death_effect() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(effect) = document.create_element("div") else {
            return;
        };

        let _ = effect.set_attribute("style", DEATH_EFFECT_STYLE);
        effect.set_text_content(Some(ui::DEATH_GLYPH));
        if body.append_child(&effect).is_err() {
            return;
        }

        let closure = Closure::once(move || effect.remove());
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            DEATH_EFFECT_MS,
        );
        closure.forget();
    }

    fn set_background(angle_deg: u32) {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body
                .style()
                .set_property("background", &ui::background_gradient(angle_deg));
            log::info!("Background rotated to {}deg", angle_deg);
        }
    }

    /// Drop the game over overlay left by a previous run
    fn hide_game_over() {
        if let Some(overlay) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(GAME_OVER_ID))
        {
            overlay.remove();
        }
    }

    /// Game over overlay: final score, tiered message and a reload button
    fn show_game_over(canvas: &HtmlCanvasElement, score: u32) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(parent) = canvas.parent_element() else {
            log::warn!("Canvas has no parent; skipping game over overlay");
            return;
        };
        let Ok(overlay) = document.create_element("div") else {
            return;
        };

        overlay.set_id(GAME_OVER_ID);
        let _ = overlay.set_attribute("style", GAME_OVER_STYLE);
        overlay.set_inner_html(&format!(
            "<div style=\"margin-bottom: 20px; font-size: 72px;\">🎮</div>\
             <h2 style=\"color: #ff6b6b; font-size: 36px; margin: 0 0 10px 0;\">{}</h2>\
             <p style=\"color: #fff; font-size: 24px; margin: 10px 0;\">{}</p>\
             <p style=\"color: #ffd700; font-size: 20px; margin: 15px 0;\">{}</p>",
            ui::GAME_OVER_TITLE,
            ui::final_score_label(score),
            ui::game_over_message(score),
        ));

        if let Ok(button) = document.create_element("button") {
            button.set_text_content(Some(ui::PLAY_AGAIN_LABEL));
            let _ = button.set_attribute("class", "play-again");
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            });
            let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
            let _ = overlay.append_child(&button);
        }

        let _ = parent.append_child(&overlay);
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(btn) = document.get_element_by_id(START_BUTTON_ID) {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                dispatch(&game, InputEvent::Start);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #{} element; the game cannot be started", START_BUTTON_ID);
        }

        if let Some(btn) = document.get_element_by_id(PAUSE_BUTTON_ID) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                dispatch(&game, InputEvent::TogglePause);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            match event.key().as_str() {
                "ArrowLeft" => dispatch(&game, InputEvent::Move(Direction::Left)),
                "ArrowRight" => dispatch(&game, InputEvent::Move(Direction::Right)),
                "p" | "P" => dispatch(&game, InputEvent::TogglePause),
                "i" | "I" => {
                    game.borrow_mut().controller.toggle_demo_mode();
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Touch start anchors the drag
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    dispatch(
                        &game,
                        InputEvent::DragStart {
                            x: touch.client_x() as f32,
                        },
                    );
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move drags the basket
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    dispatch(
                        &game,
                        InputEvent::DragMove {
                            x: touch.client_x() as f32,
                        },
                    );
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Fruit Catch failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fruit Catch (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one autopiloted session against the recording surface and report it
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use fruit_catch::consts::BASELINE_FRAME_MS;
    use fruit_catch::renderer::RecordingSurface;
    use fruit_catch::sim::{Arena, GameEvent, InputEvent};
    use fruit_catch::{GameController, Settings, ui};

    // Five minutes of simulated play at 60 fps
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    let seed = std::env::var("FRUIT_CATCH_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);
    let mut game = GameController::new(seed, Arena::default(), Settings::default());
    let mut surface = RecordingSurface::new();
    game.toggle_demo_mode();
    match game.settings().to_json() {
        Ok(json) => log::info!("Settings: {}", json),
        Err(e) => log::warn!("Failed to serialize settings: {}", e),
    }

    let mut now = 0.0;
    game.dispatch(InputEvent::Start, now);

    for _ in 0..MAX_FRAMES {
        now += BASELINE_FRAME_MS;
        surface.clear();
        let outcome = game.frame(now, &mut surface);
        for event in &outcome.events {
            match event {
                GameEvent::BackgroundShift { angle_deg } => {
                    log::info!("Background rotated to {}deg", angle_deg)
                }
                GameEvent::GameOver { score } => {
                    log::info!("Game over: {} - {}", score, ui::game_over_message(*score))
                }
                _ => {}
            }
        }
        if !outcome.reschedule {
            break;
        }
    }

    let state = game.state();
    println!(
        "\nSeed {}: score {}, lives {}, {} frames, {} draw calls in the last frame",
        state.seed,
        state.score,
        state.lives,
        state.frames,
        surface.last_frame().len()
    );
    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}
