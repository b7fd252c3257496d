//! Asteroid Field entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use asteroid_field::consts::SIM_DT;
    use asteroid_field::platform::{Clock, FixedStep, FrameLoop, MonotonicClock};
    use asteroid_field::renderer::{CanvasRenderer, RenderSink};
    use asteroid_field::sim::{Arena, GameEvent, GameState, tick};
    use asteroid_field::{Controls, InputLatch, TouchButton, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        controls: Controls,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
        clock: MonotonicClock,
        step: FixedStep,
        last_time: f64,
        frames: FrameLoop,
    }

    impl Game {
        fn current_arena(&self) -> Arena {
            measure_arena(&self.canvas)
        }

        /// Run simulation ticks for this frame
        fn update(&mut self, dt: f32) {
            let arena = self.current_arena();
            let substeps = self.step.advance(dt);
            for _ in 0..substeps {
                let input = self.controls.take_tick_input();
                tick(&mut self.state, &input, arena);
                for event in &self.state.events {
                    match event {
                        GameEvent::ShipHit { health, .. } => log::info!("Ship hit, health {}", health),
                        GameEvent::LevelStarted { level, asteroids } => {
                            log::info!("Level {} ({} asteroids)", level, asteroids)
                        }
                        GameEvent::GameOver { level } => log::info!("Game over on level {}", level),
                        _ => {}
                    }
                }
                if self.state.is_game_over() {
                    break;
                }
            }
        }

        fn restart(&mut self) {
            let arena = self.current_arena();
            self.state.restart(arena);
            self.controls.reset();
            self.step.reset();
            self.last_time = 0.0;
        }
    }

    /// Arena follows the canvas container; resize the backing store to match
    fn measure_arena(canvas: &HtmlCanvasElement) -> Arena {
        let (w, h) = match canvas.parent_element() {
            Some(parent) => (parent.client_width(), parent.client_height()),
            None => (canvas.client_width(), canvas.client_height()),
        };
        let (w, h) = (w.max(0) as u32, h.max(0) as u32);
        if canvas.width() != w {
            canvas.set_width(w);
        }
        if canvas.height() != h {
            canvas.set_height(h);
        }
        Arena::new(w as f32, h as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Asteroid Field starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = CanvasRenderer::new(canvas.clone()).expect("no 2d context");

        let clock = MonotonicClock::new();
        let seed = js_sys::Date::now() as u64;
        let tuning = Tuning::default();
        let controls = Controls::new(tuning.fire_cooldown_ms);

        let arena = measure_arena(&canvas);

        let game = Game {
            state: GameState::with_tuning(seed, tuning, arena),
            controls,
            renderer,
            canvas,
            clock,
            step: FixedStep::default(),
            last_time: 0.0,
            frames: FrameLoop::new(),
        };
        let game = Rc::new(RefCell::new(game));
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_touch_buttons(game.clone());
        setup_restart_button(game.clone());
        setup_lifecycle(game.clone());

        if game.borrow_mut().frames.schedule() {
            request_animation_frame(game);
        }
        log::info!("Asteroid Field running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if (key == "r" || key == "R") && game.borrow().state.is_game_over() {
                    restart(&game);
                    return;
                }
                let mut g = game.borrow_mut();
                let now = g.clock.now_ms();
                if g.controls.key_down(&key, now) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().controls.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen buttons drive the same latches as the keyboard
    fn setup_touch_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for button in TouchButton::ALL {
            let Some(el) = document.get_element_by_id(button.element_id()) else {
                continue;
            };

            for event_name in ["touchstart", "mousedown"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                    event.prevent_default();
                    let mut g = game.borrow_mut();
                    let now = g.clock.now_ms();
                    g.controls.touch_start(button, now);
                });
                let _ = el.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }

            for event_name in ["touchend", "touchcancel", "mouseup", "mouseleave"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    game.borrow_mut().controls.touch_end(button);
                });
                let _ = el.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                restart(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Page teardown, back/forward cache restore and focus loss
    fn setup_lifecycle(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Stop scheduling frames when the page goes away
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                g.frames.stop();
                g.controls.release_all();
                log::info!("Page hidden, stopping game loop");
            });
            let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restored from the back/forward cache
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if game.borrow().frames.is_running() {
                    return;
                }
                let resume = {
                    let mut g = game.borrow_mut();
                    g.last_time = 0.0;
                    g.step.reset();
                    g.frames.resume()
                };
                log::info!("Page shown, resuming game loop");
                if resume {
                    request_animation_frame(game.clone());
                }
            });
            let _ = window.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up events are lost while the window is unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().controls.release_all();
                log::debug!("Window blur, released held controls");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn restart(game: &Rc<RefCell<Game>>) {
        let resume = {
            let mut g = game.borrow_mut();
            g.restart();
            g.frames.resume()
        };
        log::info!("Game restarted");
        if resume {
            request_animation_frame(game.clone());
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            if !g.frames.begin_frame() {
                return;
            }

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            let snapshot = g.state.snapshot();
            g.renderer.draw(&snapshot);

            // The game-over overlay is the final frame
            !snapshot.game_over && g.frames.schedule()
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use asteroid_field::platform::{Clock, ManualClock};
    use asteroid_field::renderer::{LogSink, RenderSink};
    use asteroid_field::sim::{Arena, GameState, tick};
    use asteroid_field::{Controls, InputLatch, Tuning};

    env_logger::init();
    log::info!("Asteroid Field (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::load_file(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let arena = Arena::new(800.0, 600.0);
    let clock = ManualClock::new(0.0);
    let mut controls = Controls::new(tuning.fire_cooldown_ms);
    let mut state = GameState::with_tuning(0x5EED, tuning, arena);
    let mut sink = LogSink::default();

    // Scripted pilot: spin, hold the trigger, thrust in bursts
    controls.key_down("d", clock.now_ms());
    for frame in 0..60 * 120 {
        clock.advance(1000.0 / 60.0);
        controls.key_down(" ", clock.now_ms());
        if frame % 180 == 0 {
            controls.key_down("w", clock.now_ms());
        } else if frame % 180 == 30 {
            controls.key_up("w");
        }

        let input = controls.take_tick_input();
        tick(&mut state, &input, arena);
        sink.draw(&state.snapshot());

        if state.is_game_over() {
            break;
        }
    }

    println!(
        "Seed {:#x} finished after {} ticks: level {}, health {}, {}",
        state.seed,
        state.time_ticks,
        state.level,
        state.health,
        if state.is_game_over() { "game over" } else { "still flying" }
    );
}
