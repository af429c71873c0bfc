//! Duck Runner entry point
//!
//! On the web this wires the canvas, input and theme toggle to the driver and
//! runs the frame loop. Natively it plays one headless run with an autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, PointerEvent, Window};

    use duck_runner::platform::{self, CanvasSurface, find_canvas};
    use duck_runner::{Driver, Layout, RunnerError, Simulation, Theme};

    const CANVAS_ID: &str = "duckCanvas";
    const THEME_TOGGLE_ID: &str = "themeToggle";

    struct Game {
        driver: Driver,
        surface: CanvasSurface,
    }

    fn viewport_layout(window: &Window) -> Layout {
        let viewport = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Layout::from_viewport(viewport as f32)
    }

    pub fn run() -> Result<(), RunnerError> {
        console_error_panic_hook::set_once();
        // A second init (hot reload) keeps the existing logger
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or_else(|| RunnerError::Js("no window".to_string()))?;

        // The theme toggle lives in the page chrome and works without the game
        setup_theme_toggle(&window);

        let (canvas, ctx) = find_canvas(CANVAS_ID)?;
        let surface = CanvasSurface::new(canvas.clone(), ctx);
        let layout = surface.apply_layout(viewport_layout(&window));

        let seed = platform::clock_seed();
        log::info!("Duck Runner starting with seed {}", seed);

        let game = Rc::new(RefCell::new(Game {
            driver: Driver::new(Simulation::new(layout, seed)),
            surface,
        }));

        // Resize
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let mut g = game.borrow_mut();
                let layout = g.surface.apply_layout(viewport_layout(&window));
                g.driver.resize(layout);
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" | "ArrowUp" => {
                        event.prevent_default();
                        game.borrow_mut().driver.jump();
                    }
                    "KeyR" => game.borrow_mut().driver.restart(),
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Tap / click on the canvas
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().driver.jump();
            });
            canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        request_animation_frame(game);

        log::info!("Duck Runner running!");
        Ok(())
    }

    fn setup_theme_toggle(window: &Window) {
        let theme = Rc::new(Cell::new(Theme::load()));
        theme.get().apply();

        let Some(button) = window
            .document()
            .and_then(|d| d.get_element_by_id(THEME_TOGGLE_ID))
        else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let next = theme.get().toggled();
            theme.set(next);
            next.apply();
            next.save();
        });
        if button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Theme toggle unavailable");
        }
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut guard = game.borrow_mut();
            let g = &mut *guard;
            g.driver.frame(time, &mut g.surface);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        log::warn!("Duck Runner disabled: {}", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(duck_runner::platform::clock_seed);
    log::info!("Duck Runner (native) starting with seed {}", seed);
    log::info!("The playable version runs in the browser; this is a headless autopilot run");

    let sim = headless::play(seed);

    println!("Final score: {}", sim.state().display_score());
    match serde_json::to_string_pretty(sim.state()) {
        Ok(json) => log::debug!("Final state:\n{}", json),
        Err(err) => log::warn!("Could not serialize final state: {}", err),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use duck_runner::renderer::CommandList;
    use duck_runner::sim::Aabb;
    use duck_runner::{Driver, GamePhase, Layout, Simulation};

    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Five minutes of play
    const MAX_FRAMES: u32 = 60 * 60 * 5;
    /// Jump when an obstacle is this many seconds of scrolling away
    const REACTION_TIME: f32 = 0.3;

    pub fn play(seed: u64) -> Simulation {
        let mut driver = Driver::new(Simulation::new(Layout::default(), seed));
        let mut surface = CommandList::new();

        driver.jump();
        for _ in 0..MAX_FRAMES {
            if should_jump(driver.simulation()) {
                driver.jump();
            }
            surface.clear();
            driver.tick(FRAME_DT, &mut surface);
            if driver.simulation().phase() == GamePhase::Over {
                break;
            }
        }

        log::info!(
            "Autopilot finished after {} frames at {:.0} px/s",
            driver.frames(),
            driver.simulation().scroll_speed()
        );
        driver.simulation().clone()
    }

    fn should_jump(sim: &Simulation) -> bool {
        let duck = sim.duck();
        if !duck.grounded {
            return false;
        }
        let lookahead = sim.scroll_speed() * REACTION_TIME;
        sim.obstacles()
            .iter()
            .any(|o| is_ahead_within(&duck.bounds, &o.bounds, lookahead))
    }

    fn is_ahead_within(duck: &Aabb, obstacle: &Aabb, distance: f32) -> bool {
        let gap = obstacle.left() - duck.right();
        (0.0..=distance).contains(&gap)
    }
}
