//! Smile Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use smile_dash::HudView;
    use smile_dash::renderer::{RenderState, SceneBuffer};
    use smile_dash::sim::{
        Direction, FrameOutcome, FrameRenderer, GameEvent, GameState, InputEvent, InputQueue,
        Viewport, autopilot, tick,
    };
    use smile_dash::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        inputs: InputQueue,
        scene: SceneBuffer,
        render_state: Option<RenderState>,
        /// A frame callback is scheduled
        looping: bool,
        /// Autopilot plays instead of the user
        demo_mode: bool,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            Self {
                state,
                inputs: InputQueue::new(),
                scene: SceneBuffer::new(),
                render_state: None,
                looping: false,
                demo_mode: false,
            }
        }

        /// Simulate one frame and present it
        fn frame(&mut self) -> FrameOutcome {
            if self.demo_mode {
                for event in autopilot(&self.state) {
                    self.inputs.push(event);
                }
            }

            let outcome = tick(&mut self.state, &mut self.inputs, &mut self.scene);
            self.present();

            for event in self.state.drain_events() {
                match event {
                    GameEvent::TargetEaten { score, .. } => log::debug!("Yum! score {}", score),
                    GameEvent::GameOver { final_score } => {
                        log::info!("Game over, final score {}", final_score)
                    }
                    GameEvent::Restarted => {}
                }
            }

            self.update_hud();
            outcome
        }

        /// Rebuild the scene from the frozen world and present it
        fn redraw(&mut self) {
            self.scene.draw(&self.state);
            self.present();
        }

        /// Upload the captured scene to the canvas
        fn present(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.scene.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let viewport = self.state.viewport;
                        render_state.resize(w, h, viewport);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = HudView::from_state(&self.state);

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score_text));
            }

            if let Some(score) = hud.final_score {
                if let Some(el) = document.get_element_by_id("finalScore") {
                    el.set_text_content(Some(&score.to_string()));
                }
            }

            if let Some(el) = document
                .get_element_by_id("gameOver")
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let display = if hud.game_over_visible { "block" } else { "none" };
                let _ = el.style().set_property("display", display);
            }
        }

        /// Reset for a new run
        fn restart(&mut self) {
            self.state.restart();
            self.inputs.clear();
            self.update_hud();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Smile Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Canvas fills the window; world units are CSS pixels
        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let viewport = match Viewport::new(width as f32, height as f32) {
            Ok(v) => v,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let state = match GameState::new(seed, viewport, Tuning::default()) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };
        let game = Rc::new(RefCell::new(Game::new(state)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, viewport).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            // Keep simulating; the HUD still works without a canvas
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());
        setup_resize(canvas, game.clone());

        game.borrow().update_hud();
        start_loop(game);

        log::info!("Smile Dash running!");
    }

    fn window_size(window: &web_sys::Window) -> (u32, u32) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (w as u32, h as u32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Click to jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().inputs.push(InputEvent::Jump);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Arrow keys move sideways, D toggles demo mode
        {
            let document = web_sys::window().unwrap().document().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.inputs.push(InputEvent::MoveLateral(Direction::Left)),
                    "ArrowRight" => g.inputs.push(InputEvent::MoveLateral(Direction::Right)),
                    "d" | "D" => {
                        g.demo_mode = !g.demo_mode;
                        log::info!("Demo mode: {}", g.demo_mode);
                    }
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restartButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart();
                start_loop(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = window_size(&window);
            let mut g = game.borrow_mut();
            if let Err(e) = g.state.resize(width as f32, height as f32) {
                log::warn!("Ignoring resize: {}", e);
                return;
            }
            canvas.set_width(width);
            canvas.set_height(height);
            let viewport = g.state.viewport;
            if let Some(ref mut render_state) = g.render_state {
                render_state.resize(width, height, viewport);
            }
            // Resizing clears the canvas; a halted world gets no further frames
            if !g.state.running() {
                g.redraw();
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Schedule frames unless a loop is already running
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.looping {
                return;
            }
            g.looping = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let outcome = {
            let mut g = game.borrow_mut();
            let outcome = g.frame();
            if outcome == FrameOutcome::Halted {
                g.looping = false;
            }
            outcome
        };

        if outcome == FrameOutcome::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Smile Dash (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: the autopilot plays one run and the result is printed as JSON
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use smile_dash::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
    use smile_dash::sim::{
        FrameOutcome, GameEvent, GameState, Headless, InputQueue, Viewport, autopilot, tick,
    };
    use smile_dash::{ConfigError, HudView, Tuning};

    /// Frames simulated when no limit is given (~5 minutes at 60 fps)
    const DEFAULT_MAX_FRAMES: u64 = 18_000;

    /// Usage: `smile-dash [seed] [max_frames]`.
    /// `SMILE_DASH_TUNING` may hold a JSON tuning override.
    pub fn run() -> Result<(), ConfigError> {
        let mut args = std::env::args().skip(1);
        let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
        let max_frames = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_FRAMES);

        let tuning = match std::env::var("SMILE_DASH_TUNING") {
            Ok(json) => Tuning::from_json(&json)?,
            Err(_) => Tuning::default(),
        };

        let viewport = Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)?;
        let mut state = GameState::new(seed, viewport, tuning)?;
        let mut inputs = InputQueue::new();
        log::info!("Headless run: seed {}, up to {} frames", seed, max_frames);

        let mut eaten = 0u32;
        while state.frame < max_frames {
            for event in autopilot(&state) {
                inputs.push(event);
            }
            let outcome = tick(&mut state, &mut inputs, &mut Headless);

            for event in state.drain_events() {
                if let GameEvent::TargetEaten { .. } = event {
                    eaten += 1;
                }
            }
            if outcome == FrameOutcome::Halted {
                break;
            }
        }

        log::info!(
            "Run finished at frame {}: score {}, {} targets eaten, gap {}",
            state.frame,
            state.score,
            eaten,
            state.gap_size
        );

        let summary = serde_json::json!({
            "seed": seed,
            "frames": state.frame,
            "targets_eaten": eaten,
            "hud": HudView::from_state(&state),
            "world": &state,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}
