//! Watchout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use watchout::GameConfig;
    use watchout::error::WatchoutError;
    use watchout::renderer::{SdfRenderState, Viewport};
    use watchout::sim::{DragInput, GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<SdfRenderState>,
        last_time: f64,
        input: TickInput,
        /// Field mapping in CSS pixels (pointer events)
        viewport: Viewport,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64) -> Self {
            let viewport = Viewport::fit(config.width, config.height, &config);
            Self {
                state: GameState::new(config, seed),
                render_state: None,
                last_time: 0.0,
                input: TickInput::default(),
                viewport,
            }
        }

        /// Convert a pointer event to field coordinates
        fn pointer_pos(&self, event: &PointerEvent) -> Vec2 {
            self.viewport
                .to_field(Vec2::new(event.offset_x() as f32, event.offset_y() as f32))
        }

        /// Run one simulation sample
        fn update(&mut self, dt_ms: f64) {
            let input = std::mem::take(&mut self.input);
            tick(&mut self.state, &input, dt_ms);
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state, time) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Push pending game events into the DOM HUD
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            for event in self.state.drain_events() {
                match event {
                    GameEvent::ScoreChanged(score) => set_text(&document, "current-score", score),
                    GameEvent::BestScoreChanged(best) => set_text(&document, "best-score", best),
                    GameEvent::Paused => set_class(&document, "pause-banner", ""),
                    GameEvent::Resumed => set_class(&document, "pause-banner", "hidden"),
                    GameEvent::EnemiesSpawned { .. } | GameEvent::Collision { .. } => {}
                }
            }
        }

        /// Reset game state for restart
        fn restart(&mut self, seed: u64) {
            self.state.restart(seed);
            self.input = TickInput::default();
            log::info!("Game restarted with seed: {}", seed);
        }
    }

    fn set_text(document: &Document, id: &str, value: u64) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    fn set_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    fn js_err(e: WatchoutError) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Size the canvas backing store to its CSS box and return
    /// (physical width, physical height, CSS viewport, device viewport)
    fn fit_canvas(canvas: &HtmlCanvasElement, config: &GameConfig) -> (u32, u32, Viewport, Viewport) {
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let client_w = canvas.client_width().max(1);
        let client_h = canvas.client_height().max(1);
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let css = Viewport::fit(client_w as f32, client_h as f32, config);
        (width, height, css, css.scaled(dpr as f32))
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Watchout starting...");

        let window = web_sys::window().ok_or_else(|| js_err(WatchoutError::MissingElement("window")))?;
        let document = window
            .document()
            .ok_or_else(|| js_err(WatchoutError::MissingElement("document")))?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| js_err(WatchoutError::MissingElement("canvas")))?
            .dyn_into()?;

        let config = GameConfig::load();
        let (width, height, css_viewport, device_viewport) = fit_canvas(&canvas, &config);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(config, seed)));
        game.borrow_mut().viewport = css_viewport;

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| js_err(WatchoutError::Renderer(e.to_string())))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| js_err(WatchoutError::Renderer(e.to_string())))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let mut render_state = SdfRenderState::new(surface, &adapter, width, height, device_viewport)
            .await
            .map_err(js_err)?;
        render_state.set_start_time(window.performance().map(|p| p.now()).unwrap_or(0.0));
        game.borrow_mut().render_state = Some(render_state);

        setup_pointer_handlers(&canvas, game.clone());
        setup_keyboard(game.clone());
        setup_auto_pause(game.clone());
        setup_resize(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Watchout running!");
        Ok(())
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Press: grab the player if the pointer is on it
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let pos = g.pointer_pos(&event);
                g.input.drag.push(DragInput::Start(pos));
                // Keep receiving moves when the pointer leaves the canvas
                let _ = canvas_clone.set_pointer_capture(event.pointer_id());
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                let pos = g.pointer_pos(&event);
                g.input.drag.push(DragInput::Move(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release / cancel
        for kind in ["pointerup", "pointercancel"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().input.drag.push(DragInput::End);
            });
            let _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.key().as_str() {
                "Escape" | "p" | "P" => g.input.pause = true,
                "r" | "R" => g.restart(js_sys::Date::now() as u64),
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        use watchout::sim::GamePhase;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Playing {
                    g.input.pause = true;
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            let (width, height, css, device) = fit_canvas(&canvas, &g.state.config);
            g.viewport = css;
            if let Some(ref mut render_state) = g.render_state {
                render_state.resize(width, height, device);
            }
            log::debug!("Resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
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
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 { time - g.last_time } else { 0.0 };
            g.last_time = time;

            g.update(dt_ms);
            g.render(time);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Watchout (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless_demo(60_000.0);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a minute of game time with a player who never moves
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo(duration_ms: f64) {
    use watchout::GameConfig;
    use watchout::sim::{GameState, TickInput, tick};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(GameConfig::load(), seed);
    log::info!("Headless run with seed {} for {} ms", seed, duration_ms);

    let input = TickInput::default();
    while state.clock_ms < duration_ms {
        tick(&mut state, &input, FRAME_MS);
        state.drain_events();
    }

    println!(
        "waves: {}  score: {}  best: {}  collision samples: {}",
        state.wave, state.score, state.best_score, state.collisions
    );
}
