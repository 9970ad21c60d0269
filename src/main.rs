//! Breakout entry point
//!
//! Browser build: draws on `<canvas id="board">` through a 2D context, keeps
//! `#score` in sync and listens for arrow keys. Native build: headless runner
//! that simulates frames against a recording surface.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use breakout::renderer::RenderSurface;
    use breakout::sim::{Rect, ScoreSink};
    use breakout::{FrameController, GameConfig, Key};

    /// `RenderSurface` over a canvas 2D context
    struct CanvasSurface {
        context: CanvasRenderingContext2d,
    }

    impl RenderSurface for CanvasSurface {
        fn clear(&mut self, width: f32, height: f32) {
            self.context.clear_rect(0.0, 0.0, width as f64, height as f64);
        }

        fn fill_rect(&mut self, rect: Rect, color: &str) {
            self.context.set_fill_style_str(color);
            self.context.fill_rect(
                rect.left() as f64,
                rect.top() as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            );
        }

        fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32) {
            self.context.save();
            self.context.set_line_width(line_width as f64);
            self.context.set_stroke_style_str(color);
            self.context.stroke_rect(
                rect.left() as f64,
                rect.top() as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            );
            self.context.restore();
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
            self.context.set_fill_style_str(color);
            self.context.begin_path();
            let _ = self.context.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.context.fill();
        }

        fn fill_text_centered(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
            self.context.save();
            self.context.set_fill_style_str(color);
            self.context.set_font(font);
            self.context.set_text_align("center");
            let _ = self.context.fill_text(text, pos.x as f64, pos.y as f64);
            self.context.restore();
        }
    }

    /// Mirrors points into the `#score` element
    struct DomScore {
        score: u64,
    }

    impl ScoreSink for DomScore {
        fn add(&mut self, points: u64) {
            self.score += points;
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("score"))
            {
                el.set_text_content(Some(&self.score.to_string()));
            }
        }
    }

    struct Game {
        controller: FrameController,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Breakout starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .ok_or("no canvas")?
            .dyn_into()?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let config = GameConfig::default().with_canvas(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let controller = FrameController::new(&config, seed)
            .with_score_display(Box::new(DomScore { score: 0 }));
        let interval = controller.interval_ms();

        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            controller,
            surface: CanvasSurface { context },
        }));

        setup_input_handlers(&window, game.clone())?;

        // Fixed-period frame timer, runs until the page goes away
        let tick = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                let Game {
                    controller,
                    surface,
                } = &mut *g;
                controller.frame(surface);
            })
        };
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            interval.round() as i32,
        )?;
        tick.forget();

        log::info!("Breakout running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    game.borrow_mut().controller.key_down(key);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    game.borrow_mut().controller.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use breakout::renderer::CommandBuffer;
    use breakout::{FrameController, GameConfig, Key};

    /// Run Breakout without a window, printing a summary (or the draw commands)
    #[derive(Debug, Parser)]
    #[command(name = "breakout", version)]
    pub struct Args {
        /// JSON game config; defaults to the classic 800x600 layout
        #[arg(long)]
        pub config: Option<PathBuf>,
        /// Frames to simulate
        #[arg(long, default_value_t = 600)]
        pub frames: u32,
        /// Block color seed
        #[arg(long, default_value_t = 1)]
        pub seed: u64,
        /// Press the debug launch key on the first frame
        #[arg(long)]
        pub launch: bool,
        /// Hold the left arrow for the whole run
        #[arg(long)]
        pub hold_left: bool,
        /// Hold the right arrow for the whole run
        #[arg(long)]
        pub hold_right: bool,
        /// Print the last frame's draw commands as JSON
        #[arg(long)]
        pub dump: bool,
    }

    fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
        let Some(path) = path else {
            return Ok(GameConfig::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        GameConfig::from_json(&json)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn run(args: Args) -> Result<()> {
        let config = load_config(args.config.as_ref())?;
        let mut game = FrameController::new(&config, args.seed);
        let mut surface = CommandBuffer::new();

        if args.launch {
            game.key_down(Key::Launch);
        }
        if args.hold_left {
            game.key_down(Key::Left);
        }
        if args.hold_right {
            game.key_down(Key::Right);
        }

        let mut frames_run = 0;
        for _ in 0..args.frames {
            surface.commands.clear();
            game.frame(&mut surface);
            frames_run += 1;
            if game.session().is_game_over() {
                break;
            }
        }

        let session = game.session();
        log::info!(
            "Ran {} frames: score {}, {} blocks left, game over: {}",
            frames_run,
            session.score.score,
            session.field.grid.len(),
            session.is_game_over()
        );

        if args.dump {
            println!("{}", surface.to_json().context("failed to encode draw commands")?);
        } else {
            println!(
                "frames={} score={} blocks={} ball=({:.2}, {:.2}) game_over={}",
                frames_run,
                session.score.score,
                session.field.grid.len(),
                session.ball.pos.x,
                session.ball.pos.y,
                session.is_game_over()
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Breakout (headless) starting...");
    headless::run(headless::Args::parse())
}
