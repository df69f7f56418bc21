//! Browser frontend
//!
//! Draws onto the page's `canvas` element and writes stats into the
//! `health-lbl` and `score-lbl` elements. Frames are driven by
//! `requestAnimationFrame`; while paused no frame is requested, and the
//! next pause toggle from the keyboard restarts the chain.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, KeyboardEvent};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game_loop::{GameLoop, Schedule};
use crate::input::{InputEvent, KeyAction};
use crate::render::{RenderSurface, StatsDisplay};
use crate::settings::Settings;
use crate::sim::{Color, GameSession};

/// 2-D canvas context as a render surface
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl RenderSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}

/// Health/score labels; missing elements are skipped
struct DomStats {
    health: Option<Element>,
    score: Option<Element>,
}

impl DomStats {
    fn new(document: &Document) -> Self {
        let lookup = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("No #{} element, stat will not be shown", id);
            }
            el
        };
        Self {
            health: lookup("health-lbl"),
            score: lookup("score-lbl"),
        }
    }
}

impl StatsDisplay for DomStats {
    fn show(&mut self, health: i32, score: u64) {
        if let Some(el) = &self.health {
            el.set_text_content(Some(&health.to_string()));
        }
        if let Some(el) = &self.score {
            el.set_text_content(Some(&score.to_string()));
        }
    }
}

struct App {
    game: GameLoop,
    surface: CanvasSurface,
    stats: DomStats,
    /// No animation frame is pending
    suspended: bool,
}

pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or("no canvas")?
        .dyn_into()?;
    canvas.set_width(FIELD_WIDTH as u32);
    canvas.set_height(FIELD_HEIGHT as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into()?;

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    log::info!("Game initialized with seed: {}", seed);

    let app = Rc::new(RefCell::new(App {
        game: GameLoop::new(GameSession::with_tuning(seed, settings.tuning)),
        surface: CanvasSurface { ctx },
        stats: DomStats::new(&document),
        suspended: false,
    }));

    setup_key_handlers(&window, app.clone())?;
    request_animation_frame(app);

    log::info!("Spaceship running!");
    Ok(())
}

fn setup_key_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    // Keydown
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(input) = InputEvent::from_key(&event.key(), KeyAction::Down) else {
                return;
            };
            event.prevent_default();
            // Pause toggles on the press edge only
            if input == InputEvent::TogglePause && event.repeat() {
                return;
            }

            let resume = {
                let mut a = app.borrow_mut();
                a.game.push(input);
                let resume = a.suspended && input == InputEvent::TogglePause;
                if resume {
                    a.suspended = false;
                }
                resume
            };
            if resume {
                request_animation_frame(app.clone());
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyup
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(input) = InputEvent::from_key(&event.key(), KeyAction::Up) {
                app.borrow_mut().game.push(input);
            }
        });
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(app);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>) {
    let schedule = {
        let mut a = app.borrow_mut();
        let App {
            game,
            surface,
            stats,
            ..
        } = &mut *a;
        game.frame(surface, stats)
    };

    match schedule {
        Schedule::Continue => request_animation_frame(app),
        Schedule::Suspend => app.borrow_mut().suspended = true,
    }
}
