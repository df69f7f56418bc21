//! Terminal frontend
//!
//! The play-field is rasterized onto a 20x25 cell grid (10x20 units per cell,
//! two characters wide). Key events are read on a dedicated thread and
//! forwarded over a channel, so the frame loop never blocks on I/O except
//! while paused, when it waits for the next key instead of spinning.

use std::io::{self, BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Print},
    terminal,
};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game_loop::{GameLoop, Schedule};
use crate::input::{InputEvent, KeyAction};
use crate::render::{RenderSurface, StatsDisplay};
use crate::settings::Settings;
use crate::sim::{Color, GameSession};

/// Play-field units per cell
const CELL_W: f32 = 10.0;
const CELL_H: f32 = 20.0;
const COLS: usize = (FIELD_WIDTH / CELL_W) as usize;
const ROWS: usize = (FIELD_HEIGHT / CELL_H) as usize;

/// Frames a boost hold survives without a repeat, for terminals that never
/// report key releases
const HOLD_WINDOW: u64 = 8;

const CLEAR_COLOR: Color = Color::rgb(0, 0, 0);

/// Cell raster implementing the render seam
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    cells: Vec<Color>,
    fill: Color,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self {
            cells: vec![CLEAR_COLOR; COLS * ROWS],
            fill: CLEAR_COLOR,
        }
    }
}

impl TerminalSurface {
    pub fn cell(&self, col: usize, row: usize) -> Color {
        self.cells[row * COLS + col]
    }

    /// Paint every cell the rectangle overlaps
    fn paint(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let col_start = (x / CELL_W).floor().max(0.0) as usize;
        let col_end = (((x + w) / CELL_W).ceil().max(0.0) as usize).min(COLS);
        let row_start = (y / CELL_H).floor().max(0.0) as usize;
        let row_end = (((y + h) / CELL_H).ceil().max(0.0) as usize).min(ROWS);

        for row in row_start..row_end {
            for col in col_start..col_end {
                self.cells[row * COLS + col] = color;
            }
        }
    }

    /// Write the raster below the HUD line
    fn present<W: Write>(&self, out: &mut W, hud: &TerminalHud, paused: bool) -> io::Result<()> {
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(style::ResetColor)?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        out.queue(Print(format!("Health: {:>3}   Score: {:>6}", hud.health, hud.score)))?;

        let mut current = None;
        for row in 0..ROWS {
            out.queue(cursor::MoveTo(0, row as u16 + 1))?;
            for col in 0..COLS {
                let color = self.cell(col, row);
                if current != Some(color) {
                    out.queue(style::SetBackgroundColor(to_term_color(color)))?;
                    current = Some(color);
                }
                out.queue(Print("  "))?;
            }
        }
        out.queue(style::ResetColor)?;

        out.queue(cursor::MoveTo(0, ROWS as u16 + 1))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        if paused {
            out.queue(Print("PAUSED - Enter to resume"))?;
        } else {
            out.queue(Print("← → move  ↑ fire  Space boost  Enter pause  Q quit"))?;
        }
        out.flush()
    }
}

impl RenderSurface for TerminalSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.paint(x, y, w, h, CLEAR_COLOR);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let fill = self.fill;
        self.paint(x, y, w, h, fill);
    }
}

fn to_term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Last reported stats, printed on the HUD line
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalHud {
    pub health: i32,
    pub score: u64,
}

impl StatsDisplay for TerminalHud {
    fn show(&mut self, health: i32, score: u64) {
        self.health = health;
        self.score = score;
    }
}

/// What the frame loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Quit,
}

/// Translates terminal key events into game inputs
#[derive(Debug, Default)]
struct KeyTracker {
    /// Frame of the last boost press/repeat, while held
    boost_since: Option<u64>,
    /// The terminal reports key releases (keyboard enhancement active)
    saw_release: bool,
}

fn key_name(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Left => Some("ArrowLeft"),
        KeyCode::Right => Some("ArrowRight"),
        KeyCode::Up => Some("ArrowUp"),
        KeyCode::Enter => Some("Enter"),
        KeyCode::Char(' ') => Some(" "),
        _ => None,
    }
}

impl KeyTracker {
    fn handle(&mut self, key: KeyEvent, frame: u64, events: &mut Vec<InputEvent>) -> Control {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = key;

        if kind == KeyEventKind::Press {
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Control::Quit;
                }
                _ => {}
            }
        }

        let action = match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => KeyAction::Down,
            KeyEventKind::Release => {
                self.saw_release = true;
                KeyAction::Up
            }
        };
        // Pause toggles on the press edge only
        if code == KeyCode::Enter && kind == KeyEventKind::Repeat {
            return Control::Continue;
        }

        let Some(event) = key_name(code).and_then(|name| InputEvent::from_key(name, action)) else {
            return Control::Continue;
        };

        match event {
            InputEvent::Boost(true) => {
                if self.boost_since.is_none() {
                    events.push(event);
                }
                self.boost_since = Some(frame);
            }
            InputEvent::Boost(false) => {
                self.boost_since = None;
                events.push(event);
            }
            _ => events.push(event),
        }
        Control::Continue
    }

    /// Release a boost hold that has gone quiet on terminals without key-up
    fn expire_boost(&mut self, frame: u64) -> Option<InputEvent> {
        let since = self.boost_since?;
        if self.saw_release || frame.saturating_sub(since) <= HOLD_WINDOW {
            return None;
        }
        self.boost_since = None;
        Some(InputEvent::Boost(false))
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Run the game in the current terminal until the player quits
pub fn run(settings: &Settings) -> io::Result<()> {
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;

    // Ask for key-release events; terminals without support fall back to the hold window
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let (tx, rx) = mpsc::channel::<KeyEvent>();
    // Never joined: it stays blocked in `event::read` after quit and ends with the process
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if let Event::Key(key) = ev {
                if tx.send(key).is_err() {
                    break;
                }
            }
        }
    });

    let result = play(&mut out, &rx, settings);

    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn play<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<KeyEvent>,
    settings: &Settings,
) -> io::Result<()> {
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Starting game with seed: {}", seed);

    let mut game = GameLoop::new(GameSession::with_tuning(seed, settings.tuning.clone()));
    let mut surface = TerminalSurface::default();
    let mut hud = TerminalHud::default();
    let mut keys = KeyTracker::default();
    let mut events = Vec::new();
    let frame_time = settings.frame_duration();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        while let Ok(key) = rx.try_recv() {
            if keys.handle(key, frame, &mut events) == Control::Quit {
                return Ok(());
            }
        }
        events.extend(keys.expire_boost(frame));
        for event in events.drain(..) {
            game.push(event);
        }

        match game.frame(&mut surface, &mut hud) {
            Schedule::Continue => surface.present(out, &hud, false)?,
            Schedule::Suspend => {
                surface.present(out, &hud, true)?;
                // Nothing runs until the next key arrives
                let Ok(key) = rx.recv() else {
                    return Ok(());
                };
                if keys.handle(key, frame, &mut events) == Control::Quit {
                    return Ok(());
                }
                continue;
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}
