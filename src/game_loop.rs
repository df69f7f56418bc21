//! Per-frame loop driver
//!
//! Frontends push input events as they arrive and call `frame` once per
//! display refresh. `frame` drains the queue, runs at most one tick, and tells
//! the caller whether to keep scheduling frames. While paused nothing is
//! ticked or drawn; the frontend stops scheduling until a pause toggle comes in.

use crate::input::{InputEvent, InputQueue, collect_tick_input};
use crate::render::{self, RenderSurface, StatsDisplay};
use crate::sim::{GameSession, tick};

/// What the frontend should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Request the next frame as usual
    Continue,
    /// Stop requesting frames until new input arrives
    Suspend,
}

/// Apply inputs to the session right away, without ticking
fn apply_immediate(session: &mut GameSession, events: impl IntoIterator<Item = InputEvent>) {
    let input = collect_tick_input(events);
    for &dir in &input.moves {
        session.move_ship(dir);
    }
    if let Some(held) = input.boost {
        session.set_boost(held);
    }
    if input.fire {
        session.fire();
    }
}

/// Owns the session and its pending input
#[derive(Debug)]
pub struct GameLoop {
    pub session: GameSession,
    input: InputQueue,
}

impl GameLoop {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            input: InputQueue::new(),
        }
    }

    /// Queue an input for the next frame
    pub fn push(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn is_paused(&self) -> bool {
        self.session.is_paused()
    }

    /// Run one frame: apply input, tick, draw, update stats
    pub fn frame(
        &mut self,
        surface: &mut impl RenderSurface,
        stats: &mut impl StatsDisplay,
    ) -> Schedule {
        let mut pending = Vec::with_capacity(self.input.len());
        for event in self.input.drain() {
            match event {
                InputEvent::TogglePause => {
                    if !self.session.is_paused() {
                        // Inputs that arrived before the pause still land
                        apply_immediate(&mut self.session, pending.drain(..));
                    }
                    self.session.toggle_pause();
                    log::info!(
                        "{}",
                        if self.session.is_paused() { "Paused" } else { "Resumed" }
                    );
                }
                // Inputs that arrive while paused are dropped, like the ship freeze
                _ if self.session.is_paused() => {
                    // Boost mirrors a physical key, so releases still count
                    if let InputEvent::Boost(held) = event {
                        self.session.set_boost(held);
                    }
                }
                _ => pending.push(event),
            }
        }

        if self.session.is_paused() {
            return Schedule::Suspend;
        }

        tick(&mut self.session, &collect_tick_input(pending));
        render::draw_frame(&self.session, surface);
        render::update_stats(&self.session, stats);
        Schedule::Continue
    }
}
