//! Keyboard mapping and the per-frame input queue
//!
//! Key names follow DOM `KeyboardEvent.key`, so the web frontend passes them
//! straight through and the terminal frontend translates into them.

use std::collections::VecDeque;

use crate::sim::{Direction, TickInput};

/// Whether a key went down or came back up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

/// A gameplay input, decoupled from any key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    Fire,
    TogglePause,
    /// Speed boost held (`true`) or released (`false`)
    Boost(bool),
}

impl InputEvent {
    /// Map a key name and action to an input. Unrecognized keys yield `None`.
    pub fn from_key(key: &str, action: KeyAction) -> Option<Self> {
        match (key, action) {
            ("ArrowLeft", KeyAction::Down) => Some(InputEvent::Move(Direction::Left)),
            ("ArrowRight", KeyAction::Down) => Some(InputEvent::Move(Direction::Right)),
            ("ArrowUp", KeyAction::Down) => Some(InputEvent::Fire),
            ("Enter", KeyAction::Down) => Some(InputEvent::TogglePause),
            (" ", KeyAction::Down) => Some(InputEvent::Boost(true)),
            (" ", KeyAction::Up) => Some(InputEvent::Boost(false)),
            _ => None,
        }
    }
}

/// Inputs received between two frames, in arrival order
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Take every pending event
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

/// Fold non-pause events into a tick snapshot. The last boost edge wins.
pub fn collect_tick_input(events: impl IntoIterator<Item = InputEvent>) -> TickInput {
    let mut input = TickInput::default();
    for event in events {
        match event {
            InputEvent::Move(dir) => input.moves.push(dir),
            InputEvent::Fire => input.fire = true,
            InputEvent::Boost(held) => input.boost = Some(held),
            InputEvent::TogglePause => {}
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            InputEvent::from_key("ArrowLeft", KeyAction::Down),
            Some(InputEvent::Move(Direction::Left))
        );
        assert_eq!(
            InputEvent::from_key("ArrowRight", KeyAction::Down),
            Some(InputEvent::Move(Direction::Right))
        );
        assert_eq!(InputEvent::from_key("ArrowUp", KeyAction::Down), Some(InputEvent::Fire));
        assert_eq!(InputEvent::from_key("Enter", KeyAction::Down), Some(InputEvent::TogglePause));
        assert_eq!(InputEvent::from_key(" ", KeyAction::Down), Some(InputEvent::Boost(true)));
        assert_eq!(InputEvent::from_key(" ", KeyAction::Up), Some(InputEvent::Boost(false)));
    }

    #[test]
    fn test_only_down_edges_for_discrete_keys() {
        assert_eq!(InputEvent::from_key("Enter", KeyAction::Up), None);
        assert_eq!(InputEvent::from_key("ArrowUp", KeyAction::Up), None);
        assert_eq!(InputEvent::from_key("ArrowLeft", KeyAction::Up), None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(InputEvent::from_key("x", KeyAction::Down), None);
        assert_eq!(InputEvent::from_key("ArrowDown", KeyAction::Down), None);
        assert_eq!(InputEvent::from_key("", KeyAction::Up), None);
    }

    #[test]
    fn test_queue_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Fire);
        q.push(InputEvent::Move(Direction::Left));
        assert_eq!(q.len(), 2);
        let drained: Vec<_> = q.drain().collect();
        assert_eq!(drained, vec![InputEvent::Fire, InputEvent::Move(Direction::Left)]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_collect_tick_input() {
        let input = collect_tick_input([
            InputEvent::Move(Direction::Right),
            InputEvent::Boost(true),
            InputEvent::Fire,
            InputEvent::Move(Direction::Left),
            InputEvent::Boost(false),
        ]);
        assert_eq!(input.moves, vec![Direction::Right, Direction::Left]);
        assert!(input.fire);
        assert_eq!(input.boost, Some(false));
    }
}
