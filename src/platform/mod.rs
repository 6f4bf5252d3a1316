//! Platform abstraction layer
//!
//! The window system pushes events as they arrive; the frame loop pulls
//! them once per frame. `EventQueue` sits between the two:
//! - the winit handler appends translated events
//! - `GameLoop` drains everything pending at the start of a frame

mod keys;

use std::collections::VecDeque;

pub use keys::translate_key;

/// Horizontal direction keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// Input events the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Window closed or quit key pressed
    Quit,
    KeyDown(Direction),
    KeyUp(Direction),
}

/// Non-blocking source of input events
pub trait InputSource {
    /// Return every event pending since the last call (possibly none)
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// FIFO buffer of input events between the window system and the frame loop
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl InputSource for EventQueue {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.pending.drain(..).collect()
    }
}

impl<const N: usize> From<[InputEvent; N]> for EventQueue {
    fn from(events: [InputEvent; N]) -> Self {
        Self {
            pending: events.into_iter().collect(),
        }
    }
}
