//! Winit keyboard translation

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use super::{Direction, InputEvent};

/// Convert a physical key transition into a game event.
///
/// Arrow keys map to directions; Escape quits on press. Everything else is
/// ignored.
pub fn translate_key(key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    let direction = match code {
        KeyCode::ArrowLeft => Direction::Left,
        KeyCode::ArrowRight => Direction::Right,
        KeyCode::Escape if state == ElementState::Pressed => return Some(InputEvent::Quit),
        _ => return None,
    };
    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(direction),
        ElementState::Released => InputEvent::KeyUp(direction),
    })
}
