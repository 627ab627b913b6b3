//! Key-event shorthand for focus tests.

use tactus_core::{KeyCode, KeyEvent, Modifiers};

pub fn tab() -> KeyEvent {
    KeyEvent::key_down(KeyCode::Tab)
}

pub fn shift_tab() -> KeyEvent {
    KeyEvent::key_down(KeyCode::Tab).with_modifiers(Modifiers::SHIFT)
}

pub fn arrow_left() -> KeyEvent {
    KeyEvent::key_down(KeyCode::ArrowLeft)
}

pub fn arrow_right() -> KeyEvent {
    KeyEvent::key_down(KeyCode::ArrowRight)
}

pub fn arrow_up() -> KeyEvent {
    KeyEvent::key_down(KeyCode::ArrowUp)
}

pub fn arrow_down() -> KeyEvent {
    KeyEvent::key_down(KeyCode::ArrowDown)
}

pub fn home() -> KeyEvent {
    KeyEvent::key_down(KeyCode::Home)
}

pub fn end() -> KeyEvent {
    KeyEvent::key_down(KeyCode::End)
}
