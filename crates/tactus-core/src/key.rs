//! Keyboard input event types.
//!
//! Platform-independent key events routed to the focus system. Only the
//! navigation keys the focus components consume are modeled; character
//! input is out of scope for the interaction core.

/// Type of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    /// Key was pressed down.
    KeyDown,
    /// Key was released.
    KeyUp,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key is pressed.
    pub shift: bool,
    /// Control key is pressed.
    pub ctrl: bool,
    /// Alt key is pressed.
    pub alt: bool,
    /// Meta/Super key is pressed.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Returns true if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Navigation key codes consumed by the focus system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Escape,
    Space,
}

/// A keyboard event routed to focus components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub event_type: KeyEventType,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn key_down(code: KeyCode) -> Self {
        Self {
            code,
            event_type: KeyEventType::KeyDown,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Tab without Shift.
    pub fn is_tab_forward(&self) -> bool {
        self.code == KeyCode::Tab && !self.modifiers.shift
    }

    /// Shift+Tab.
    pub fn is_tab_backward(&self) -> bool {
        self.code == KeyCode::Tab && self.modifiers.shift
    }
}
