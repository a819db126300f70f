//! Input events delivered to widgets.
//!
//! Positions are in logical pixels relative to the window's top-left corner.

/// Events that widgets can respond to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePress {
        button: MouseButton,
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Mouse button released.
    MouseRelease {
        button: MouseButton,
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Mouse moved.
    MouseMove {
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Mouse wheel scrolled. Positive `delta.1` scrolls content up (wheel away from user).
    MouseScroll {
        delta: (f32, f32),
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Keyboard key pressed.
    KeyPress { key: KeyCode, modifiers: KeyModifiers },
    /// Keyboard key released.
    KeyRelease { key: KeyCode, modifiers: KeyModifiers },
    /// Printable text produced by a key press.
    TextInput { text: String },
    /// Sent to every widget before a `MousePress`, regardless of position
    /// (used for blur and click-outside handling).
    GlobalMousePress {
        button: MouseButton,
        position: (f32, f32),
    },
    /// The window lost keyboard focus.
    FocusLost,
    /// The cursor left the window.
    CursorLeft,
}

impl Event {
    /// Pointer position carried by the event, if any.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Event::MousePress { position, .. }
            | Event::MouseRelease { position, .. }
            | Event::MouseMove { position, .. }
            | Event::MouseScroll { position, .. }
            | Event::GlobalMousePress { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Keyboard keys the toolkit distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// A character key, lowercased.
    Char(char),
    Other,
}

impl KeyCode {
    pub(crate) fn from_winit(key: &winit::keyboard::Key) -> Self {
        use winit::keyboard::{Key, NamedKey};

        match key {
            Key::Named(named) => match named {
                NamedKey::Enter => KeyCode::Enter,
                NamedKey::Escape => KeyCode::Escape,
                NamedKey::Backspace => KeyCode::Backspace,
                NamedKey::Delete => KeyCode::Delete,
                NamedKey::Tab => KeyCode::Tab,
                NamedKey::Space => KeyCode::Space,
                NamedKey::ArrowUp => KeyCode::Up,
                NamedKey::ArrowDown => KeyCode::Down,
                NamedKey::ArrowLeft => KeyCode::Left,
                NamedKey::ArrowRight => KeyCode::Right,
                NamedKey::Home => KeyCode::Home,
                NamedKey::End => KeyCode::End,
                NamedKey::PageUp => KeyCode::PageUp,
                NamedKey::PageDown => KeyCode::PageDown,
                _ => KeyCode::Other,
            },
            Key::Character(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(' '), None) => KeyCode::Space,
                    (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                    _ => KeyCode::Other,
                }
            }
            _ => KeyCode::Other,
        }
    }
}

impl MouseButton {
    pub(crate) fn from_winit(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Back => MouseButton::Other(3),
            winit::event::MouseButton::Forward => MouseButton::Other(4),
            winit::event::MouseButton::Other(n) => MouseButton::Other(n),
        }
    }
}

impl KeyModifiers {
    pub(crate) fn from_winit(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        }
    }
}

/// Text a key press should insert, if any. Control characters and chords
/// with Ctrl/Cmd never produce text.
pub(crate) fn printable_text(text: Option<&str>, modifiers: KeyModifiers) -> Option<String> {
    if modifiers.command() {
        return None;
    }
    let text = text?;
    if text.is_empty() || text.chars().any(char::is_control) {
        return None;
    }
    Some(text.to_string())
}
