//! Adapter to convert winit key events to our KeyEvent type

use winit::keyboard::{Key, ModifiersState, NamedKey};

use super::types::{FocusTarget, KeyCode, KeyEvent, Modifiers};

/// Convert winit key event data to a shell key event
///
/// The focus target comes from the host's widget tree; winit has no notion
/// of it. Returns None if the key cannot be mapped (e.g., unknown keys).
pub fn key_event_from_winit(
    logical_key: &Key,
    modifiers: ModifiersState,
    target: FocusTarget,
) -> Option<KeyEvent> {
    let mods = Modifiers::new(
        modifiers.control_key(),
        modifiers.shift_key(),
        modifiers.alt_key(),
        modifiers.super_key(), // super = meta = cmd on macOS
    );

    let key = match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => KeyCode::Enter,
            NamedKey::Escape => KeyCode::Escape,
            NamedKey::Tab => KeyCode::Tab,
            NamedKey::Backspace => KeyCode::Backspace,
            NamedKey::Delete => KeyCode::Delete,
            NamedKey::Space => KeyCode::Space,
            NamedKey::ContextMenu => KeyCode::ContextMenu,

            NamedKey::ArrowUp => KeyCode::Up,
            NamedKey::ArrowDown => KeyCode::Down,
            NamedKey::ArrowLeft => KeyCode::Left,
            NamedKey::ArrowRight => KeyCode::Right,

            NamedKey::Home => KeyCode::Home,
            NamedKey::End => KeyCode::End,
            NamedKey::PageUp => KeyCode::PageUp,
            NamedKey::PageDown => KeyCode::PageDown,
            NamedKey::Insert => KeyCode::Insert,

            NamedKey::Shift => KeyCode::Shift,
            NamedKey::Control => KeyCode::Control,
            NamedKey::Alt => KeyCode::Alt,
            NamedKey::Super | NamedKey::Meta => KeyCode::Meta,

            NamedKey::F1 => KeyCode::F(1),
            NamedKey::F2 => KeyCode::F(2),
            NamedKey::F3 => KeyCode::F(3),
            NamedKey::F4 => KeyCode::F(4),
            NamedKey::F5 => KeyCode::F(5),
            NamedKey::F6 => KeyCode::F(6),
            NamedKey::F7 => KeyCode::F(7),
            NamedKey::F8 => KeyCode::F(8),
            NamedKey::F9 => KeyCode::F(9),
            NamedKey::F10 => KeyCode::F(10),
            NamedKey::F11 => KeyCode::F(11),
            NamedKey::F12 => KeyCode::F(12),

            _ => return None,
        },

        // Character keys - normalize to lowercase
        Key::Character(s) => {
            let c = s.chars().next()?;
            KeyCode::Char(c.to_ascii_lowercase())
        }

        _ => return None,
    };

    Some(KeyEvent::new(key, mods, target))
}
