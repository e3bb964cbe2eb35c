//! Parsing of key strings such as `cmd+k` or `alt+shift+down`
//!
//! Used by the replay CLI and by tests to describe key events compactly.

use super::types::{CommandModifier, KeyCode, Modifiers};

/// Errors that can occur when parsing key strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    Empty,
    UnknownKey(String),
    MultipleKeys(String),
    NoKey(String),
}

impl std::fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyParseError::Empty => write!(f, "Empty key string"),
            KeyParseError::UnknownKey(k) => write!(f, "Unknown key: {}", k),
            KeyParseError::MultipleKeys(s) => write!(f, "Multiple keys in: {}", s),
            KeyParseError::NoKey(s) => write!(f, "No key found in: {}", s),
        }
    }
}

impl std::error::Error for KeyParseError {}

/// Parse a key string like "cmd+shift+/" into a key code and modifiers
///
/// `cmd` resolves to the given platform command modifier.
pub fn parse_key_string(
    key_str: &str,
    command: CommandModifier,
) -> Result<(KeyCode, Modifiers), KeyParseError> {
    let trimmed = key_str.trim();
    if trimmed.is_empty() {
        return Err(KeyParseError::Empty);
    }

    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in trimmed.split('+') {
        let part_lower = part.to_lowercase();
        match part_lower.as_str() {
            "cmd" | "mod" => mods = mods | command.modifier(),
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                if key_part.is_some() {
                    return Err(KeyParseError::MultipleKeys(key_str.to_string()));
                }
                key_part = Some(parse_key_code(&part_lower)?);
            }
        }
    }

    let key = key_part.ok_or_else(|| KeyParseError::NoKey(key_str.to_string()))?;
    Ok((key, mods))
}

/// Parse a key code from string
pub fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),
        "contextmenu" | "menu" | "apps" => Ok(KeyCode::ContextMenu),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),
        "insert" | "ins" => Ok(KeyCode::Insert),

        "backtick" | "backquote" => Ok(KeyCode::Char('`')),
        "slash" => Ok(KeyCode::Char('/')),
        "period" | "dot" => Ok(KeyCode::Char('.')),
        "plus" => Ok(KeyCode::Char('+')),

        // Bare modifier key presses
        "shiftkey" => Ok(KeyCode::Shift),
        "controlkey" | "ctrlkey" => Ok(KeyCode::Control),
        "altkey" => Ok(KeyCode::Alt),
        "metakey" => Ok(KeyCode::Meta),

        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=24).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            Err(KeyParseError::UnknownKey(key.to_string()))
        }
    }
}
