//! Core types for keyboard routing: KeyEvent, Modifiers, KeyCode, FocusTarget

use std::fmt;

use serde::{Deserialize, Serialize};

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Remove the modifiers in `other`
    #[inline]
    pub const fn without(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 & !other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Ctrl, Alt or Meta held. Shift alone still produces typed characters.
    #[inline]
    pub const fn has_non_shift(self) -> bool {
        self.ctrl() || self.alt() || self.meta()
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push(if cfg!(target_os = "macos") {
                "Option"
            } else {
                "Alt"
            });
        }
        if self.meta() {
            parts.push(if cfg!(target_os = "macos") {
                "Cmd"
            } else {
                "Win"
            });
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// The platform-preferred primary shortcut modifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandModifier {
    Ctrl,
    Meta,
}

impl CommandModifier {
    /// Cmd on macOS, Ctrl elsewhere
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            CommandModifier::Meta
        } else {
            CommandModifier::Ctrl
        }
    }

    pub fn modifier(self) -> Modifiers {
        match self {
            CommandModifier::Ctrl => Modifiers::CTRL,
            CommandModifier::Meta => Modifiers::META,
        }
    }

    /// The command modifier and nothing else is held
    pub fn held_alone(self, mods: Modifiers) -> bool {
        mods == self.modifier()
    }

    /// The command modifier is held with nothing else except possibly Shift
    pub fn held_alone_ignoring_shift(self, mods: Modifiers) -> bool {
        mods.without(Modifiers::SHIFT) == self.modifier()
    }
}

/// A key code representing a logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,
    ContextMenu,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    // Function keys
    F(u8), // F1-F24

    // The modifier keys themselves, as reported on their own key-down
    Shift,
    Control,
    Alt,
    Meta,
}

impl KeyCode {
    /// A key-down of a modifier key itself
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::Shift | KeyCode::Control | KeyCode::Alt | KeyCode::Meta
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::ContextMenu => write!(f, "ContextMenu"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Insert => write!(f, "Insert"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Shift => write!(f, "Shift"),
            KeyCode::Control => write!(f, "Control"),
            KeyCode::Alt => write!(f, "Alt"),
            KeyCode::Meta => write!(f, "Meta"),
        }
    }
}

/// Kind of element an event targets, as far as text input is concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Input,
    TextArea,
    Select,
    ContentEditable,
    /// Buttons, links, list items and anything else focusable
    Other,
}

impl ElementKind {
    pub const fn can_receive_input(self) -> bool {
        !matches!(self, ElementKind::Other)
    }
}

/// Where keyboard focus was when the event fired
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Nothing is focused; the event targets the page root
    #[default]
    Body,
    Element(ElementKind),
}

impl FocusTarget {
    pub const fn is_body(self) -> bool {
        matches!(self, FocusTarget::Body)
    }

    pub const fn can_receive_input(self) -> bool {
        match self {
            FocusTarget::Body => false,
            FocusTarget::Element(kind) => kind.can_receive_input(),
        }
    }
}

/// A single key-down: the key, the modifiers held, and the focus target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub mods: Modifiers,
    pub target: FocusTarget,
}

impl KeyEvent {
    pub const fn new(key: KeyCode, mods: Modifiers, target: FocusTarget) -> Self {
        Self { key, mods, target }
    }

    /// Key with no modifiers, nothing focused
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
            target: FocusTarget::Body,
        }
    }

    /// Character key with modifiers, nothing focused
    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods,
            target: FocusTarget::Body,
        }
    }

    pub const fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }

    pub const fn on(mut self, target: FocusTarget) -> Self {
        self.target = target;
        self
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}
