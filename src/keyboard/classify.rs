//! Key event classification
//!
//! Every key-down that reaches the shell goes through [`classify`] exactly
//! once. It decides whether the key is one of the shell's shortcuts, a
//! platform shortcut, or a stray keystroke that should land in the composer.

use crate::actions::{Action, RightPanelKind};

use super::platform::Platform;
use super::types::{CommandModifier, KeyCode, KeyEvent};

/// Scroll keys forwarded to the content surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollKey {
    PageUp,
    PageDown,
    /// Jump to the start of the timeline (Cmd+Home)
    Home,
    /// Jump to the end of the timeline (Cmd+End)
    End,
}

/// What the shell should do about a classified key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEffect {
    /// Forward to the displayed content surface's scroll handler
    Scroll(ScrollKey),
    /// Publish on the action bus (queued delivery)
    Dispatch(Action),
    /// The platform handler consumed the key
    PlatformHandled,
    /// Move focus to the composer synchronously so the keystroke types there
    RedirectToComposer,
}

/// Result of classifying one key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyClassification {
    /// A shortcut consumed the key
    pub handled: bool,
    pub effect: Option<KeyEffect>,
    pub stop_propagation: bool,
    pub prevent_default: bool,
}

impl KeyClassification {
    fn handled(effect: KeyEffect) -> Self {
        Self {
            handled: true,
            effect: Some(effect),
            stop_propagation: true,
            prevent_default: true,
        }
    }

    fn redirect() -> Self {
        Self {
            handled: false,
            effect: Some(KeyEffect::RedirectToComposer),
            stop_propagation: true,
            // The keystroke must still produce its character in the composer
            prevent_default: false,
        }
    }

    /// Not ours: let the event continue untouched
    pub fn ignored() -> Self {
        Self {
            handled: false,
            effect: None,
            stop_propagation: false,
            prevent_default: false,
        }
    }
}

/// Shell state the classifier reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub command: CommandModifier,
    /// The right panel the current page can toggle, if any
    pub right_panel: Option<RightPanelKind>,
}

/// Which listener observed the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Top-level listener on the document; sees every key-down
    Document,
    /// Listener on the shell's own root, reached by bubbling
    Shell {
        /// A descendant already handled the event and stopped it
        propagation_stopped: bool,
    },
}

/// Whether an event observed by `source` should be classified
///
/// The document listener only takes events with nothing focused; focused
/// events reach the shell through bubbling, after descendants had a chance
/// to claim them. Each event is therefore classified at most once.
pub fn accepts(source: KeySource, event: &KeyEvent) -> bool {
    match source {
        KeySource::Document => event.target.is_body(),
        KeySource::Shell {
            propagation_stopped,
        } => !propagation_stopped && !event.target.is_body(),
    }
}

/// Classify a key event. First matching rule wins.
pub fn classify(
    event: &KeyEvent,
    ctx: &KeyContext,
    platform: &mut dyn Platform,
) -> KeyClassification {
    let mods = event.mods;

    // Never captured, so the native context menu stays keyboard accessible
    if event.key == KeyCode::ContextMenu {
        return KeyClassification::ignored();
    }

    let shortcut = match event.key {
        KeyCode::PageUp | KeyCode::PageDown => mods.is_empty().then(|| {
            KeyEffect::Scroll(if event.key == KeyCode::PageUp {
                ScrollKey::PageUp
            } else {
                ScrollKey::PageDown
            })
        }),

        KeyCode::Home | KeyCode::End => ctx.command.held_alone(mods).then(|| {
            KeyEffect::Scroll(if event.key == KeyCode::Home {
                ScrollKey::Home
            } else {
                ScrollKey::End
            })
        }),

        KeyCode::Char('k') => ctx
            .command
            .held_alone(mods)
            .then_some(KeyEffect::Dispatch(Action::FocusRoomFilter)),

        // Cmd+P is print and Cmd+I is italics in the composer, so backtick it is
        KeyCode::Char('`') => ctx
            .command
            .held_alone(mods)
            .then_some(KeyEffect::Dispatch(Action::ToggleTopLeftMenu)),

        KeyCode::Char('/') => ctx
            .command
            .held_alone_ignoring_shift(mods)
            .then_some(KeyEffect::Dispatch(Action::ToggleKeyboardShortcuts)),

        KeyCode::Up | KeyCode::Down => (mods.alt() && !mods.ctrl() && !mods.meta()).then(|| {
            KeyEffect::Dispatch(Action::ViewRoomDelta {
                delta: if event.key == KeyCode::Up { -1 } else { 1 },
                unread: mods.shift(),
            })
        }),

        KeyCode::Char('.') => match ctx.right_panel {
            Some(kind) if ctx.command.held_alone(mods) => {
                Some(KeyEffect::Dispatch(Action::ToggleRightPanel { kind }))
            }
            _ => None,
        },

        _ => platform
            .on_key_down(event)
            .then_some(KeyEffect::PlatformHandled),
    };

    if let Some(effect) = shortcut {
        return KeyClassification::handled(effect);
    }

    // Shift alone still types characters; a bare modifier press never does
    if event.key.is_modifier() || mods.has_non_shift() {
        return KeyClassification::ignored();
    }

    // Space/Enter on a focused control activates it
    let is_click_shortcut =
        !event.target.is_body() && matches!(event.key, KeyCode::Space | KeyCode::Enter);

    if !is_click_shortcut && event.key != KeyCode::Tab && !event.target.can_receive_input() {
        return KeyClassification::redirect();
    }

    KeyClassification::ignored()
}
