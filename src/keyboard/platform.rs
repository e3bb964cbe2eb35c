//! Platform collaborator for keys the shell does not own

use super::types::{CommandModifier, KeyEvent};

/// OS-level key handling hook
///
/// The shell consults the platform only for keys none of its own shortcuts
/// claim. Returning `true` marks the event handled.
pub trait Platform {
    fn on_key_down(&mut self, event: &KeyEvent) -> bool;

    /// The primary shortcut modifier on this platform
    fn command_modifier(&self) -> CommandModifier {
        CommandModifier::platform_default()
    }
}

/// Platform with no shortcuts of its own
#[derive(Debug, Clone, Copy)]
pub struct DefaultPlatform {
    command: CommandModifier,
}

impl DefaultPlatform {
    pub fn new(command: CommandModifier) -> Self {
        Self { command }
    }
}

impl Default for DefaultPlatform {
    fn default() -> Self {
        Self::new(CommandModifier::platform_default())
    }
}

impl Platform for DefaultPlatform {
    fn on_key_down(&mut self, _event: &KeyEvent) -> bool {
        false
    }

    fn command_modifier(&self) -> CommandModifier {
        self.command
    }
}
