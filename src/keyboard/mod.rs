//! Keyboard routing for the logged-in shell
//!
//! Every key-down reaching the shell is classified once:
//! - the shell's own shortcuts (scrolling, room filter, menus, room switching)
//! - platform shortcuts, for keys the shell does not claim
//! - stray keystrokes, which move focus to the composer so typing "just works"
//!
//! # Architecture
//!
//! ```text
//! winit Key → KeyEvent → accepts(source) → classify() → KeyClassification → Action
//! ```
//!
//! The classifier is a pure function of the event, its modifiers, the focus
//! target and the shell context. The only collaborator is the injected
//! [`Platform`] fallback.

mod classify;
mod parse;
mod platform;
mod types;
#[cfg(feature = "winit-adapter")]
mod winit_adapter;

pub use classify::{
    accepts, classify, KeyClassification, KeyContext, KeyEffect, KeySource, ScrollKey,
};
pub use parse::{parse_key_code, parse_key_string, KeyParseError};
pub use platform::{DefaultPlatform, Platform};
pub use types::{CommandModifier, ElementKind, FocusTarget, KeyCode, KeyEvent, Modifiers};
#[cfg(feature = "winit-adapter")]
pub use winit_adapter::key_event_from_winit;
