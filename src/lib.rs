//! chatshell - Elm-style logged-in shell for a chat client
//!
//! This crate provides the framework-independent core of the view a chat
//! client shows once logged in: page selection, a collapsible left panel
//! driven by a generic resizer, global keyboard shortcuts and top banner
//! precedence. Outbound intent is published on an injected action bus.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dispatcher;
pub mod keyboard;
pub mod messages;
pub mod model;
pub mod resizer;
pub mod runtime;
pub mod settings;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use actions::Action;
pub use commands::Cmd;
pub use config::ShellConfig;
pub use dispatcher::Dispatcher;
pub use messages::Msg;
pub use model::ShellModel;
pub use runtime::Shell;
