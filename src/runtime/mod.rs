//! Runtime module - executes commands the update functions return
//!
//! - `notices` - the chat client seam and the server notice refresh
//! - `shell` - message loop tying the model to its collaborators

pub mod notices;
pub mod shell;

pub use notices::{collect_server_notices, NoticeRoom, NoticeSource, StaticNoticeSource};
pub use shell::Shell;
