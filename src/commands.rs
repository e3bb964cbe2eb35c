//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Re-read pinned events from server notice rooms
    ///
    /// With a room filter, the refresh only runs if that room is a server
    /// notice room. The result comes back as `ClientMsg::ServerNoticesLoaded`.
    RefreshServerNotices { room_filter: Option<String> },
}

impl Cmd {
    pub fn refresh_server_notices() -> Self {
        Cmd::RefreshServerNotices { room_filter: None }
    }
}
