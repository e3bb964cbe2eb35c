//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keyboard::{ElementKind, KeyEvent, KeySource};
use crate::model::{NoticeEvent, ShellProps, SyncErrorData, SyncState};
use crate::resizer::Point;

/// Shell lifecycle, driven by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleMsg {
    /// Create and attach the resizer, restore the persisted layout
    Mount,
    /// Detach the resizer
    Unmount,
}

/// A key-down and the listener that observed it
#[derive(Debug, Clone, PartialEq)]
pub struct KeyInput {
    pub event: KeyEvent,
    pub source: KeySource,
}

/// What sits under the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Resize handle at this position in the resizer
    ResizeHandle(usize),
    /// Any other element, by its space-separated class list
    Element { class_names: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    Down { position: Point, target: HitTarget },
    Move { position: Point },
    Up { position: Point },
}

/// Where a drag-and-drop started or ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub droppable_id: String,
    pub index: usize,
}

/// Outcome of a drag-and-drop gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub draggable_id: String,
    pub source: DragLocation,
    /// None when dropped outside any droppable
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

/// Notifications from the chat client and session
#[derive(Debug, Clone, PartialEq)]
pub enum ClientMsg {
    AccountData {
        event_type: String,
        content: Value,
    },
    Sync {
        state: SyncState,
        /// None on the first sync
        old_state: Option<SyncState>,
        data: Option<SyncErrorData>,
    },
    /// A state event arrived in some room
    RoomStateEvent { room_id: String },
    /// Result of a server notice refresh
    ServerNoticesLoaded(Vec<NoticeEvent>),
    /// The session store changed
    SessionChanged { has_cached_password: bool },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Lifecycle(LifecycleMsg),
    Key(KeyInput),
    /// A paste, with the target followed by its ancestors
    Paste { chain: Vec<ElementKind> },
    Pointer(PointerMsg),
    DragEnd(DragResult),
    Client(ClientMsg),
    /// Host replaced the view inputs
    SetProps(Box<ShellProps>),
}
