//! Command-line interface of the replay binary
//!
//! The binary mounts a shell, feeds it a JSON-lines script of input events
//! and prints every action published on the bus, one JSON object per line.
//!
//! ```text
//! {"event": "mount"}
//! {"event": "key", "key": "cmd+k"}
//! {"event": "pointer_down", "x": 350, "y": 10, "handle": 0}
//! {"event": "pointer_up", "x": 100, "y": 10}
//! ```

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;
use serde_json::Value;

use crate::keyboard::{
    parse_key_string, CommandModifier, ElementKind, FocusTarget, KeyEvent, KeyParseError,
    KeySource,
};
use crate::messages::{ClientMsg, DragResult, HitTarget, KeyInput, LifecycleMsg, Msg, PointerMsg};
use crate::model::{ShellProps, SyncErrorData, SyncState};
use crate::resizer::Point;

/// Replay input against the chat shell and print the actions it emits
#[derive(Parser, Debug)]
#[command(name = "chatshell", version, about = "Replay input against the chat shell")]
pub struct CliArgs {
    /// JSON-lines script to replay; reads stdin when omitted
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Settings JSON file, defaulting to settings.json in the config dir
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Config file (defaults to the user config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Canned server notice rooms and events (JSON)
    #[arg(long, value_name = "FILE")]
    pub notices: Option<PathBuf>,

    /// Enable console and file logging
    #[arg(long)]
    pub log: bool,
}

/// One line of a replay script
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Mount,
    Unmount,
    Key {
        /// e.g. `cmd+k`, `alt+shift+down`, `a`
        key: String,
        /// Focused element; nothing focused when absent
        #[serde(default)]
        target: Option<ElementKind>,
        #[serde(default)]
        propagation_stopped: bool,
    },
    Paste {
        #[serde(default)]
        chain: Vec<ElementKind>,
    },
    PointerDown {
        x: f32,
        y: f32,
        /// Resize handle index under the pointer
        #[serde(default)]
        handle: Option<usize>,
        #[serde(default)]
        class_names: String,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp {
        x: f32,
        y: f32,
    },
    DragEnd(DragResult),
    AccountData {
        event_type: String,
        #[serde(default)]
        content: Value,
    },
    Sync {
        state: SyncState,
        #[serde(default)]
        old_state: Option<SyncState>,
        #[serde(default)]
        data: Option<SyncErrorData>,
    },
    RoomState {
        room_id: String,
    },
    Session {
        has_cached_password: bool,
    },
    Props(ShellProps),
}

impl ScriptEvent {
    /// Convert to a shell message, resolving `cmd` to `command`
    pub fn into_msg(self, command: CommandModifier) -> Result<Msg, KeyParseError> {
        let msg = match self {
            ScriptEvent::Mount => Msg::Lifecycle(LifecycleMsg::Mount),
            ScriptEvent::Unmount => Msg::Lifecycle(LifecycleMsg::Unmount),
            ScriptEvent::Key {
                key,
                target,
                propagation_stopped,
            } => {
                let (code, mods) = parse_key_string(&key, command)?;
                let (target, source) = match target {
                    Some(kind) => (
                        FocusTarget::Element(kind),
                        KeySource::Shell {
                            propagation_stopped,
                        },
                    ),
                    None => (FocusTarget::Body, KeySource::Document),
                };
                Msg::Key(KeyInput {
                    event: KeyEvent::new(code, mods, target),
                    source,
                })
            }
            ScriptEvent::Paste { chain } => Msg::Paste { chain },
            ScriptEvent::PointerDown {
                x,
                y,
                handle,
                class_names,
            } => Msg::Pointer(PointerMsg::Down {
                position: Point::new(x, y),
                target: match handle {
                    Some(index) => HitTarget::ResizeHandle(index),
                    None => HitTarget::Element { class_names },
                },
            }),
            ScriptEvent::PointerMove { x, y } => Msg::Pointer(PointerMsg::Move {
                position: Point::new(x, y),
            }),
            ScriptEvent::PointerUp { x, y } => Msg::Pointer(PointerMsg::Up {
                position: Point::new(x, y),
            }),
            ScriptEvent::DragEnd(result) => Msg::DragEnd(result),
            ScriptEvent::AccountData {
                event_type,
                content,
            } => Msg::Client(ClientMsg::AccountData {
                event_type,
                content,
            }),
            ScriptEvent::Sync {
                state,
                old_state,
                data,
            } => Msg::Client(ClientMsg::Sync {
                state,
                old_state,
                data,
            }),
            ScriptEvent::RoomState { room_id } => Msg::Client(ClientMsg::RoomStateEvent { room_id }),
            ScriptEvent::Session {
                has_cached_password,
            } => Msg::Client(ClientMsg::SessionChanged {
                has_cached_password,
            }),
            ScriptEvent::Props(props) => Msg::SetProps(Box::new(props)),
        };
        Ok(msg)
    }
}
