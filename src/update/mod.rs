//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod client;
mod drag;
pub mod keyboard;
pub mod layout;
mod pointer;

use crate::commands::Cmd;
use crate::messages::{LifecycleMsg, Msg};
use crate::model::ShellModel;

#[cfg(debug_assertions)]
use crate::tracing::ShellSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use client::{update_client, IGNORED_USER_LIST_EVENT, WEB_SETTINGS_EVENT};
pub use drag::{drag_action, on_drag_end, ROOM_SUB_LIST_PREFIX, TAG_PANEL_DROPPABLE};
pub use keyboard::{on_key_down, on_paste};
pub use layout::{create_resizer, load_resizer_preferences, mount, unmount};
pub use pointer::{update_pointer, CLICK_RADIUS};

/// Main update function - dispatches to sub-handlers
///
/// A change in any banner condition notifies layout observers, since the
/// space below the banner moves.
pub fn update(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    let banners_before = model.banner_flags();

    #[cfg(debug_assertions)]
    let result = update_traced(model, msg);
    #[cfg(not(debug_assertions))]
    let result = update_inner(model, msg);

    if model.banner_flags() != banners_before {
        model.resize_notifier.notify_banners_changed();
    }
    result
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Lifecycle(LifecycleMsg::Mount) => layout::mount(model),
        Msg::Lifecycle(LifecycleMsg::Unmount) => {
            layout::unmount(model);
            None
        }
        Msg::Key(_) | Msg::Paste { .. } if model.unmounted => {
            tracing::trace!("input after unmount, ignoring");
            model.last_key = None;
            None
        }
        Msg::Key(input) => {
            model.last_key = keyboard::on_key_down(model, &input);
            None
        }
        Msg::Paste { chain } => {
            keyboard::on_paste(model, &chain);
            None
        }
        Msg::Pointer(m) => {
            pointer::update_pointer(model, m);
            None
        }
        Msg::DragEnd(result) => {
            drag::on_drag_end(model, &result);
            None
        }
        Msg::Client(m) => client::update_client(model, m),
        Msg::SetProps(props) => {
            model.props = *props;
            None
        }
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Pointer moves are too frequent to log individually.
#[cfg(debug_assertions)]
fn update_traced(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::PointerMsg;

    let is_noisy = matches!(&msg, Msg::Pointer(PointerMsg::Move { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = ShellSnapshot::from_model(model);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&ShellSnapshot::from_model(model)) {
        debug!(target: "shell", %diff, "state changed");
    }
    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Lifecycle(m) => format!("Lifecycle::{:?}", m),
        Msg::Key(input) => format!("Key({})", input.event),
        Msg::Paste { .. } => "Paste".to_string(),
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::DragEnd(r) => format!("DragEnd({})", r.draggable_id),
        Msg::Client(m) => match m {
            crate::messages::ClientMsg::AccountData { event_type, .. } => {
                format!("Client::AccountData({})", event_type)
            }
            crate::messages::ClientMsg::ServerNoticesLoaded(events) => {
                format!("Client::ServerNoticesLoaded({})", events.len())
            }
            other => format!("Client::{:?}", other),
        },
        Msg::SetProps(props) => format!("SetProps({:?})", props.page_type),
    }
}
