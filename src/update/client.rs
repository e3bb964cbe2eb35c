//! Chat client notifications

use serde_json::Value;

use crate::actions::Action;
use crate::commands::Cmd;
use crate::messages::ClientMsg;
use crate::model::sync::errcode_of;
use crate::model::{ShellModel, SyncErrorData, SyncState};

/// Account data carrying the web client's settings
pub const WEB_SETTINGS_EVENT: &str = "im.vector.web.settings";
pub const IGNORED_USER_LIST_EVENT: &str = "m.ignored_user_list";

pub fn update_client(model: &mut ShellModel, msg: ClientMsg) -> Option<Cmd> {
    match msg {
        ClientMsg::AccountData {
            event_type,
            content,
        } => {
            on_account_data(model, &event_type, &content);
            None
        }
        ClientMsg::Sync {
            state,
            old_state,
            data,
        } => on_sync(model, state, old_state, data),
        ClientMsg::RoomStateEvent { room_id } => Some(Cmd::RefreshServerNotices {
            room_filter: Some(room_id),
        }),
        ClientMsg::ServerNoticesLoaded(events) => {
            tracing::debug!(count = events.len(), "server notices loaded");
            model.state.server_notice_events = events;
            None
        }
        ClientMsg::SessionChanged {
            has_cached_password,
        } => {
            model.state.user_has_generated_password = has_cached_password;
            None
        }
    }
}

fn on_account_data(model: &mut ShellModel, event_type: &str, content: &Value) {
    if event_type == WEB_SETTINGS_EVENT {
        model.state.use_compact_layout = content
            .get("useCompactLayout")
            .and_then(Value::as_bool)
            .unwrap_or(false);
    }
    if event_type == IGNORED_USER_LIST_EVENT {
        model.dispatcher.dispatch(Action::IgnoreStateChanged);
    }
}

fn on_sync(
    model: &mut ShellModel,
    state: SyncState,
    old_state: Option<SyncState>,
    data: Option<SyncErrorData>,
) -> Option<Cmd> {
    let unchanged = old_state == Some(state)
        && errcode_of(model.state.sync_error.as_ref()) == errcode_of(data.as_ref());
    if unchanged {
        return None;
    }

    model.state.sync_error = if state == SyncState::Error { data } else { None };

    (old_state == Some(SyncState::Prepared) && state == SyncState::Syncing)
        .then(Cmd::refresh_server_notices)
}
