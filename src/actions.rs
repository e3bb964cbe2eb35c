//! Outbound actions published on the action bus
//!
//! Actions serialize as `{"action": "<name>", ...fields}` so hosts that bridge
//! to a string-keyed dispatcher can forward them unchanged.

use serde::{Deserialize, Serialize};

/// Which right-hand panel a toggle targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RightPanelKind {
    Room,
    Group,
}

/// Abstract UI intent emitted by the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Left panel was collapsed by dragging
    HideLeftPanel,
    /// Left panel was expanded again
    ShowLeftPanel,
    /// Focus the room list filter (Cmd+K)
    FocusRoomFilter,
    /// Toggle the top-left user menu (Cmd+`)
    ToggleTopLeftMenu,
    /// Open or close the keyboard shortcuts dialog (Cmd+/)
    ToggleKeyboardShortcuts,
    /// Move to the room above (-1) or below (+1), optionally only unread rooms
    ViewRoomDelta { delta: i32, unread: bool },
    /// Toggle the right panel for the current room or group (Cmd+.)
    ToggleRightPanel {
        #[serde(rename = "type")]
        kind: RightPanelKind,
    },
    /// Move focus to the message composer
    FocusComposer,
    /// Close any open user/room/group settings page
    CloseSettings,
    /// The ignored user list changed
    IgnoreStateChanged,
    /// A tag was dropped onto the tag panel at a new position
    MoveTag { tag: String, index: usize },
    /// A room tile was dropped into a room sub-list
    TagRoom {
        room_id: String,
        prev_tag: Option<String>,
        new_tag: Option<String>,
        old_index: usize,
        new_index: usize,
    },
}

impl Action {
    /// The wire name of this action
    pub fn name(&self) -> &'static str {
        match self {
            Action::HideLeftPanel => "hide_left_panel",
            Action::ShowLeftPanel => "show_left_panel",
            Action::FocusRoomFilter => "focus_room_filter",
            Action::ToggleTopLeftMenu => "toggle_top_left_menu",
            Action::ToggleKeyboardShortcuts => "toggle_keyboard_shortcuts",
            Action::ViewRoomDelta { .. } => "view_room_delta",
            Action::ToggleRightPanel { .. } => "toggle_right_panel",
            Action::FocusComposer => "focus_composer",
            Action::CloseSettings => "close_settings",
            Action::IgnoreStateChanged => "ignore_state_changed",
            Action::MoveTag { .. } => "move_tag",
            Action::TagRoom { .. } => "tag_room",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_action_shape() {
        let value = serde_json::to_value(Action::FocusRoomFilter).unwrap();
        assert_eq!(value, json!({ "action": "focus_room_filter" }));
    }

    #[test]
    fn test_fields_are_flattened_next_to_action() {
        let value = serde_json::to_value(Action::ViewRoomDelta {
            delta: 1,
            unread: true,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({ "action": "view_room_delta", "delta": 1, "unread": true })
        );

        let value = serde_json::to_value(Action::ToggleRightPanel {
            kind: RightPanelKind::Group,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({ "action": "toggle_right_panel", "type": "group" })
        );
    }

    #[test]
    fn test_name_matches_serialized_tag() {
        let actions = [
            Action::HideLeftPanel,
            Action::ShowLeftPanel,
            Action::ToggleTopLeftMenu,
            Action::ToggleKeyboardShortcuts,
            Action::CloseSettings,
            Action::IgnoreStateChanged,
            Action::MoveTag {
                tag: "+g:example.org".into(),
                index: 0,
            },
        ];
        for action in actions {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["action"], action.name());
        }
    }
}
