//! Drag-and-drop of tags and room tiles

use crate::actions::Action;
use crate::messages::DragResult;
use crate::model::ShellModel;

pub const TAG_PANEL_DROPPABLE: &str = "tag-panel-droppable";
pub const ROOM_SUB_LIST_PREFIX: &str = "room-sub-list-droppable_";

/// Segment after the first `_`, with `"undefined"` meaning no tag
fn tag_of(droppable_id: &str) -> Option<String> {
    droppable_id
        .split('_')
        .nth(1)
        .filter(|tag| *tag != "undefined")
        .map(str::to_string)
}

/// Map a finished drag to a reorder action
pub fn drag_action(result: &DragResult) -> Option<Action> {
    let destination = result.destination.as_ref()?;
    let dest = destination.droppable_id.as_str();

    if dest == TAG_PANEL_DROPPABLE {
        // Draggable ids look like "GroupTile +group:domain"
        let tag = result.draggable_id.split(' ').next_back()?;
        return Some(Action::MoveTag {
            tag: tag.to_string(),
            index: destination.index,
        });
    }

    if dest.starts_with(ROOM_SUB_LIST_PREFIX) {
        let Some(room_id) = result.draggable_id.split('_').nth(1) else {
            tracing::warn!(draggable = %result.draggable_id, "room tile drag without room id");
            return None;
        };
        return Some(Action::TagRoom {
            room_id: room_id.to_string(),
            prev_tag: tag_of(&result.source.droppable_id),
            new_tag: tag_of(dest),
            old_index: result.source.index,
            new_index: destination.index,
        });
    }

    None
}

/// Reorders are dispatched synchronously so stores update before the next frame
pub fn on_drag_end(model: &mut ShellModel, result: &DragResult) {
    if let Some(action) = drag_action(result) {
        model.dispatcher.dispatch_sync(action);
    }
}
