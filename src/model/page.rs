//! Page selection
//!
//! The page type picks which surface fills the middle of the shell.

use serde::{Deserialize, Serialize};

use super::ShellProps;

/// Main surface requested by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    RoomView,
    MyGroups,
    SocietyPage,
    AssetsPage,
    GlobalPage,
    /// Rendered by the host outside the shell
    RoomDirectory,
    #[default]
    HomePage,
    UserView,
    GroupView,
}

/// The surface the shell renders for a page type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Room {
        /// Changing the key remounts the room view
        key: String,
        disabled: bool,
    },
    MyGroups,
    Society,
    Assets,
    Global,
    Home,
    User {
        user_id: Option<String>,
    },
    Group {
        group_id: Option<String>,
        is_new: bool,
    },
}

impl PageView {
    /// Only the room view takes scroll keys
    pub fn has_scroll_surface(&self) -> bool {
        matches!(self, PageView::Room { .. })
    }
}

/// Resolve the page to render. `None` when the host renders it itself.
pub fn select_page(props: &ShellProps) -> Option<PageView> {
    let view = match props.page_type {
        PageType::RoomView => PageView::Room {
            key: props
                .current_room_id
                .clone()
                .unwrap_or_else(|| "roomview".to_string()),
            disabled: props.middle_disabled,
        },
        PageType::MyGroups => PageView::MyGroups,
        PageType::SocietyPage => PageView::Society,
        PageType::AssetsPage => PageView::Assets,
        PageType::GlobalPage => PageView::Global,
        PageType::RoomDirectory => return None,
        PageType::HomePage => PageView::Home,
        PageType::UserView => PageView::User {
            user_id: props.current_user_id.clone(),
        },
        PageType::GroupView => PageView::Group {
            group_id: props.current_group_id.clone(),
            is_new: props.current_group_is_new,
        },
    };
    Some(view)
}
