//! Shell model - the complete state of the logged-in view
//!
//! Props are owned by the host and replaced wholesale; state is what the
//! shell derives from client notifications and user input.

pub mod banner;
pub mod notices;
pub mod page;
pub mod sync;

pub use banner::{
    body_classes, select_top_banner, BannerFlags, BannerInputs, LimitKind, TopBanner, UpdateCheck,
};
pub use notices::{
    find_usage_limit, NoticeEvent, MAX_PINNED_NOTICES_PER_ROOM, SERVER_NOTICE_TAG,
    USAGE_LIMIT_REACHED,
};
pub use page::{select_page, PageType, PageView};
pub use sync::{LimitDetails, SyncError, SyncErrorData, SyncState, M_RESOURCE_LIMIT_EXCEEDED};

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::RightPanelKind;
use crate::config::ShellConfig;
use crate::dispatcher::Dispatcher;
use crate::keyboard::{KeyClassification, KeyContext, Platform, ScrollKey};
use crate::resizer::{CollapseDistributor, Point, ResizeNotifier, Resizer};
use crate::settings::SettingsStore;

/// Index of the left panel in the shell's resizer
pub const LEFT_PANEL_REGION: usize = 0;

/// View inputs supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellProps {
    pub page_type: PageType,
    pub current_room_id: Option<String>,
    pub current_user_id: Option<String>,
    pub current_group_id: Option<String>,
    pub current_group_is_new: bool,

    pub left_disabled: bool,
    pub right_disabled: bool,
    pub middle_disabled: bool,
    pub collapse_lhs: bool,
    /// Hide the whole shell from screen readers
    pub hide_to_sr_users: bool,

    pub show_cookie_bar: bool,
    pub do_not_track: Option<String>,
    pub has_new_version: bool,
    pub version: Option<String>,
    pub new_version: Option<String>,
    pub new_version_release_notes: Option<String>,
    pub checking_for_update: Option<UpdateCheck>,
    pub show_notifier_toolbar: bool,
}

/// State derived inside the shell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    /// Background mouse-down waiting to be classified as a click
    pub mouse_down: Option<Point>,
    pub sync_error: Option<SyncErrorData>,
    pub use_compact_layout: bool,
    pub server_notice_events: Vec<NoticeEvent>,
    pub user_has_generated_password: bool,
}

/// The scrollable content surface of the room view
pub trait ScrollTarget {
    fn handle_scroll_key(&mut self, key: ScrollKey);

    fn can_reset_timeline(&self) -> bool {
        true
    }
}

/// The complete shell model
pub struct ShellModel {
    pub props: ShellProps,
    pub state: ShellState,
    pub config: ShellConfig,
    pub dispatcher: Rc<Dispatcher>,
    pub settings: Rc<dyn SettingsStore>,
    pub resize_notifier: Rc<ResizeNotifier>,
    pub platform: Box<dyn Platform>,
    /// Created on mount
    pub resizer: Option<Resizer<CollapseDistributor>>,
    /// Set by the host while a room view is on screen
    pub room_view: Option<Box<dyn ScrollTarget>>,
    /// Outcome of the most recent key message
    pub last_key: Option<KeyClassification>,
    pub mounted: bool,
    /// Set by unmount; keyboard and paste input is dropped until the next mount
    pub unmounted: bool,
}

impl std::fmt::Debug for ShellModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellModel")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("config", &self.config)
            .field("resizer", &self.resizer)
            .field("room_view", &self.room_view.is_some())
            .field("mounted", &self.mounted)
            .field("unmounted", &self.unmounted)
            .finish()
    }
}

impl ShellModel {
    pub fn new(
        config: ShellConfig,
        dispatcher: Rc<Dispatcher>,
        settings: Rc<dyn SettingsStore>,
        resize_notifier: Rc<ResizeNotifier>,
        platform: Box<dyn Platform>,
    ) -> Self {
        let state = ShellState {
            use_compact_layout: crate::settings::read_flag(
                settings.as_ref(),
                crate::settings::COMPACT_LAYOUT_KEY,
            ),
            ..ShellState::default()
        };
        Self {
            props: ShellProps::default(),
            state,
            config,
            dispatcher,
            settings,
            resize_notifier,
            platform,
            resizer: None,
            room_view: None,
            last_key: None,
            mounted: false,
            unmounted: false,
        }
    }

    pub fn with_props(mut self, props: ShellProps) -> Self {
        self.props = props;
        self
    }

    pub fn page(&self) -> Option<PageView> {
        select_page(&self.props)
    }

    /// Everything the key classifier needs besides the event
    pub fn key_context(&self) -> KeyContext {
        let right_panel = match self.props.page_type {
            PageType::RoomView => Some(RightPanelKind::Room),
            PageType::GroupView => Some(RightPanelKind::Group),
            _ => None,
        };
        KeyContext {
            command: self
                .config
                .command_modifier_or(self.platform.command_modifier()),
            right_panel,
        }
    }

    /// Whether jumping to the live timeline is safe for `room_id`
    pub fn can_reset_timeline_in_room(&self, _room_id: &str) -> bool {
        self.room_view
            .as_ref()
            .map_or(true, |view| view.can_reset_timeline())
    }

    pub fn banner_inputs(&self) -> BannerInputs<'_> {
        BannerInputs {
            sync_error: self.state.sync_error.as_ref(),
            server_notices: &self.state.server_notice_events,
            show_cookie_bar: self.props.show_cookie_bar,
            policy_url: self.config.tracking.policy_url.as_deref(),
            do_not_track: self.props.do_not_track.as_deref(),
            has_new_version: self.props.has_new_version,
            version: self.props.version.as_deref(),
            new_version: self.props.new_version.as_deref(),
            release_notes: self.props.new_version_release_notes.as_deref(),
            checking_for_update: self.props.checking_for_update.as_ref(),
            user_has_generated_password: self.state.user_has_generated_password,
            show_notifier_toolbar: self.props.show_notifier_toolbar,
        }
    }

    pub fn top_banner(&self) -> Option<TopBanner> {
        select_top_banner(&self.banner_inputs())
    }

    pub fn banner_flags(&self) -> BannerFlags {
        BannerFlags {
            show_cookie_bar: self.props.show_cookie_bar,
            has_new_version: self.props.has_new_version,
            user_has_generated_password: self.state.user_has_generated_password,
            show_notifier_toolbar: self.props.show_notifier_toolbar,
        }
    }

    /// Current left panel size, once mounted
    pub fn left_panel_size(&self) -> Option<f32> {
        self.resizer
            .as_ref()
            .and_then(|r| r.region(LEFT_PANEL_REGION))
            .map(|r| r.size())
    }

    pub fn left_panel_collapsed(&self) -> bool {
        self.resizer
            .as_ref()
            .and_then(|r| r.region(LEFT_PANEL_REGION))
            .is_some_and(|r| r.is_collapsed())
    }
}
