//! Top banner precedence
//!
//! At most one banner is shown above the shell. Conditions are supplied by
//! the host and the client; this module only picks the winner.

use serde::{Deserialize, Serialize};

use super::notices::{find_usage_limit, NoticeEvent};
use super::sync::{LimitDetails, SyncErrorData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitKind {
    /// The homeserver is refusing sync
    Hard,
    /// A server notice warns the limit was reached
    Soft,
}

/// Progress of a running update check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCheck {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "banner", rename_all = "snake_case")]
pub enum TopBanner {
    ServerLimit {
        kind: LimitKind,
        #[serde(flatten)]
        details: LimitDetails,
    },
    Cookie {
        policy_url: Option<String>,
    },
    NewVersion {
        version: Option<String>,
        new_version: Option<String>,
        release_notes: Option<String>,
    },
    UpdateCheck(UpdateCheck),
    PasswordNag,
    NotifierToolbar,
}

/// Everything banner selection looks at
#[derive(Debug, Clone, Copy, Default)]
pub struct BannerInputs<'a> {
    pub sync_error: Option<&'a SyncErrorData>,
    pub server_notices: &'a [NoticeEvent],
    pub show_cookie_bar: bool,
    /// Analytics policy; the cookie bar needs one
    pub policy_url: Option<&'a str>,
    pub do_not_track: Option<&'a str>,
    pub has_new_version: bool,
    pub version: Option<&'a str>,
    pub new_version: Option<&'a str>,
    pub release_notes: Option<&'a str>,
    pub checking_for_update: Option<&'a UpdateCheck>,
    pub user_has_generated_password: bool,
    pub show_notifier_toolbar: bool,
}

/// Pick the highest priority banner whose condition holds
pub fn select_top_banner(inputs: &BannerInputs<'_>) -> Option<TopBanner> {
    if let Some(details) = inputs.sync_error.and_then(SyncErrorData::resource_limit) {
        return Some(TopBanner::ServerLimit {
            kind: LimitKind::Hard,
            details: details.clone(),
        });
    }

    if let Some(notice) = find_usage_limit(inputs.server_notices) {
        return Some(TopBanner::ServerLimit {
            kind: LimitKind::Soft,
            details: notice.limit_details(),
        });
    }

    if inputs.show_cookie_bar && inputs.policy_url.is_some() && inputs.do_not_track != Some("1") {
        return Some(TopBanner::Cookie {
            policy_url: inputs.policy_url.map(str::to_string),
        });
    }

    if inputs.has_new_version {
        return Some(TopBanner::NewVersion {
            version: inputs.version.map(str::to_string),
            new_version: inputs.new_version.map(str::to_string),
            release_notes: inputs.release_notes.map(str::to_string),
        });
    }

    if let Some(check) = inputs.checking_for_update {
        return Some(TopBanner::UpdateCheck(check.clone()));
    }

    if inputs.user_has_generated_password {
        return Some(TopBanner::PasswordNag);
    }

    if inputs.show_notifier_toolbar {
        return Some(TopBanner::NotifierToolbar);
    }

    None
}

/// Conditions whose change moves the layout below the banner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerFlags {
    pub show_cookie_bar: bool,
    pub has_new_version: bool,
    pub user_has_generated_password: bool,
    pub show_notifier_toolbar: bool,
}

pub const BODY_CLASS: &str = "mx_MatrixChat";
pub const TOOLBAR_SHOWING_CLASS: &str = "mx_MatrixChat_toolbarShowing";
pub const COMPACT_LAYOUT_CLASS: &str = "mx_MatrixChat_useCompactLayout";

pub fn body_classes(banner_shown: bool, compact_layout: bool) -> Vec<&'static str> {
    let mut classes = vec![BODY_CLASS];
    if banner_shown {
        classes.push(TOOLBAR_SHOWING_CLASS);
    }
    if compact_layout {
        classes.push(COMPACT_LAYOUT_CLASS);
    }
    classes
}
