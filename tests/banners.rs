//! Top banner tests
//!
//! Precedence between the banners and the layout notification that fires
//! when a banner condition flips.

mod common;

use chatshell::config::{ShellConfig, TrackingConfig};
use chatshell::messages::ClientMsg;
use chatshell::model::{
    LimitDetails, LimitKind, NoticeEvent, ShellProps, SyncError, SyncErrorData, SyncState,
    TopBanner, UpdateCheck, M_RESOURCE_LIMIT_EXCEEDED, USAGE_LIMIT_REACHED,
};
use chatshell::resizer::LayoutChange;
use chatshell::settings::MemoryStore;
use chatshell::view::view;
use chatshell::Msg;
use common::TestShell;
use serde_json::json;

const POLICY_URL: &str = "https://example.org/privacy";

fn shell_with_policy() -> TestShell {
    let config = ShellConfig {
        tracking: TrackingConfig {
            policy_url: Some(POLICY_URL.to_string()),
        },
        ..ShellConfig::default()
    };
    TestShell::with_config(config, MemoryStore::new())
}

fn hard_limit_sync() -> Msg {
    Msg::Client(ClientMsg::Sync {
        state: SyncState::Error,
        old_state: Some(SyncState::Syncing),
        data: Some(SyncErrorData {
            error: Some(SyncError {
                errcode: M_RESOURCE_LIMIT_EXCEEDED.to_string(),
                data: LimitDetails {
                    admin_contact: Some("mailto:admin@example.org".to_string()),
                    limit_type: Some("monthly_active_user".to_string()),
                },
            }),
        }),
    })
}

fn usage_limit_notice() -> NoticeEvent {
    NoticeEvent {
        event_id: "$limit".to_string(),
        event_type: "m.room.message".to_string(),
        content: json!({
            "msgtype": "m.server_notice",
            "server_notice_type": USAGE_LIMIT_REACHED,
            "admin_contact": "mailto:ops@example.org",
            "limit_type": "monthly_active_user",
        }),
    }
}

// ========================================================================
// Precedence
// ========================================================================

#[test]
fn test_no_banner_by_default() {
    let shell = TestShell::new();
    assert_eq!(shell.model.top_banner(), None);
    assert_eq!(view(&shell.model).body_classes, vec!["mx_MatrixChat"]);
}

#[test]
fn test_hard_limit_wins_over_everything() {
    let mut shell = shell_with_policy();
    shell.set_props(ShellProps {
        show_cookie_bar: true,
        has_new_version: true,
        show_notifier_toolbar: true,
        ..ShellProps::default()
    });
    shell.send(Msg::Client(ClientMsg::ServerNoticesLoaded(vec![
        usage_limit_notice(),
    ])));
    shell.send(hard_limit_sync());

    match shell.model.top_banner() {
        Some(TopBanner::ServerLimit { kind, details }) => {
            assert_eq!(kind, LimitKind::Hard);
            assert_eq!(details.admin_contact.as_deref(), Some("mailto:admin@example.org"));
        }
        other => panic!("expected hard limit banner, got {:?}", other),
    }
}

#[test]
fn test_soft_limit_from_server_notice() {
    let mut shell = shell_with_policy();
    shell.set_props(ShellProps {
        show_cookie_bar: true,
        ..ShellProps::default()
    });
    shell.send(Msg::Client(ClientMsg::ServerNoticesLoaded(vec![
        usage_limit_notice(),
    ])));

    match shell.model.top_banner() {
        Some(TopBanner::ServerLimit { kind, details }) => {
            assert_eq!(kind, LimitKind::Soft);
            assert_eq!(details.admin_contact.as_deref(), Some("mailto:ops@example.org"));
        }
        other => panic!("expected soft limit banner, got {:?}", other),
    }
}

#[test]
fn test_recovered_sync_clears_hard_limit() {
    let mut shell = TestShell::new();
    shell.send(hard_limit_sync());
    assert!(shell.model.top_banner().is_some());

    shell.send(Msg::Client(ClientMsg::Sync {
        state: SyncState::Syncing,
        old_state: Some(SyncState::Error),
        data: None,
    }));
    assert_eq!(shell.model.top_banner(), None);
}

#[test]
fn test_cookie_bar_needs_policy_and_tracking() {
    let props = ShellProps {
        show_cookie_bar: true,
        ..ShellProps::default()
    };

    let mut shell = TestShell::new();
    shell.set_props(props.clone());
    assert_eq!(shell.model.top_banner(), None, "no policy url configured");

    let mut shell = shell_with_policy();
    shell.set_props(props.clone());
    assert_eq!(
        shell.model.top_banner(),
        Some(TopBanner::Cookie {
            policy_url: Some(POLICY_URL.to_string())
        })
    );

    shell.set_props(ShellProps {
        do_not_track: Some("1".to_string()),
        ..props
    });
    assert_eq!(shell.model.top_banner(), None);
}

#[test]
fn test_new_version_beats_update_check_and_password_nag() {
    let mut shell = TestShell::new();
    shell.send(Msg::Client(ClientMsg::SessionChanged {
        has_cached_password: true,
    }));
    assert_eq!(shell.model.top_banner(), Some(TopBanner::PasswordNag));

    shell.set_props(ShellProps {
        checking_for_update: Some(UpdateCheck {
            status: "checking".to_string(),
            detail: None,
        }),
        ..ShellProps::default()
    });
    assert!(matches!(
        shell.model.top_banner(),
        Some(TopBanner::UpdateCheck(_))
    ));

    shell.set_props(ShellProps {
        has_new_version: true,
        version: Some("1.0.0".to_string()),
        new_version: Some("1.1.0".to_string()),
        ..ShellProps::default()
    });
    assert_eq!(
        shell.model.top_banner(),
        Some(TopBanner::NewVersion {
            version: Some("1.0.0".to_string()),
            new_version: Some("1.1.0".to_string()),
            release_notes: None,
        })
    );
}

#[test]
fn test_notifier_toolbar_is_last_resort() {
    let mut shell = TestShell::new();
    shell.set_props(ShellProps {
        show_notifier_toolbar: true,
        ..ShellProps::default()
    });
    assert_eq!(shell.model.top_banner(), Some(TopBanner::NotifierToolbar));

    let classes = view(&shell.model).body_classes;
    assert!(classes.contains(&"mx_MatrixChat_toolbarShowing"));
}

// ========================================================================
// Layout notifications
// ========================================================================

#[test]
fn test_banner_flag_change_notifies_layout() {
    let mut shell = TestShell::new();
    shell.set_props(ShellProps {
        has_new_version: true,
        ..ShellProps::default()
    });
    assert_eq!(*shell.layout.borrow(), vec![LayoutChange::BannersChanged]);

    // Same flags again: nothing moves
    shell.set_props(ShellProps {
        has_new_version: true,
        ..ShellProps::default()
    });
    assert_eq!(shell.layout.borrow().len(), 1);
}

#[test]
fn test_generated_password_change_notifies_layout() {
    let mut shell = TestShell::new();
    shell.send(Msg::Client(ClientMsg::SessionChanged {
        has_cached_password: true,
    }));
    shell.send(Msg::Client(ClientMsg::SessionChanged {
        has_cached_password: false,
    }));
    assert_eq!(
        *shell.layout.borrow(),
        vec![LayoutChange::BannersChanged, LayoutChange::BannersChanged]
    );
}

#[test]
fn test_unrelated_props_do_not_notify() {
    let mut shell = TestShell::new();
    shell.set_props(ShellProps {
        left_disabled: true,
        ..ShellProps::default()
    });
    assert!(shell.layout.borrow().is_empty());
}
