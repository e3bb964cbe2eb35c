//! Left panel resizer tests
//!
//! Covers restoring the persisted size on mount, collapse and expand by
//! dragging, and what gets written back to settings.

mod common;

use chatshell::config::{LeftPanelConfig, ShellConfig};
use chatshell::messages::{HitTarget, LifecycleMsg, PointerMsg};
use chatshell::model::LEFT_PANEL_REGION;
use chatshell::resizer::{LayoutChange, Point};
use chatshell::settings::{MemoryStore, LHS_SIZE_KEY};
use chatshell::{Action, Msg};
use common::TestShell;

fn mounted_with(size: Option<&str>) -> TestShell {
    let store = match size {
        Some(size) => MemoryStore::new().with_entry(LHS_SIZE_KEY, size),
        None => MemoryStore::new(),
    };
    let mut shell = TestShell::with_store(store);
    shell.mount();
    shell
}

// ========================================================================
// Restoring the persisted size
// ========================================================================

#[test]
fn test_default_size_without_persisted_value() {
    let shell = mounted_with(None);
    assert_eq!(shell.left_size(), 350.0);
    assert!(!shell.model.left_panel_collapsed());
    assert!(shell.delivered().is_empty());
    assert_eq!(shell.persisted_size(), None, "restoring does not write");
}

#[test]
fn test_persisted_size_restored() {
    let shell = mounted_with(Some("500"));
    assert_eq!(shell.left_size(), 500.0);
    assert_eq!(shell.persisted_size().as_deref(), Some("500"));
}

#[test]
fn test_malformed_size_falls_back_to_default() {
    let shell = mounted_with(Some("wide"));
    assert_eq!(shell.left_size(), 350.0);
}

#[test]
fn test_numeric_prefix_is_used() {
    let shell = mounted_with(Some("420px"));
    assert_eq!(shell.left_size(), 420.0);
}

#[test]
fn test_persisted_zero_restores_collapsed() {
    let shell = mounted_with(Some("0"));
    assert!(shell.model.left_panel_collapsed());
    assert_eq!(shell.left_size(), 0.0);
    assert_eq!(shell.delivered(), vec![Action::HideLeftPanel]);
}

#[test]
fn test_persisted_size_between_threshold_and_minimum_clamps() {
    let shell = mounted_with(Some("240"));
    assert!(!shell.model.left_panel_collapsed());
    assert_eq!(shell.left_size(), 260.0);
}

#[test]
fn test_custom_panel_config() {
    let config = ShellConfig {
        left_panel: LeftPanelConfig {
            default_size: 300.0,
            min_size: 200.0,
            max_size: 400.0,
            toggle_size: 150.0,
        },
        ..ShellConfig::default()
    };
    let mut shell = TestShell::with_config(config, MemoryStore::new().with_entry(LHS_SIZE_KEY, "900"));
    shell.mount();
    assert_eq!(shell.left_size(), 400.0);
}

// ========================================================================
// Dragging
// ========================================================================

#[test]
fn test_drag_within_bounds_persists_and_notifies() {
    let mut shell = mounted_with(None);
    shell.drag_handle(350.0, 410.0);

    assert_eq!(shell.left_size(), 410.0);
    assert_eq!(shell.persisted_size().as_deref(), Some("410"));
    assert_eq!(*shell.layout.borrow(), vec![LayoutChange::LeftHandleResized]);
    assert!(shell.flushed().is_empty());
}

#[test]
fn test_drag_below_minimum_clamps() {
    let mut shell = mounted_with(None);
    shell.drag_handle(350.0, 230.0);

    assert!(!shell.model.left_panel_collapsed());
    assert_eq!(shell.left_size(), 260.0);
    assert_eq!(shell.persisted_size().as_deref(), Some("260"));
}

#[test]
fn test_drag_past_threshold_collapses() {
    let mut shell = mounted_with(None);
    shell.drag_handle(350.0, 120.0);

    assert!(shell.model.left_panel_collapsed());
    assert_eq!(shell.delivered(), vec![Action::HideLeftPanel]);
    assert_eq!(shell.persisted_size().as_deref(), Some("0"));
    assert!(
        shell.layout.borrow().is_empty(),
        "collapsing is not a resize"
    );
}

#[test]
fn test_collapse_only_committed_on_release() {
    let mut shell = mounted_with(None);
    shell.send(Msg::Pointer(PointerMsg::Down {
        position: Point::new(350.0, 0.0),
        target: HitTarget::ResizeHandle(LEFT_PANEL_REGION),
    }));
    shell.send(Msg::Pointer(PointerMsg::Move {
        position: Point::new(50.0, 0.0),
    }));

    assert!(!shell.model.left_panel_collapsed());
    assert!(shell.delivered().is_empty());

    // Back above the threshold before letting go
    shell.send(Msg::Pointer(PointerMsg::Up {
        position: Point::new(400.0, 0.0),
    }));
    assert!(!shell.model.left_panel_collapsed());
    assert_eq!(shell.left_size(), 400.0);
    assert!(shell.delivered().is_empty());
}

#[test]
fn test_drag_out_of_collapse_expands() {
    let mut shell = mounted_with(Some("0"));
    shell.clear();

    shell.drag_handle(0.0, 380.0);

    assert!(!shell.model.left_panel_collapsed());
    assert_eq!(shell.left_size(), 380.0);
    assert_eq!(shell.delivered(), vec![Action::ShowLeftPanel]);
    assert_eq!(shell.persisted_size().as_deref(), Some("380"));
}

#[test]
fn test_collapsed_drag_that_stays_collapsed_is_silent() {
    let mut shell = mounted_with(Some("0"));
    shell.clear();

    shell.drag_handle(0.0, 100.0);

    assert!(shell.model.left_panel_collapsed());
    assert!(shell.delivered().is_empty());
    assert_eq!(shell.persisted_size().as_deref(), Some("0"));
}

#[test]
fn test_unmount_stops_pointer_input() {
    let mut shell = mounted_with(None);
    shell.send(Msg::Lifecycle(LifecycleMsg::Unmount));
    shell.drag_handle(350.0, 500.0);

    assert_eq!(shell.left_size(), 350.0);
    assert_eq!(shell.persisted_size(), None);
}

#[test]
fn test_mount_twice_keeps_current_layout() {
    let mut shell = mounted_with(None);
    shell.drag_handle(350.0, 450.0);
    assert_eq!(shell.mount(), None);
    assert_eq!(shell.left_size(), 450.0);
}
