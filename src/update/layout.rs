//! Mount, unmount and the left panel resizer

use std::rc::Rc;

use crate::actions::Action;
use crate::commands::Cmd;
use crate::model::{ShellModel, LEFT_PANEL_REGION};
use crate::resizer::{CollapseConfig, CollapseDistributor, Handle, Region, Resizer};
use crate::settings::{read_left_panel_size, write_left_panel_size, LHS_SIZE_KEY};

/// Attach a fresh resizer, restore the persisted size and load notices
pub fn mount(model: &mut ShellModel) -> Option<Cmd> {
    if model.mounted {
        tracing::debug!("mount while already mounted, ignoring");
        return None;
    }

    let mut resizer = create_resizer(model);
    resizer.attach();
    model.resizer = Some(resizer);
    load_resizer_preferences(model);
    model.mounted = true;
    model.unmounted = false;

    Some(Cmd::refresh_server_notices())
}

pub fn unmount(model: &mut ShellModel) {
    if let Some(resizer) = model.resizer.as_mut() {
        resizer.detach();
    }
    model.mounted = false;
    model.unmounted = true;
}

/// The left panel, then the page it gives way to
pub fn create_resizer(model: &ShellModel) -> Resizer<CollapseDistributor> {
    let panel = &model.config.left_panel;

    let dispatcher = Rc::clone(&model.dispatcher);
    let settings = Rc::clone(&model.settings);
    let on_collapsed = move |collapsed: bool| {
        if collapsed {
            dispatcher.dispatch_sync(Action::HideLeftPanel);
            settings.set(LHS_SIZE_KEY, "0");
        } else {
            dispatcher.dispatch_sync(Action::ShowLeftPanel);
        }
    };

    let settings = Rc::clone(&model.settings);
    let notifier = Rc::clone(&model.resize_notifier);
    let on_resized = move |size: f32| {
        write_left_panel_size(settings.as_ref(), size);
        notifier.notify_left_handle_resized();
    };

    let distributor = CollapseDistributor::new(
        CollapseConfig::new(panel.toggle_size)
            .on_collapsed(on_collapsed)
            .on_resized(on_resized),
    );

    let regions = vec![
        Region::new(panel.default_size).with_bounds(panel.min_size, panel.max_size),
        Region::new(0.0),
    ];
    Resizer::new(regions, vec![Handle::new(LEFT_PANEL_REGION)], distributor)
}

/// Apply the persisted left panel size, or the configured default
pub fn load_resizer_preferences(model: &mut ShellModel) {
    let size = read_left_panel_size(model.settings.as_ref(), model.config.left_panel.default_size);
    let applied = model
        .resizer
        .as_mut()
        .and_then(|r| r.for_handle_at(LEFT_PANEL_REGION))
        .map(|handle| handle.resize(size));
    tracing::debug!(requested = size, ?applied, "restored left panel size");
}
