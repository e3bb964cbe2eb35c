//! Key-down and paste handling

use crate::actions::Action;
use crate::keyboard::{accepts, classify, ElementKind, KeyClassification, KeyEffect, ScrollKey};
use crate::messages::KeyInput;
use crate::model::ShellModel;

/// Classify and act on a key-down
///
/// Returns None when the listener that saw the event is not the one
/// responsible for it, so each key-down is handled once.
pub fn on_key_down(model: &mut ShellModel, input: &KeyInput) -> Option<KeyClassification> {
    if !accepts(input.source, &input.event) {
        return None;
    }

    let ctx = model.key_context();
    let classification = classify(&input.event, &ctx, model.platform.as_mut());
    tracing::trace!(key = %input.event, ?classification, "classified key");

    match &classification.effect {
        Some(KeyEffect::Scroll(key)) => forward_scroll_key(model, *key),
        Some(KeyEffect::Dispatch(action)) => model.dispatcher.dispatch(action.clone()),
        // Focus must move before the keystroke produces text
        Some(KeyEffect::RedirectToComposer) => model.dispatcher.dispatch_sync(Action::FocusComposer),
        Some(KeyEffect::PlatformHandled) | None => {}
    }

    Some(classification)
}

fn forward_scroll_key(model: &mut ShellModel, key: ScrollKey) {
    let on_room = model.page().is_some_and(|page| page.has_scroll_surface());
    match model.room_view.as_mut() {
        Some(view) if on_room => view.handle_scroll_key(key),
        _ => tracing::trace!(?key, "no scroll surface for key"),
    }
}

/// A paste outside every input goes to the composer
///
/// `chain` is the paste target followed by its ancestors.
pub fn on_paste(model: &mut ShellModel, chain: &[ElementKind]) {
    if !chain.iter().any(|kind| kind.can_receive_input()) {
        // Refocusing during the paste makes the pasted text land in the composer
        model.dispatcher.dispatch_sync(Action::FocusComposer);
    }
}
