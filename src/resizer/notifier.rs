//! Layout-change observers

use std::cell::RefCell;

/// What changed in the shell's layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChange {
    /// The left panel handle committed a new size
    LeftHandleResized,
    /// A top banner appeared, disappeared or was replaced
    BannersChanged,
}

type Observer = Box<dyn FnMut(LayoutChange)>;

/// Fan-out point for components deriving geometry from the shell layout
#[derive(Default)]
pub struct ResizeNotifier {
    observers: RefCell<Vec<Observer>>,
}

impl std::fmt::Debug for ResizeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeNotifier")
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

impl ResizeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: impl FnMut(LayoutChange) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    pub fn notify_left_handle_resized(&self) {
        self.notify(LayoutChange::LeftHandleResized);
    }

    pub fn notify_banners_changed(&self) {
        self.notify(LayoutChange::BannersChanged);
    }

    fn notify(&self, change: LayoutChange) {
        tracing::trace!(?change, "layout changed");
        let mut observers = std::mem::take(&mut *self.observers.borrow_mut());
        for observer in observers.iter_mut() {
            observer(change);
        }
        // Keep observers subscribed from inside a notification
        let mut slot = self.observers.borrow_mut();
        let added = std::mem::replace(&mut *slot, observers);
        slot.extend(added);
    }
}
