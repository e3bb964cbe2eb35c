//! Action bus
//!
//! A single-threaded publish point for [`Action`]s. One `Dispatcher` is created
//! by the host at startup and shared (`Rc<Dispatcher>`) with every component
//! that publishes or subscribes.
//!
//! Two delivery modes:
//! - [`Dispatcher::dispatch`] queues the action until the host calls
//!   [`Dispatcher::flush`] (normally once per event-loop turn).
//! - [`Dispatcher::dispatch_sync`] delivers before returning. Used where the
//!   receiver must react before the triggering input finishes, e.g. moving
//!   focus before a keystroke produces text.
//!
//! A dispatch issued by a subscriber while an action is being delivered is
//! delivered right after the current one, never re-entrantly.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::actions::Action;

/// Handle returned by [`Dispatcher::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&Action)>;

#[derive(Default)]
pub struct Dispatcher {
    subscribers: RefCell<Vec<(SubscriberId, Subscriber)>>,
    /// Ids unregistered while a delivery had the subscriber list checked out
    removed_during_delivery: RefCell<Vec<SubscriberId>>,
    deferred: RefCell<VecDeque<Action>>,
    nested: RefCell<VecDeque<Action>>,
    delivering: Cell<bool>,
    next_id: Cell<u64>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("subscribers", &self.subscribers.borrow().len())
            .field("deferred", &self.deferred.borrow().len())
            .field("delivering", &self.delivering.get())
            .finish()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every action delivered from now on
    pub fn register(&self, subscriber: impl FnMut(&Action) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if it was not registered.
    pub fn unregister(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        if let Some(idx) = subscribers.iter().position(|(sid, _)| *sid == id) {
            let removed = subscribers.remove(idx);
            drop(subscribers);
            drop(removed);
            return true;
        }
        drop(subscribers);

        if self.delivering.get() && id.0 < self.next_id.get() {
            let mut pending = self.removed_during_delivery.borrow_mut();
            if pending.contains(&id) {
                return false;
            }
            pending.push(id);
            return true;
        }
        false
    }

    /// Queue an action for the next [`flush`](Self::flush)
    pub fn dispatch(&self, action: Action) {
        tracing::trace!(action = action.name(), "queued");
        self.deferred.borrow_mut().push_back(action);
    }

    /// Deliver an action to all subscribers before returning
    pub fn dispatch_sync(&self, action: Action) {
        if self.delivering.get() {
            tracing::trace!(action = action.name(), "dispatched during delivery, deferring");
            self.nested.borrow_mut().push_back(action);
            return;
        }

        self.delivering.set(true);
        self.deliver(&action);
        loop {
            let next = self.nested.borrow_mut().pop_front();
            match next {
                Some(next) => self.deliver(&next),
                None => break,
            }
        }
        self.delivering.set(false);
    }

    /// Deliver all queued actions in order. Returns how many were delivered.
    pub fn flush(&self) -> usize {
        let mut delivered = 0;
        loop {
            let next = self.deferred.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            self.dispatch_sync(action);
            delivered += 1;
        }
        delivered
    }

    /// Number of actions waiting for a flush
    pub fn pending(&self) -> usize {
        self.deferred.borrow().len()
    }

    fn deliver(&self, action: &Action) {
        tracing::debug!(action = action.name(), "dispatch");

        let mut checked_out = std::mem::take(&mut *self.subscribers.borrow_mut());
        for (id, subscriber) in checked_out.iter_mut() {
            if self.removed_during_delivery.borrow().contains(id) {
                continue;
            }
            subscriber(action);
        }

        let removed = std::mem::take(&mut *self.removed_during_delivery.borrow_mut());
        checked_out.retain(|(id, _)| !removed.contains(id));

        // Subscribers registered during delivery landed in the emptied list
        let mut slot = self.subscribers.borrow_mut();
        let added = std::mem::replace(&mut *slot, checked_out);
        slot.extend(added);
    }
}
