//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chatshell::keyboard::{
    CommandModifier, DefaultPlatform, ElementKind, FocusTarget, KeyCode, KeyEvent, KeySource,
    Modifiers, ScrollKey,
};
use chatshell::messages::{HitTarget, KeyInput, LifecycleMsg, PointerMsg};
use chatshell::model::{PageType, ScrollTarget, ShellProps};
use chatshell::resizer::{LayoutChange, Point, ResizeNotifier};
use chatshell::settings::{MemoryStore, SettingsStore, LHS_SIZE_KEY};
use chatshell::update::update;
use chatshell::{Action, Cmd, Dispatcher, Msg, ShellConfig, ShellModel};

/// A shell model wired to recording collaborators
pub struct TestShell {
    pub model: ShellModel,
    pub dispatcher: Rc<Dispatcher>,
    pub store: Rc<MemoryStore>,
    pub actions: Rc<RefCell<Vec<Action>>>,
    pub layout: Rc<RefCell<Vec<LayoutChange>>>,
}

impl TestShell {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self::with_config(ShellConfig::default(), store)
    }

    pub fn with_config(config: ShellConfig, store: MemoryStore) -> Self {
        let dispatcher = Rc::new(Dispatcher::new());
        let actions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&actions);
        dispatcher.register(move |action| sink.borrow_mut().push(action.clone()));

        let notifier = Rc::new(ResizeNotifier::new());
        let layout = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&layout);
        notifier.subscribe(move |change| sink.borrow_mut().push(change));

        let store = Rc::new(store);
        let settings: Rc<dyn SettingsStore> = store.clone();
        let model = ShellModel::new(
            config,
            Rc::clone(&dispatcher),
            settings,
            notifier,
            Box::new(DefaultPlatform::new(CommandModifier::Ctrl)),
        );

        Self {
            model,
            dispatcher,
            store,
            actions,
            layout,
        }
    }

    pub fn send(&mut self, msg: Msg) -> Option<Cmd> {
        update(&mut self.model, msg)
    }

    pub fn mount(&mut self) -> Option<Cmd> {
        self.send(Msg::Lifecycle(LifecycleMsg::Mount))
    }

    pub fn set_props(&mut self, props: ShellProps) {
        self.send(Msg::SetProps(Box::new(props)));
    }

    pub fn show_page(&mut self, page_type: PageType) {
        let props = ShellProps {
            page_type,
            ..self.model.props.clone()
        };
        self.set_props(props);
    }

    /// Actions delivered so far, without flushing the queue
    pub fn delivered(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    /// Deliver queued actions, then return everything delivered
    pub fn flushed(&self) -> Vec<Action> {
        self.dispatcher.flush();
        self.delivered()
    }

    pub fn clear(&self) {
        self.dispatcher.flush();
        self.actions.borrow_mut().clear();
        self.layout.borrow_mut().clear();
    }

    pub fn persisted_size(&self) -> Option<String> {
        self.store.get(LHS_SIZE_KEY)
    }

    /// Drag the left panel handle from `from` to `to` along x
    pub fn drag_handle(&mut self, from: f32, to: f32) {
        self.send(Msg::Pointer(PointerMsg::Down {
            position: Point::new(from, 100.0),
            target: HitTarget::ResizeHandle(0),
        }));
        self.send(Msg::Pointer(PointerMsg::Move {
            position: Point::new((from + to) / 2.0, 100.0),
        }));
        self.send(Msg::Pointer(PointerMsg::Up {
            position: Point::new(to, 100.0),
        }));
    }

    pub fn left_size(&self) -> f32 {
        self.model.left_panel_size().unwrap_or(f32::NAN)
    }
}

/// Key-down with nothing focused, seen by the document listener
pub fn body_key(key: KeyCode, mods: Modifiers) -> Msg {
    Msg::Key(KeyInput {
        event: KeyEvent::new(key, mods, FocusTarget::Body),
        source: KeySource::Document,
    })
}

/// Key-down on a focused element, bubbled to the shell
pub fn focused_key(key: KeyCode, mods: Modifiers, kind: ElementKind) -> Msg {
    Msg::Key(KeyInput {
        event: KeyEvent::new(key, mods, FocusTarget::Element(kind)),
        source: KeySource::Shell {
            propagation_stopped: false,
        },
    })
}

/// Room view stand-in that records the scroll keys it receives
pub struct RecordingScroll {
    pub keys: Rc<RefCell<Vec<ScrollKey>>>,
    pub can_reset: bool,
}

impl RecordingScroll {
    pub fn new() -> (Box<dyn ScrollTarget>, Rc<RefCell<Vec<ScrollKey>>>) {
        let keys = Rc::new(RefCell::new(Vec::new()));
        let view: Box<dyn ScrollTarget> = Box::new(Self {
            keys: Rc::clone(&keys),
            can_reset: true,
        });
        (view, keys)
    }
}

impl ScrollTarget for RecordingScroll {
    fn handle_scroll_key(&mut self, key: ScrollKey) {
        self.keys.borrow_mut().push(key);
    }

    fn can_reset_timeline(&self) -> bool {
        self.can_reset
    }
}
