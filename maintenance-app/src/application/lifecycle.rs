use super::ViewHost;
use crate::domain::{PointerOffset, PointerPosition, ViewState};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Delay between mounting and revealing the entry animations.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);
/// How long the top icon spins after a click.
pub const SPIN_DURATION: Duration = Duration::from_millis(1000);

type Observer = Box<dyn Fn(ViewState)>;

/// Owns the state of a maintenance view together with every timer and
/// subscription that can touch it.
///
/// Callbacks handed to the host only keep a weak reference, so dropping the
/// last `PageLifecycle` clone releases everything.
pub struct PageLifecycle<H: ViewHost> {
    inner: Rc<Inner<H>>,
}

impl<H: ViewHost> Clone for PageLifecycle<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct Inner<H: ViewHost> {
    host: H,
    state: Cell<ViewState>,
    reveal_timer: RefCell<Option<H::Timer>>,
    spin_timer: RefCell<Option<H::Timer>>,
    pointer_listener: RefCell<Option<H::Listener>>,
    observer: Observer,
}

impl<H: ViewHost> Inner<H> {
    fn transition(&self, apply: impl FnOnce(&mut ViewState) -> bool) -> bool {
        let mut state = self.state.get();
        let changed = apply(&mut state);
        if changed {
            self.state.set(state);
        }
        changed
    }

    fn update(&self, apply: impl FnOnce(&mut ViewState) -> bool) -> bool {
        let changed = self.transition(apply);
        if changed {
            (self.observer)(self.state.get());
        }
        changed
    }

    fn track_pointer(&self, position: PointerPosition) {
        let Some(rect) = self.host.container_rect() else {
            return;
        };
        let offset = PointerOffset::from_pointer(position, rect);
        self.update(|state| state.track_pointer(offset));
    }
}

impl<H: ViewHost> PageLifecycle<H> {
    pub fn new(host: H, observer: impl Fn(ViewState) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                state: Cell::new(ViewState::default()),
                reveal_timer: RefCell::new(None),
                spin_timer: RefCell::new(None),
                pointer_listener: RefCell::new(None),
                observer: Box::new(observer),
            }),
        }
    }

    pub fn state(&self) -> ViewState {
        self.inner.state.get()
    }

    /// Schedules the reveal and starts following the pointer.
    pub fn mount(&self) {
        if !self.inner.update(ViewState::mount) {
            return;
        }
        tracing::debug!("maintenance view mounted");

        let weak = Rc::downgrade(&self.inner);
        let reveal = self.inner.host.schedule(
            REVEAL_DELAY,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    if inner.update(ViewState::reveal) {
                        tracing::debug!("entry animations revealed");
                    }
                }
            }),
        );
        self.inner.reveal_timer.replace(Some(reveal));

        let weak: Weak<Inner<H>> = Rc::downgrade(&self.inner);
        let listener = self.inner.host.listen_pointer(Box::new(move |position| {
            if let Some(inner) = weak.upgrade() {
                inner.track_pointer(position);
            }
        }));
        self.inner.pointer_listener.replace(Some(listener));
    }

    /// Spins the top icon. A click during a spin restarts the window.
    pub fn spin(&self) {
        if !self.state().mounted {
            return;
        }
        self.inner.update(ViewState::start_spin);
        tracing::debug!("top icon spinning");

        let weak = Rc::downgrade(&self.inner);
        let reset = self.inner.host.schedule(
            SPIN_DURATION,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.update(ViewState::finish_spin);
                }
            }),
        );
        // dropping the previous handle cancels its pending reset
        let previous = self.inner.spin_timer.replace(Some(reset));
        drop(previous);
    }

    /// Cancels pending timers and removes the pointer listener. Observers are
    /// not notified since the view is going away.
    pub fn unmount(&self) {
        let reveal = self.inner.reveal_timer.take();
        let spin = self.inner.spin_timer.take();
        let listener = self.inner.pointer_listener.take();
        drop((reveal, spin, listener));

        if self.inner.transition(ViewState::unmount) {
            tracing::debug!("maintenance view unmounted");
        }
    }
}
