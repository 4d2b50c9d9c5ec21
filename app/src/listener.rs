//! Scoped ownership of window-wide event listeners.
//!
//! Components that need a `window` listener only for part of their life (the
//! header while its mobile menu is open, the modal while it is shown) park the
//! listener handle in a [`ScopedListener`]. The slot attaches at most one
//! listener, removes it when told to, and removes it again on drop, so a
//! listener can never outlive the component that registered it.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

/// A registered listener that can be detached.
pub trait ListenerHandle: 'static {
    fn remove(self);
}

impl ListenerHandle for WindowListenerHandle {
    fn remove(self) {
        WindowListenerHandle::remove(self);
    }
}

/// Holds zero or one listener handle.
#[derive(Debug)]
pub struct ScopedListener<H: ListenerHandle> {
    handle: Option<H>,
}

impl<H: ListenerHandle> ScopedListener<H> {
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Attaches a listener built by `attach` unless one is already held.
    ///
    /// Returns `true` when a new listener was registered.
    pub fn acquire(&mut self, attach: impl FnOnce() -> H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(attach());
        true
    }

    /// Detaches the held listener, if any. Safe to call repeatedly.
    ///
    /// Returns `true` when a listener was actually removed.
    pub fn release(&mut self) -> bool {
        self.handle.take().is_some_and(|handle| {
            handle.remove();
            true
        })
    }

    /// Acquires while `active` is true and releases otherwise.
    pub fn sync(&mut self, active: bool, attach: impl FnOnce() -> H) {
        if active {
            if self.acquire(attach) {
                log::debug!("window listener attached");
            }
        } else if self.release() {
            log::debug!("window listener released");
        }
    }
}

impl<H: ListenerHandle> Default for ScopedListener<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ListenerHandle> Drop for ScopedListener<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Creates a listener slot owned by the current reactive owner.
///
/// The slot is released when the owner is cleaned up, whatever state the
/// component is in at that point.
pub fn scoped_listener<H: ListenerHandle>() -> StoredValue<ScopedListener<H>, LocalStorage> {
    let slot = StoredValue::new_local(ScopedListener::new());
    on_cleanup(move || {
        slot.try_update_value(|listener| {
            listener.release();
        });
    });
    slot
}

#[cfg(test)]
pub(crate) mod fake {
    //! An in-memory stand-in for `window` listeners.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::ListenerHandle;

    type Handler<E> = Rc<dyn Fn(E)>;

    pub struct FakeWindow<E> {
        listeners: Rc<RefCell<Vec<(usize, Handler<E>)>>>,
        next_id: RefCell<usize>,
    }

    impl<E: Clone + 'static> FakeWindow<E> {
        pub fn new() -> Self {
            Self {
                listeners: Rc::new(RefCell::new(Vec::new())),
                next_id: RefCell::new(0),
            }
        }

        pub fn listen(&self, handler: impl Fn(E) + 'static) -> FakeHandle<E> {
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            self.listeners.borrow_mut().push((id, Rc::new(handler)));
            FakeHandle {
                id,
                listeners: Rc::clone(&self.listeners),
            }
        }

        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        /// Delivers `event` to every listener registered at dispatch time.
        pub fn dispatch(&self, event: E) {
            let handlers: Vec<_> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, handler)| Rc::clone(handler))
                .collect();
            for handler in handlers {
                handler(event.clone());
            }
        }
    }

    pub struct FakeHandle<E> {
        id: usize,
        listeners: Rc<RefCell<Vec<(usize, Handler<E>)>>>,
    }

    impl<E: 'static> ListenerHandle for FakeHandle<E> {
        fn remove(self) {
            self.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
