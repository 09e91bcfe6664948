use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::StateError;
use crate::host::StateHost;
use crate::merge::Merge;

/// Type-safe setter bound to one host's `state` field.
///
/// Cloning shares the host: every clone reads the then-current state at
/// call time, never a snapshot taken when the setter was bound. The
/// setter is write-only; reads go through the host itself.
pub struct SetState<H: StateHost> {
    host: Rc<RefCell<H>>,
}

impl<H: StateHost> Clone for SetState<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
        }
    }
}

impl<H: StateHost> SetState<H> {
    /// Binds a setter to `host`. The setter holds one shared reference to
    /// the host for as long as it (or any clone) is alive.
    pub fn new(host: Rc<RefCell<H>>) -> Self {
        Self { host }
    }

    /// Full replace: reads the current state, runs `updater` on it, and
    /// stores the result as the next state.
    ///
    /// The write happens only after `updater` returns, so a panicking
    /// updater leaves the state untouched. Calling back into the same host
    /// from inside `updater` panics with the usual `RefCell` borrow error.
    pub fn set(&self, updater: impl FnOnce(&H::State) -> H::State) {
        let next = {
            let host = self.host.borrow();
            updater(host.state())
        };
        self.host.borrow_mut().replace_state(next);
    }

    /// Like [`set`](Self::set) for fallible updaters: the updater's error
    /// comes back unmodified and the state stays untouched on `Err`.
    pub fn try_set<E>(
        &self,
        updater: impl FnOnce(&H::State) -> Result<H::State, E>,
    ) -> Result<(), E> {
        let next = {
            let host = self.host.borrow();
            updater(host.state())?
        };
        self.host.borrow_mut().replace_state(next);
        Ok(())
    }

    /// Shallow merge: `updater` returns a patch, which is overlaid onto
    /// the current state. Keys absent from the patch keep their value.
    pub fn merge(&self, updater: impl FnOnce(&H::State) -> <H::State as Merge>::Patch)
    where
        H::State: Merge,
    {
        let patch = {
            let host = self.host.borrow();
            updater(host.state())
        };
        self.host.borrow_mut().state_mut().merge_patch(patch);
    }

    /// Direct assignment, the degenerate updater.
    pub fn replace(&self, next: H::State) {
        self.host.borrow_mut().replace_state(next);
    }

    /// Mutates the state in place under the exclusive borrow. Unlike
    /// [`set`](Self::set), a panic inside `f` can leave partial edits
    /// behind.
    pub fn update(&self, f: impl FnOnce(&mut H::State)) {
        let mut host = self.host.borrow_mut();
        f(host.state_mut());
    }

    /// A setter that does not keep the host alive.
    pub fn downgrade(&self) -> WeakSetState<H> {
        WeakSetState {
            host: Rc::downgrade(&self.host),
        }
    }
}

/// Binds a setter to `host` without taking over the caller's handle.
pub fn create_set_state<H: StateHost>(host: &Rc<RefCell<H>>) -> SetState<H> {
    SetState::new(Rc::clone(host))
}

/// Non-owning sibling of [`SetState`], for callbacks that may outlive the
/// host they update.
pub struct WeakSetState<H: StateHost> {
    host: Weak<RefCell<H>>,
}

impl<H: StateHost> Clone for WeakSetState<H> {
    fn clone(&self) -> Self {
        Self {
            host: Weak::clone(&self.host),
        }
    }
}

impl<H: StateHost> WeakSetState<H> {
    pub fn upgrade(&self) -> Option<SetState<H>> {
        self.host.upgrade().map(SetState::new)
    }

    /// Full replace, or [`StateError::HostDropped`] once the host is gone.
    /// The updater is not invoked in the dropped case.
    pub fn set(&self, updater: impl FnOnce(&H::State) -> H::State) -> Result<(), StateError> {
        match self.upgrade() {
            Some(setter) => {
                setter.set(updater);
                Ok(())
            }
            None => {
                log::debug!("set_state: host dropped; update discarded");
                Err(StateError::HostDropped)
            }
        }
    }
}
