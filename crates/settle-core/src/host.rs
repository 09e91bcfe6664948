use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::Mutex;

/// Capability a host must satisfy before a setter can be bound to it:
/// one owned `state` value the setter may read and replace.
///
/// Where a dynamic runtime would accept any object with a field named
/// `state`, this trait makes that shape a compile-time contract. Hosts
/// that do keep their state in a plain field can generate the impl with
/// [`impl_state_host!`](crate::impl_state_host).
pub trait StateHost {
    type State;

    fn state(&self) -> &Self::State;
    fn state_mut(&mut self) -> &mut Self::State;

    /// Swaps in `next` and returns the previous state.
    fn replace_state(&mut self, next: Self::State) -> Self::State {
        std::mem::replace(self.state_mut(), next)
    }
}

/// Minimal host: nothing but the `state` field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stateful<S> {
    pub state: S,
}

impl<S> Stateful<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// The shared handle [`create_set_state`](crate::create_set_state)
    /// binds to.
    pub fn shared(state: S) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(state)))
    }

    /// Thread-safe sibling of [`shared`](Self::shared), for
    /// [`create_sync_set_state`](crate::create_sync_set_state).
    pub fn shared_sync(state: S) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new(state)))
    }
}

impl<S> StateHost for Stateful<S> {
    type State = S;

    fn state(&self) -> &S {
        &self.state
    }
    fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}

/// Implements [`StateHost`] for a type keeping its state in a named field
/// (`state` unless a third argument says otherwise).
///
/// ```
/// use settle_core::{StateHost, impl_state_host};
///
/// struct Panel {
///     state: Vec<u8>,
///     title: String,
/// }
/// impl_state_host!(Panel, Vec<u8>);
///
/// let panel = Panel { state: vec![1], title: "inspector".into() };
/// assert_eq!(panel.state(), &[1]);
/// assert_eq!(panel.title, "inspector");
/// ```
#[macro_export]
macro_rules! impl_state_host {
    ($host:ty, $state:ty) => {
        $crate::impl_state_host!($host, $state, state);
    };
    ($host:ty, $state:ty, $field:ident) => {
        impl $crate::host::StateHost for $host {
            type State = $state;

            fn state(&self) -> &$state {
                &self.$field
            }
            fn state_mut(&mut self) -> &mut $state {
                &mut self.$field
            }
        }
    };
}
