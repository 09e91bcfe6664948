use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::error::StateError;
use crate::host::StateHost;
use crate::merge::Merge;

/// Thread-safe sibling of [`SetState`](crate::SetState).
///
/// One mutex guards the state and stays held across the whole
/// read-modify-write sequence, so concurrent setters never interleave.
/// [`SetState`](crate::SetState) leaves this synchronization to its
/// caller. Updaters run on the calling thread with the lock held; keep
/// them short.
pub struct SyncSetState<H: StateHost> {
    host: Arc<Mutex<H>>,
}

impl<H: StateHost> Clone for SyncSetState<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
        }
    }
}

impl<H: StateHost> SyncSetState<H> {
    pub fn new(host: Arc<Mutex<H>>) -> Self {
        Self { host }
    }

    /// Full replace, atomic against other setters on the same host.
    ///
    /// As with the single-threaded setter, a panicking updater leaves the
    /// state untouched (the lock is released on unwind before anything is
    /// written).
    pub fn set(&self, updater: impl FnOnce(&H::State) -> H::State) {
        let mut host = self.host.lock();
        let next = updater(host.state());
        host.replace_state(next);
    }

    /// Like [`set`](Self::set) for fallible updaters: the updater's error
    /// comes back unmodified and the state stays untouched on `Err`.
    pub fn try_set<E>(
        &self,
        updater: impl FnOnce(&H::State) -> Result<H::State, E>,
    ) -> Result<(), E> {
        let mut host = self.host.lock();
        let next = updater(host.state())?;
        host.replace_state(next);
        Ok(())
    }

    /// Like [`set`](Self::set) but fails with [`StateError::Contended`]
    /// instead of blocking while another writer holds the lock.
    pub fn set_nonblocking(
        &self,
        updater: impl FnOnce(&H::State) -> H::State,
    ) -> Result<(), StateError> {
        let Some(mut host) = self.host.try_lock() else {
            return Err(StateError::Contended);
        };
        let next = updater(host.state());
        host.replace_state(next);
        Ok(())
    }

    /// Shallow merge under the lock; see
    /// [`SetState::merge`](crate::SetState::merge).
    pub fn merge(&self, updater: impl FnOnce(&H::State) -> <H::State as Merge>::Patch)
    where
        H::State: Merge,
    {
        let mut host = self.host.lock();
        let patch = updater(host.state());
        host.state_mut().merge_patch(patch);
    }

    /// Direct assignment, the degenerate updater.
    pub fn replace(&self, next: H::State) {
        self.host.lock().replace_state(next);
    }

    /// Mutates the state in place under the lock.
    pub fn update(&self, f: impl FnOnce(&mut H::State)) {
        let mut host = self.host.lock();
        f(host.state_mut());
    }

    /// A setter that does not keep the host alive.
    pub fn downgrade(&self) -> WeakSyncSetState<H> {
        WeakSyncSetState {
            host: Arc::downgrade(&self.host),
        }
    }
}

/// Binds a thread-safe setter to `host` without taking over the caller's
/// handle.
pub fn create_sync_set_state<H: StateHost>(host: &Arc<Mutex<H>>) -> SyncSetState<H> {
    SyncSetState::new(Arc::clone(host))
}

/// Non-owning sibling of [`SyncSetState`].
pub struct WeakSyncSetState<H: StateHost> {
    host: Weak<Mutex<H>>,
}

impl<H: StateHost> Clone for WeakSyncSetState<H> {
    fn clone(&self) -> Self {
        Self {
            host: Weak::clone(&self.host),
        }
    }
}

impl<H: StateHost> WeakSyncSetState<H> {
    pub fn upgrade(&self) -> Option<SyncSetState<H>> {
        self.host.upgrade().map(SyncSetState::new)
    }

    /// Full replace, or [`StateError::HostDropped`] once the host is gone.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Stateful;

    #[test]
    fn test_nonblocking_contended() {
        let host = Stateful::shared_sync(0);
        let set_count = create_sync_set_state(&host);

        let guard = host.lock();
        assert_eq!(
            set_count.set_nonblocking(|n| n + 1),
            Err(StateError::Contended)
        );
        drop(guard);

        assert_eq!(set_count.set_nonblocking(|n| n + 1), Ok(()));
        assert_eq!(*host.lock().state(), 1);
    }

    #[test]
    fn test_concurrent_sets() {
        let host = Stateful::shared_sync(0u32);
        let set_count = create_sync_set_state(&host);

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let set_count = set_count.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        set_count.set(|n| n + 1);
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        assert_eq!(*host.lock().state(), 1000);
    }

    #[test]
    fn test_weak_sync_setter() {
        let host = Stateful::shared_sync(3);
        let set_count = create_sync_set_state(&host);
        let weak = set_count.downgrade();

        assert_eq!(weak.set(|n| n + 1), Ok(()));
        assert_eq!(*host.lock().state(), 4);

        drop(set_count);
        drop(host);
        assert!(weak.upgrade().is_none());
        assert_eq!(weak.set(|n| n + 1), Err(StateError::HostDropped));
    }
}
