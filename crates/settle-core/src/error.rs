use thiserror::Error;

/// Failures reported by the weak and synchronized setter variants.
///
/// The plain [`SetState`](crate::SetState) defines no error kinds of its
/// own: a failing updater propagates unmodified (panic, or the caller's
/// error through `try_set`), and host-access faults surface as the native
/// `RefCell` borrow panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// The host behind a weak setter has been dropped. The updater was not
    /// invoked and nothing was written.
    #[error("state host has been dropped")]
    HostDropped,
    /// Another writer holds the state lock (non-blocking set only).
    #[error("state is locked by another writer")]
    Contended,
}
