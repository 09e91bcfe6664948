pub use crate::error::StateError;
pub use crate::host::{StateHost, Stateful};
pub use crate::merge::{Merge, overlay};
pub use crate::setter::{SetState, WeakSetState, create_set_state};
pub use crate::sync::{SyncSetState, WeakSyncSetState, create_sync_set_state};

pub use parking_lot::Mutex;
