//! # Hosts, Setters, and Patches
//!
//! Settle binds type-safe setter closures to host-owned state. A *host* is
//! any object with a single mutable `state` value; a *setter* is the bound
//! handle that replaces that value with the output of an updater function.
//! There are three main pieces:
//!
//! - [`StateHost`] — the compile-time capability a host must satisfy.
//! - [`SetState`] — the bound setter, produced by [`create_set_state`].
//! - [`Merge`] — the shallow-merge capability behind the patch variant.
//!
//! ## Binding a setter
//!
//! ```rust
//! use settle_core::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Counter {
//!     counter: i32,
//! }
//!
//! let host = Stateful::shared(Counter { counter: 0 });
//! let set_counter = create_set_state(&host);
//!
//! set_counter.set(|prev| Counter { counter: prev.counter + 1 });
//! assert_eq!(host.borrow().state().counter, 1);
//!
//! // The setter re-reads the then-current state on every call.
//! set_counter.set(|prev| Counter { counter: prev.counter + 1 });
//! assert_eq!(host.borrow().state().counter, 2);
//! ```
//!
//! The setter is write-only: reads go through the host. An updater that
//! panics (or fails through [`SetState::try_set`]) leaves the state
//! exactly as it was.
//!
//! ## Replace vs merge
//!
//! Two published flavors of this helper disagree on what happens to the
//! updater's output, so both ship as distinct operations rather than one
//! guessed behavior: [`SetState::set`] stores the output as the whole next
//! state, [`SetState::merge`] shallowly overlays a returned patch onto the
//! current one.
//!
//! ```rust
//! use settle_core::*;
//! use std::collections::HashMap;
//!
//! let host = Stateful::shared(HashMap::from([("a", 1), ("b", 2)]));
//! let settings = create_set_state(&host);
//!
//! settings.merge(|_prev| HashMap::from([("b", 99)]));
//! assert_eq!(host.borrow().state()["a"], 1); // untouched keys survive
//! assert_eq!(host.borrow().state()["b"], 99);
//! ```
//!
//! Maps merge out of the box; struct states implement [`Merge`] with an
//! `Option`-per-field patch type and [`overlay`].
//!
//! ## Custom hosts
//!
//! Any type can be a host. For the common case of a `state` field,
//! [`impl_state_host!`] writes the impl:
//!
//! ```rust
//! use settle_core::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Editor {
//!     state: String,
//! }
//! impl_state_host!(Editor, String);
//!
//! let host = Rc::new(RefCell::new(Editor { state: "draft".into() }));
//! let set_text = create_set_state(&host);
//!
//! set_text.update(|text| text.push('!'));
//! assert_eq!(host.borrow().state(), "draft!");
//! ```
//!
//! ## Lifetimes and threads
//!
//! [`SetState`] holds one shared reference to the host, so the host stays
//! alive as long as any setter clone does; [`WeakSetState`] is the
//! non-owning variant for callbacks that must not extend the host's life.
//!
//! Everything above is single-threaded: the setter performs a plain
//! read-modify-write with no synchronization, matching the event-loop
//! runtimes it is meant for. For hosts shared across threads,
//! [`SyncSetState`] guards the state with a mutex held across the whole
//! sequence:
//!
//! ```rust
//! use settle_core::*;
//!
//! let host = Stateful::shared_sync(0u32);
//! let set_count = create_sync_set_state(&host);
//!
//! let workers: Vec<_> = (0..4)
//!     .map(|_| {
//!         let set_count = set_count.clone();
//!         std::thread::spawn(move || {
//!             for _ in 0..100 {
//!                 set_count.set(|n| n + 1);
//!             }
//!         })
//!     })
//!     .collect();
//! for w in workers {
//!     w.join().unwrap();
//! }
//!
//! assert_eq!(*host.lock().state(), 400);
//! ```

pub mod error;
pub mod host;
pub mod merge;
pub mod prelude;
pub mod setter;
pub mod sync;

pub use error::*;
pub use host::*;
pub use merge::*;
pub use prelude::*;
pub use setter::*;
pub use sync::*;
