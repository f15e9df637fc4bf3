//! State-management core for a multi-channel overlay/notification
//! widget.
//!
//! Independent channels each hold an ordered queue of cards, an
//! active-card pointer, and a display state. The aggregate reducer in
//! [`state`] owns channel lifecycle and active-channel arbitration and
//! delegates channel-scoped actions to the channel reducer in
//! [`channel`]. All reducers are pure and total: illegal or unmatched
//! input is a no-op, observable only as referential identity
//! (`Arc::ptr_eq`) between the input and output state.
//!
//! [`store::OverlayStore`] is the dispatch facade consumers use;
//! [`runtime::spawn`] moves it into a task that serializes dispatch
//! and layers the auto-dismiss timers on top.

pub mod autodismiss;
pub mod channel;
pub mod error;
pub mod queue;
pub mod runtime;
pub mod state;
pub mod store;

pub use autodismiss::{AutoDismissTimer, DEFAULT_AUTO_DISMISS_MS};
pub use channel::{reduce_channel, Channel};
pub use error::DispatchError;
pub use runtime::StoreHandle;
pub use state::{reduce, OverlayState};
pub use store::OverlayStore;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
