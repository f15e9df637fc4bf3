use thiserror::Error;

/// The reducers themselves are total and never fail; the only error
/// surface is dispatching into a store task that has shut down.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("store task is no longer running")]
    Closed,
}
