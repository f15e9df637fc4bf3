//! Async store task.
//!
//! The reducers assume serialized dispatch (one action fully applied
//! before the next). This module makes that explicit: the store moves
//! into a tokio task draining an action queue, in the same shape as a
//! UI-to-backend command pump. The auto-dismiss layer feeds removals
//! back through the same inlet.

use std::sync::Arc;

use shared::action::Action;
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::info;

use crate::{
    autodismiss::AutoDismissTimer, error::DispatchError, state::OverlayState, store::OverlayStore,
};

const ACTION_QUEUE_DEPTH: usize = 256;

/// Cloneable handle to a spawned store task.
#[derive(Clone)]
pub struct StoreHandle {
    actions: mpsc::Sender<Action>,
    state: watch::Receiver<Arc<OverlayState>>,
}

impl StoreHandle {
    /// Queues one action for the store task.
    pub async fn dispatch(&self, action: Action) -> Result<(), DispatchError> {
        self.actions
            .send(action)
            .await
            .map_err(|_| DispatchError::Closed)
    }

    /// Latest published state snapshot.
    pub fn state(&self) -> Arc<OverlayState> {
        self.state.borrow().clone()
    }

    /// Receiver observing every published state. No-op dispatches are
    /// not published.
    pub fn subscribe(&self) -> watch::Receiver<Arc<OverlayState>> {
        self.state.clone()
    }
}

/// Moves the store into a task that applies queued actions one at a
/// time. The task ends when every handle (and pending auto-dismiss
/// timer) is gone.
pub fn spawn(mut store: OverlayStore) -> (StoreHandle, JoinHandle<()>) {
    let (actions, mut inbox) = mpsc::channel(ACTION_QUEUE_DEPTH);
    let state = store.subscribe();
    let dismiss = AutoDismissTimer::new(&actions);

    let task = tokio::spawn(async move {
        while let Some(action) = inbox.recv().await {
            dismiss.observe(&action);
            store.dispatch(action);
        }
        info!("store task stopped");
    });

    (StoreHandle { actions, state }, task)
}
