//! Dispatch facade: typed action creators, read queries, and change
//! notification over the aggregate reducer.

use std::sync::Arc;

use shared::{
    action::Action,
    domain::{Card, CardId, ChannelId, DisplayState},
};
use tokio::sync::watch;
use tracing::debug;

use crate::{
    channel::Channel,
    state::{reduce, OverlayState},
};

/// Owns the authoritative [`OverlayState`]. Constructed explicitly by
/// the composition root and passed around; there is no ambient
/// singleton. Consumers hold `Arc` snapshots and watch receivers, never
/// mutable access.
pub struct OverlayStore {
    state: Arc<OverlayState>,
    watch_tx: watch::Sender<Arc<OverlayState>>,
}

impl OverlayStore {
    pub fn new() -> Self {
        let state = Arc::new(OverlayState::default());
        let (watch_tx, _) = watch::channel(Arc::clone(&state));
        Self { state, watch_tx }
    }

    /// Applies one action and returns the resulting state. A no-op
    /// returns the current state `Arc` unchanged and is not published
    /// to watchers.
    pub fn dispatch(&mut self, action: Action) -> Arc<OverlayState> {
        let next = reduce(&self.state, &action);
        if Arc::ptr_eq(&next, &self.state) {
            debug!(?action, "dispatch: no-op");
        } else {
            debug!(
                ?action,
                channels = next.channels.len(),
                active = next.active_channel_id.as_ref().map(|id| id.as_str()),
                "dispatch: state replaced"
            );
            self.state = Arc::clone(&next);
            self.watch_tx.send_replace(Arc::clone(&next));
        }
        next
    }

    // Typed action creators, one per action variant.

    pub fn register_channel(
        &mut self,
        channel_id: impl Into<ChannelId>,
        priority: i32,
    ) -> Arc<OverlayState> {
        self.dispatch(Action::RegisterChannel {
            channel_id: channel_id.into(),
            priority,
        })
    }

    pub fn unregister_channel(&mut self, channel_id: impl Into<ChannelId>) -> Arc<OverlayState> {
        self.dispatch(Action::UnregisterChannel {
            channel_id: channel_id.into(),
        })
    }

    pub fn set_active_channel(&mut self, channel_id: impl Into<ChannelId>) -> Arc<OverlayState> {
        self.dispatch(Action::SetActiveChannel {
            channel_id: channel_id.into(),
        })
    }

    pub fn update_channel_state(
        &mut self,
        channel_id: impl Into<ChannelId>,
        state: DisplayState,
    ) -> Arc<OverlayState> {
        self.dispatch(Action::UpdateChannelState {
            channel_id: channel_id.into(),
            state,
        })
    }

    pub fn add_card(&mut self, channel_id: impl Into<ChannelId>, card: Card) -> Arc<OverlayState> {
        self.dispatch(Action::AddCard {
            channel_id: channel_id.into(),
            card,
        })
    }

    pub fn remove_card(
        &mut self,
        channel_id: impl Into<ChannelId>,
        card_id: impl Into<CardId>,
    ) -> Arc<OverlayState> {
        self.dispatch(Action::RemoveCard {
            channel_id: channel_id.into(),
            card_id: card_id.into(),
        })
    }

    pub fn swipe_next_card(&mut self, channel_id: impl Into<ChannelId>) -> Arc<OverlayState> {
        self.dispatch(Action::SwipeNextCard {
            channel_id: channel_id.into(),
        })
    }

    pub fn swipe_prev_card(&mut self, channel_id: impl Into<ChannelId>) -> Arc<OverlayState> {
        self.dispatch(Action::SwipePrevCard {
            channel_id: channel_id.into(),
        })
    }

    pub fn clear_channel_cards(&mut self, channel_id: impl Into<ChannelId>) -> Arc<OverlayState> {
        self.dispatch(Action::ClearChannelCards {
            channel_id: channel_id.into(),
        })
    }

    // Read queries.

    pub fn state(&self) -> Arc<OverlayState> {
        Arc::clone(&self.state)
    }

    /// Receiver that observes every published (non-no-op) state.
    pub fn subscribe(&self) -> watch::Receiver<Arc<OverlayState>> {
        self.watch_tx.subscribe()
    }

    pub fn channel(&self, channel_id: &ChannelId) -> Option<Arc<Channel>> {
        self.state.channel(channel_id).cloned()
    }

    pub fn active_channel(&self) -> Option<Arc<Channel>> {
        self.state.active_channel().cloned()
    }

    /// `None` when the channel does not exist, has no cards, or its
    /// active index has gone stale past the end of the queue.
    pub fn active_card(&self, channel_id: &ChannelId) -> Option<Arc<Card>> {
        self.state
            .channel(channel_id)
            .and_then(|channel| channel.active_card().cloned())
    }
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self::new()
    }
}
