//! Channel model and the per-channel reducer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::{
    action::Action,
    domain::{Card, ChannelId, DisplayState},
};

use crate::queue;

/// An independent named queue of cards with its own priority, display
/// state, and active-card pointer.
///
/// Invariant: `active_card_index < max(1, cards.len())`. When `cards`
/// is empty the index is conventionally 0 and means "no active card".
/// `RemoveCard` deliberately does not renormalize the index, so it can
/// go stale after a removal at or before it; [`Channel::active_card`]
/// reads through `get` so a stale index yields `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: ChannelId,
    /// Higher values win active-channel arbitration on card arrival.
    pub priority: i32,
    pub cards: Vec<Arc<Card>>,
    pub active_card_index: usize,
    pub state: DisplayState,
}

impl Channel {
    pub fn new(channel_id: ChannelId, priority: i32) -> Self {
        Self {
            channel_id,
            priority,
            cards: Vec::new(),
            active_card_index: 0,
            state: DisplayState::Hidden,
        }
    }

    /// Card at `active_card_index`, or `None` when the queue is empty
    /// or the index has gone stale past the end.
    pub fn active_card(&self) -> Option<&Arc<Card>> {
        if self.cards.is_empty() {
            return None;
        }
        self.cards.get(self.active_card_index)
    }
}

/// Applies one action to one channel, producing the next channel value.
///
/// Pure and total. An action whose payload targets a different channel
/// is returned unchanged (guard against mis-routed actions); so is any
/// action outside this reducer's scope. A no-op hands back the input
/// `Arc`, which the aggregate reducer detects via `Arc::ptr_eq`.
pub fn reduce_channel(channel: &Arc<Channel>, action: &Action) -> Arc<Channel> {
    if action.channel_id() != &channel.channel_id {
        return Arc::clone(channel);
    }

    match action {
        Action::AddCard { card, .. } => Arc::new(Channel {
            cards: queue::append(&channel.cards, card.clone()),
            ..(**channel).clone()
        }),
        // The active index is intentionally left alone; it may point
        // past the new end when the removed card sat at or before it.
        Action::RemoveCard { card_id, .. } => match queue::remove_by_id(&channel.cards, card_id) {
            Some(cards) => Arc::new(Channel {
                cards,
                ..(**channel).clone()
            }),
            None => Arc::clone(channel),
        },
        Action::SwipeNextCard { .. } => {
            if channel.cards.is_empty() {
                return Arc::clone(channel);
            }
            // Clamps at the last card, never wraps.
            let last = channel.cards.len() - 1;
            Arc::new(Channel {
                active_card_index: (channel.active_card_index + 1).min(last),
                ..(**channel).clone()
            })
        }
        Action::SwipePrevCard { .. } => {
            if channel.cards.is_empty() {
                return Arc::clone(channel);
            }
            Arc::new(Channel {
                active_card_index: channel.active_card_index.saturating_sub(1),
                ..(**channel).clone()
            })
        }
        Action::UpdateChannelState { state, .. } => Arc::new(Channel {
            state: *state,
            ..(**channel).clone()
        }),
        Action::ClearChannelCards { .. } => Arc::new(Channel {
            cards: queue::clear(),
            active_card_index: 0,
            ..(**channel).clone()
        }),
        // Lifecycle and activation actions never mutate an existing
        // channel value.
        Action::RegisterChannel { .. }
        | Action::UnregisterChannel { .. }
        | Action::SetActiveChannel { .. } => Arc::clone(channel),
    }
}
