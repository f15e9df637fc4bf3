//! Aggregate state and the single state-transition function.

use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};
use shared::{action::Action, domain::ChannelId};

use crate::channel::{reduce_channel, Channel};

/// The whole multi-channel state.
///
/// Invariant: when `active_channel_id` is set it references an existing
/// entry in `channels`. [`reduce`] is the sole writer and clears the
/// pointer when the active channel is unregistered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayState {
    pub channels: HashMap<ChannelId, Arc<Channel>>,
    pub active_channel_id: Option<ChannelId>,
}

impl OverlayState {
    pub fn channel(&self, channel_id: &ChannelId) -> Option<&Arc<Channel>> {
        self.channels.get(channel_id)
    }

    /// Always resolvable when `active_channel_id` is set, per the
    /// dangling-reference invariant.
    pub fn active_channel(&self) -> Option<&Arc<Channel>> {
        self.active_channel_id
            .as_ref()
            .and_then(|id| self.channels.get(id))
    }
}

/// Applies one action to the aggregate, producing the next state.
///
/// Pure and total: every illegal or unmatched input (duplicate
/// registration, unknown channel id, empty-queue swipe) returns the
/// input `Arc` unchanged. The previous state value is never mutated.
pub fn reduce(state: &Arc<OverlayState>, action: &Action) -> Arc<OverlayState> {
    match action {
        Action::RegisterChannel {
            channel_id,
            priority,
        } => {
            // Registration is idempotent, not an upsert.
            if state.channels.contains_key(channel_id) {
                return Arc::clone(state);
            }
            let mut channels = state.channels.clone();
            channels.insert(
                channel_id.clone(),
                Arc::new(Channel::new(channel_id.clone(), *priority)),
            );
            Arc::new(OverlayState {
                channels,
                active_channel_id: state.active_channel_id.clone(),
            })
        }
        Action::UnregisterChannel { channel_id } => {
            if !state.channels.contains_key(channel_id) {
                return Arc::clone(state);
            }
            let mut channels = state.channels.clone();
            channels.remove(channel_id);
            // Never leave the active pointer dangling.
            let active_channel_id = state
                .active_channel_id
                .clone()
                .filter(|active| active != channel_id);
            Arc::new(OverlayState {
                channels,
                active_channel_id,
            })
        }
        // Explicit activation carries no priority check.
        Action::SetActiveChannel { channel_id } => {
            if !state.channels.contains_key(channel_id) {
                return Arc::clone(state);
            }
            Arc::new(OverlayState {
                channels: state.channels.clone(),
                active_channel_id: Some(channel_id.clone()),
            })
        }
        Action::UpdateChannelState { .. }
        | Action::AddCard { .. }
        | Action::RemoveCard { .. }
        | Action::SwipeNextCard { .. }
        | Action::SwipePrevCard { .. }
        | Action::ClearChannelCards { .. } => reduce_channel_scoped(state, action),
    }
}

fn reduce_channel_scoped(state: &Arc<OverlayState>, action: &Action) -> Arc<OverlayState> {
    let channel_id = action.channel_id();
    let Some(channel) = state.channels.get(channel_id) else {
        return Arc::clone(state);
    };

    let updated = reduce_channel(channel, action);
    if Arc::ptr_eq(&updated, channel) {
        return Arc::clone(state);
    }

    let active_channel_id = if matches!(action, Action::AddCard { .. })
        && escalates(state, updated.priority)
    {
        Some(channel_id.clone())
    } else {
        state.active_channel_id.clone()
    };

    let mut channels = state.channels.clone();
    channels.insert(channel_id.clone(), updated);
    Arc::new(OverlayState {
        channels,
        active_channel_id,
    })
}

/// Highest bidder wins: a card arrival takes the active slot when
/// nothing is active or when the arriving channel's priority strictly
/// exceeds the active channel's. A tie never reassigns.
fn escalates(state: &OverlayState, arriving_priority: i32) -> bool {
    match state.active_channel() {
        None => true,
        Some(active) => arriving_priority > active.priority,
    }
}
