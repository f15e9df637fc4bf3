use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardId, ChannelId, DisplayState};

/// The complete mutation surface of the overlay state core. Reducers
/// match on this exhaustively; adding a variant forces every reducer
/// to decide how to handle it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    RegisterChannel {
        channel_id: ChannelId,
        priority: i32,
    },
    UnregisterChannel {
        channel_id: ChannelId,
    },
    SetActiveChannel {
        channel_id: ChannelId,
    },
    UpdateChannelState {
        channel_id: ChannelId,
        state: DisplayState,
    },
    AddCard {
        channel_id: ChannelId,
        card: Card,
    },
    RemoveCard {
        channel_id: ChannelId,
        card_id: CardId,
    },
    SwipeNextCard {
        channel_id: ChannelId,
    },
    SwipePrevCard {
        channel_id: ChannelId,
    },
    ClearChannelCards {
        channel_id: ChannelId,
    },
}

impl Action {
    /// Channel targeted by this action. Every variant carries exactly
    /// one; the channel reducer uses this as its mis-routing guard.
    pub fn channel_id(&self) -> &ChannelId {
        match self {
            Action::RegisterChannel { channel_id, .. }
            | Action::UnregisterChannel { channel_id }
            | Action::SetActiveChannel { channel_id }
            | Action::UpdateChannelState { channel_id, .. }
            | Action::AddCard { channel_id, .. }
            | Action::RemoveCard { channel_id, .. }
            | Action::SwipeNextCard { channel_id }
            | Action::SwipePrevCard { channel_id }
            | Action::ClearChannelCards { channel_id } => channel_id,
        }
    }
}
