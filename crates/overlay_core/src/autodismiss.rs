//! Auto-dismiss timer layer.
//!
//! Layered on top of dispatch, never on state: for each arriving card
//! marked `auto_dismiss` it sleeps for the card's duration and then
//! sends `RemoveCard` back through the store's action inlet. Removal of
//! a card that is already gone is an ordinary reducer no-op.

use std::time::Duration;

use shared::action::Action;
use tokio::sync::mpsc;
use tracing::debug;

/// Dismissal delay for cards that set `auto_dismiss` without a
/// per-card duration override.
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 5_000;

pub struct AutoDismissTimer {
    actions: mpsc::WeakSender<Action>,
}

impl AutoDismissTimer {
    /// Holds only a weak sender so pending timers never keep a
    /// shut-down store task alive.
    pub fn new(actions: &mpsc::Sender<Action>) -> Self {
        Self {
            actions: actions.downgrade(),
        }
    }

    /// Inspects one dispatched action and schedules a dismissal for
    /// auto-dismiss card arrivals. Every other action passes through.
    pub fn observe(&self, action: &Action) {
        let Action::AddCard { channel_id, card } = action else {
            return;
        };
        if !card.auto_dismiss {
            return;
        }

        let delay = Duration::from_millis(card.auto_dismiss_ms.unwrap_or(DEFAULT_AUTO_DISMISS_MS));
        let actions = self.actions.clone();
        let channel_id = channel_id.clone();
        let card_id = card.id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(sender) = actions.upgrade() else {
                return;
            };
            if sender
                .send(Action::RemoveCard {
                    channel_id,
                    card_id,
                })
                .await
                .is_err()
            {
                debug!("store task gone before auto-dismiss fired");
            }
        });
    }
}
