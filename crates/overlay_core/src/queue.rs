//! Append/remove/index semantics for a channel's card list.
//!
//! Pure value operations; they never fail. Cards are shared via `Arc`
//! so copying a queue bumps refcounts instead of cloning card bodies.

use std::sync::Arc;

use shared::domain::{Card, CardId};

/// Appends a card at the tail, preserving arrival order. Duplicate ids
/// are permitted and not reconciled; removal is first-match.
pub fn append(cards: &[Arc<Card>], card: Card) -> Vec<Arc<Card>> {
    let mut next = cards.to_vec();
    next.push(Arc::new(card));
    next
}

/// Removes the first card with the given id. Returns `None` when no
/// card matches so the caller can treat the removal as a no-op.
pub fn remove_by_id(cards: &[Arc<Card>], id: &CardId) -> Option<Vec<Arc<Card>>> {
    let position = cards.iter().position(|card| &card.id == id)?;
    let mut next = cards.to_vec();
    next.remove(position);
    Some(next)
}

/// The empty queue.
pub fn clear() -> Vec<Arc<Card>> {
    Vec::new()
}
