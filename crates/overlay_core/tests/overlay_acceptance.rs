//! End-to-end acceptance: the full action vocabulary driven through a
//! spawned store task, observed only through published snapshots.

use std::{sync::Arc, time::Duration};

use overlay_core::{runtime, OverlayState, OverlayStore};
use shared::{
    action::Action,
    domain::{Card, ChannelId, DisplayState},
};
use tokio::{sync::watch, time::timeout};

fn cid(id: &str) -> ChannelId {
    ChannelId::from(id)
}

async fn settle(
    rx: &mut watch::Receiver<Arc<OverlayState>>,
    mut predicate: impl FnMut(&OverlayState) -> bool,
) -> Arc<OverlayState> {
    timeout(Duration::from_secs(2), async {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if predicate(&snapshot) {
                return snapshot;
            }
            rx.changed().await.expect("store task alive");
        }
    })
    .await
    .expect("state settles")
}

#[tokio::test]
async fn notification_lifecycle_acceptance() {
    let (handle, task) = runtime::spawn(OverlayStore::new());
    let mut rx = handle.subscribe();

    // Register a notification channel: present, hidden, not active.
    handle
        .dispatch(Action::RegisterChannel {
            channel_id: cid("n"),
            priority: 1,
        })
        .await
        .expect("register");
    let state = settle(&mut rx, |s| s.channels.len() == 1).await;
    let channel = state.channel(&cid("n")).expect("channel n");
    assert_eq!(channel.state, DisplayState::Hidden);
    assert_eq!(state.active_channel_id, None);

    // First card arrival escalates from no active channel.
    handle
        .dispatch(Action::AddCard {
            channel_id: cid("n"),
            card: Card::new("c1", "hi"),
        })
        .await
        .expect("add card");
    let state = settle(&mut rx, |s| {
        s.channel(&cid("n")).is_some_and(|c| !c.cards.is_empty())
    })
    .await;
    assert_eq!(state.active_channel_id, Some(cid("n")));
    let channel = state.channel(&cid("n")).expect("channel n");
    assert_eq!(channel.cards[0].id.as_str(), "c1");

    // Swiping a single-card queue clamps in place; a no-op publishes
    // nothing, so verify through a later observable change instead.
    handle
        .dispatch(Action::SwipeNextCard {
            channel_id: cid("n"),
        })
        .await
        .expect("swipe");
    handle
        .dispatch(Action::UpdateChannelState {
            channel_id: cid("n"),
            state: DisplayState::Expanded,
        })
        .await
        .expect("expand");
    let state = settle(&mut rx, |s| {
        s.channel(&cid("n"))
            .is_some_and(|c| c.state == DisplayState::Expanded)
    })
    .await;
    assert_eq!(state.channel(&cid("n")).unwrap().active_card_index, 0);

    // A higher-priority channel steals the active slot on arrival; the
    // auto-dismiss timer later removes its card.
    handle
        .dispatch(Action::RegisterChannel {
            channel_id: cid("alerts"),
            priority: 5,
        })
        .await
        .expect("register alerts");
    handle
        .dispatch(Action::AddCard {
            channel_id: cid("alerts"),
            card: Card::new("a1", "disk almost full").with_auto_dismiss(Some(25)),
        })
        .await
        .expect("add alert");
    let state = settle(&mut rx, |s| {
        s.channel(&cid("alerts"))
            .is_some_and(|c| !c.cards.is_empty())
    })
    .await;
    assert_eq!(state.active_channel_id, Some(cid("alerts")));

    let state = settle(&mut rx, |s| {
        s.channel(&cid("alerts"))
            .is_some_and(|c| c.cards.is_empty())
    })
    .await;
    // Dismissal removes the card, not the channel, and the active
    // pointer is untouched by removals.
    assert_eq!(state.active_channel_id, Some(cid("alerts")));

    // Unregistering the active channel clears the pointer.
    handle
        .dispatch(Action::UnregisterChannel {
            channel_id: cid("alerts"),
        })
        .await
        .expect("unregister");
    let state = settle(&mut rx, |s| s.channels.len() == 1).await;
    assert_eq!(state.active_channel_id, None);
    assert!(state.channel(&cid("n")).is_some());

    drop(handle);
    timeout(Duration::from_secs(2), task)
        .await
        .expect("task ends")
        .expect("task ok");
}
