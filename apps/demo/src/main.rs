//! Scripted walkthrough of the overlay state core: channel lifecycle,
//! priority escalation, swiping, and auto-dismiss, printed as JSON
//! snapshots.

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use overlay_core::{runtime, OverlayState, OverlayStore};
use shared::{
    action::Action,
    domain::{Card, ChannelId, DisplayState},
};
use tokio::{sync::watch, time::timeout};
use uuid::Uuid;

#[derive(Parser, Debug)]
struct Args {
    /// Pretty-print state snapshots.
    #[arg(long)]
    pretty: bool,
    /// Auto-dismiss delay for the alert card, in milliseconds.
    #[arg(long, default_value_t = 1500)]
    auto_dismiss_ms: u64,
}

fn stamped_card(content: &str) -> Card {
    Card::new(Uuid::new_v4().to_string(), content).with_timestamp(Utc::now().timestamp_millis())
}

fn print_snapshot(args: &Args, label: &str, state: &OverlayState) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(state)?
    } else {
        serde_json::to_string(state)?
    };
    println!("--- {label}");
    println!("{rendered}");
    Ok(())
}

/// Waits until a published snapshot satisfies the predicate. No-op
/// dispatches publish nothing, so callers wait on observable change.
async fn settle(
    rx: &mut watch::Receiver<Arc<OverlayState>>,
    mut predicate: impl FnMut(&OverlayState) -> bool,
) -> Result<Arc<OverlayState>> {
    let state = timeout(Duration::from_secs(10), async {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if predicate(&snapshot) {
                return snapshot;
            }
            rx.changed().await.expect("store task alive");
        }
    })
    .await?;
    Ok(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let (handle, task) = runtime::spawn(OverlayStore::new());
    let mut rx = handle.subscribe();

    for (channel, priority) in [("notifications", 1), ("chat", 2), ("alerts", 5)] {
        handle
            .dispatch(Action::RegisterChannel {
                channel_id: ChannelId::from(channel),
                priority,
            })
            .await?;
    }
    let state = settle(&mut rx, |s| s.channels.len() == 3).await?;
    print_snapshot(&args, "registered three channels, none active", &state)?;

    let notifications = ChannelId::from("notifications");
    let chat = ChannelId::from("chat");
    let alerts = ChannelId::from("alerts");

    handle
        .dispatch(Action::AddCard {
            channel_id: notifications.clone(),
            card: stamped_card("build finished"),
        })
        .await?;
    handle
        .dispatch(Action::AddCard {
            channel_id: notifications.clone(),
            card: stamped_card("2 new followers"),
        })
        .await?;
    handle
        .dispatch(Action::AddCard {
            channel_id: chat.clone(),
            card: stamped_card("bob: lunch?").with_title("bob"),
        })
        .await?;
    let state = settle(&mut rx, |s| {
        s.channel(&chat).is_some_and(|c| !c.cards.is_empty())
    })
    .await?;
    print_snapshot(
        &args,
        "cards arrived; chat (priority 2) took the active slot from notifications",
        &state,
    )?;

    handle
        .dispatch(Action::SwipeNextCard {
            channel_id: notifications.clone(),
        })
        .await?;
    handle
        .dispatch(Action::UpdateChannelState {
            channel_id: chat.clone(),
            state: DisplayState::Expanded,
        })
        .await?;
    let state = settle(&mut rx, |s| {
        s.channel(&chat)
            .is_some_and(|c| c.state == DisplayState::Expanded)
    })
    .await?;
    if let Some(card) = state
        .channel(&notifications)
        .and_then(|channel| channel.active_card())
    {
        println!("notifications now shows: {}", card.content);
    }

    handle
        .dispatch(Action::AddCard {
            channel_id: alerts.clone(),
            card: stamped_card("disk almost full").with_auto_dismiss(Some(args.auto_dismiss_ms)),
        })
        .await?;
    let state = settle(&mut rx, |s| {
        s.channel(&alerts).is_some_and(|c| !c.cards.is_empty())
    })
    .await?;
    print_snapshot(&args, "alert arrived and escalated (priority 5)", &state)?;

    let state = settle(&mut rx, |s| {
        s.channel(&alerts).is_some_and(|c| c.cards.is_empty())
    })
    .await?;
    print_snapshot(&args, "alert auto-dismissed", &state)?;

    handle
        .dispatch(Action::UnregisterChannel {
            channel_id: alerts.clone(),
        })
        .await?;
    let state = settle(&mut rx, |s| s.channels.len() == 2).await?;
    print_snapshot(
        &args,
        "alerts unregistered; active pointer cleared, never dangling",
        &state,
    )?;

    drop(handle);
    task.await?;
    Ok(())
}
