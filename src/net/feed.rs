//! Realtime notification feed client.
//!
//! Subscribes to the server's profile-change feed over WebSocket and keeps
//! the notification store in sync: full snapshots replace the list, push
//! messages surface as toasts, and mark-read updates flow back out over
//! the same socket. The connection lifecycle mirrors the rest of the
//! console's network handling: connect, dispatch, reconnect with
//! exponential backoff. WebSocket logic requires a browser environment.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use serde_json::Value;

#[cfg(feature = "hydrate")]
use crate::state::notifications;
#[cfg(feature = "hydrate")]
use crate::state::notifications::NotificationsState;

/// A parsed incoming feed message.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedEvent {
    /// Full change-log snapshot keyed by entry id.
    Snapshot(Value),
    /// Foreground push message to surface as a toast.
    Toast(Value),
}

/// Classify an incoming feed payload. Unknown message types and non-JSON
/// frames are ignored.
pub fn parse_feed_event(raw: &str) -> Option<FeedEvent> {
    let value: Value = serde_json::from_str(raw).ok()?;
    match value.get("type").and_then(Value::as_str)? {
        "snapshot" => Some(FeedEvent::Snapshot(
            value.get("entries").cloned().unwrap_or(Value::Null),
        )),
        "message" => Some(FeedEvent::Toast(value)),
        _ => None,
    }
}

/// Encode a mark-read update for the given entry ids.
pub fn mark_read_payload(ids: &[String]) -> String {
    serde_json::json!({ "action": "markRead", "ids": ids }).to_string()
}

/// Derive the feed's WebSocket URL from the API base, carrying the access
/// token as a query parameter.
pub fn feed_url(token: &str) -> String {
    let base = crate::net::api::api_url("/notifications/feed");
    let ws_base = if let Some(rest) = base.strip_prefix("https") {
        format!("wss{rest}")
    } else if let Some(rest) = base.strip_prefix("http") {
        format!("ws{rest}")
    } else {
        base
    };
    format!("{ws_base}?token={}", urlencoding::encode(token))
}

/// Handle to the feed's outgoing channel, provided via context so the
/// notification panel can push mark-read updates.
#[derive(Clone, Default)]
pub struct FeedSender(#[cfg(feature = "hydrate")] Option<futures::channel::mpsc::UnboundedSender<String>>);

impl FeedSender {
    /// Queue an outgoing feed message; dropped silently when there is no
    /// active connection.
    pub fn send(&self, payload: String) {
        #[cfg(feature = "hydrate")]
        if let Some(tx) = &self.0 {
            let _ = tx.unbounded_send(payload);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    }
}

/// Spawn the feed client loop; returns the outgoing-message handle.
#[cfg(feature = "hydrate")]
pub fn spawn_feed(
    session: leptos::prelude::RwSignal<crate::state::session::SessionState>,
    store: leptos::prelude::RwSignal<NotificationsState>,
) -> FeedSender {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    leptos::task::spawn_local(feed_loop(session, store, rx));
    FeedSender(Some(tx))
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn feed_loop(
    session: leptos::prelude::RwSignal<crate::state::session::SessionState>,
    store: leptos::prelude::RwSignal<NotificationsState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::GetUntracked;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        // The feed is only meaningful with a live session; wait out
        // anonymous stretches instead of connecting unauthenticated.
        let Some(token) = session.get_untracked().token else {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms)))
                .await;
            continue;
        };

        match connect_and_run(&feed_url(&token), store, &rx).await {
            Ok(()) => leptos::logging::log!("notification feed disconnected"),
            Err(e) => leptos::logging::warn!("notification feed error: {e}"),
        }

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the feed and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    store: leptos::prelude::RwSignal<NotificationsState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Forward outgoing mark-read updates from the shared channel.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match parse_feed_event(&text) {
                    Some(FeedEvent::Snapshot(entries)) => {
                        store.update(|s| s.apply_snapshot(&entries));
                    }
                    Some(FeedEvent::Toast(payload)) => {
                        let toast = notifications::toast_from_message(&payload);
                        store.update(|s| s.last_toast = Some(toast));
                    }
                    None => {}
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("feed recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
