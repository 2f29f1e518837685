//! Dropdown panel listing unread profile-change notifications.

use leptos::prelude::*;

use crate::net::feed::{self, FeedSender};
use crate::state::notifications::NotificationsState;

/// Unread notification list with per-item and mark-all read actions.
///
/// Read state is updated optimistically; the durable update rides the
/// feed's outgoing channel.
#[component]
pub fn NotificationPanel() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let sender = expect_context::<RwSignal<FeedSender>>();

    let mark_read = move |id: String| {
        sender
            .get_untracked()
            .send(feed::mark_read_payload(&[id.clone()]));
        notifications.update(|s| s.mark_read(&id));
    };

    let mark_all_read = move |_| {
        let ids = notifications.get_untracked().unread_ids();
        if !ids.is_empty() {
            sender.get_untracked().send(feed::mark_read_payload(&ids));
        }
        notifications.update(NotificationsState::mark_all_read);
    };

    view! {
        <div class="notification-panel">
            <div class="notification-panel__header">
                <h2>"Notifications"</h2>
                <button class="btn btn--small" on:click=mark_all_read>
                    "Mark all read"
                </button>
            </div>
            {move || {
                let unread: Vec<_> = notifications
                    .get()
                    .items
                    .into_iter()
                    .filter(|n| !n.is_read)
                    .collect();
                if unread.is_empty() {
                    return view! {
                        <p class="notification-panel__empty">"No new notifications"</p>
                    }
                        .into_any();
                }
                view! {
                    <div class="notification-panel__list">
                        {unread
                            .into_iter()
                            .map(|item| {
                                let id = item.id.clone();
                                view! {
                                    <div
                                        class="notification-panel__item"
                                        on:click=move |_| mark_read(id.clone())
                                    >
                                        <div class="notification-panel__item-title">
                                            {item.title}
                                        </div>
                                        <p class="notification-panel__item-body">{item.body}</p>
                                        <span class="notification-panel__item-time">
                                            {format_timestamp(item.timestamp)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

/// Render an epoch-milliseconds timestamp for display.
fn format_timestamp(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%d %b %Y %H:%M").to_string())
        .unwrap_or_default()
}
