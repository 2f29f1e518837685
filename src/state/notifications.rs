//! Notification store fed by the realtime profile-change feed.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use serde_json::Value;

/// A single display-ready notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Milliseconds since the epoch.
    pub timestamp: i64,
    pub is_read: bool,
}

/// State behind the navbar bell and its dropdown panel.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<NotificationItem>,
    pub unread_count: usize,
    /// Most recent foreground push, consumed by the toast chrome.
    pub last_toast: Option<NotificationItem>,
}

impl NotificationsState {
    /// Replace the list from a full feed snapshot.
    pub fn apply_snapshot(&mut self, entries: &Value) {
        self.items = project_entries(entries);
        self.recount();
    }

    /// Mark one notification read locally.
    pub fn mark_read(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.is_read = true;
        }
        self.recount();
    }

    /// Mark every notification read locally.
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_read = true;
        }
        self.recount();
    }

    /// Ids of the notifications still unread.
    pub fn unread_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|n| !n.is_read)
            .map(|n| n.id.clone())
            .collect()
    }

    fn recount(&mut self) {
        self.unread_count = self.items.iter().filter(|n| !n.is_read).count();
    }
}

/// Project raw change-log entries into a newest-first notification list.
///
/// Entries are keyed by id and carry the editing user, a map of changed
/// fields, a timestamp, and a read flag. Unusable fields fall back to
/// placeholder text instead of dropping the entry.
pub fn project_entries(entries: &Value) -> Vec<NotificationItem> {
    let Some(map) = entries.as_object() else {
        return Vec::new();
    };

    let mut items: Vec<NotificationItem> = map
        .iter()
        .map(|(id, entry)| {
            let user_name = entry
                .get("userName")
                .and_then(Value::as_str)
                .unwrap_or("User");
            let field = entry
                .get("changes")
                .and_then(Value::as_object)
                .and_then(|changes| changes.keys().next())
                .map_or("unknown field", String::as_str);

            NotificationItem {
                id: id.clone(),
                title: format!("Profile updated by {user_name}"),
                body: format!("Changed field: {field}"),
                timestamp: entry_timestamp(entry),
                is_read: entry.get("isRead").and_then(Value::as_bool).unwrap_or(false),
            }
        })
        .collect();

    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items
}

/// Build a toast from a foreground push message, with placeholder text for
/// anything the payload omits.
pub fn toast_from_message(payload: &Value) -> NotificationItem {
    NotificationItem {
        id: payload
            .get("id")
            .and_then(Value::as_str)
            .map_or_else(|| uuid::Uuid::new_v4().to_string(), ToOwned::to_owned),
        title: payload
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("New notification")
            .to_owned(),
        body: payload
            .get("body")
            .and_then(Value::as_str)
            .unwrap_or("You have a new notification")
            .to_owned(),
        timestamp: entry_timestamp(payload),
        is_read: false,
    }
}

/// Feed timestamps arrive either as epoch milliseconds or as RFC 3339
/// strings; anything else counts as the epoch.
fn entry_timestamp(entry: &Value) -> i64 {
    match entry.get("timestamp") {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(0),
        _ => 0,
    }
}
