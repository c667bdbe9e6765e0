use chrono::{DateTime, Utc};
use idcn_shared::Notification;

/// Append-only log of customer-facing messages
#[derive(Debug, Clone, Default)]
pub struct NotificationSink {
    notifications: Vec<Notification>,
}

impl NotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, message: impl Into<String>, at: DateTime<Utc>) {
        self.notifications.push(Notification::new(message, at));
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_keep_append_order() {
        let mut sink = NotificationSink::new();
        let now = Utc::now();

        sink.notify("first", now);
        sink.notify("second", now);

        let messages: Vec<_> = sink.all().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
        assert_eq!(sink.len(), 2);
    }
}
