use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Item name -> units on hand, at one instant
pub type InventorySnapshot = BTreeMap<String, u32>;

/// Customer-facing message. Immutable once created.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub time: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            time,
        }
    }
}

/// One completed delivery, as seen by the completion monitor
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct CompletionRecord {
    pub delivery_id: Uuid,
    pub item: String,
    pub time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_serializes_message_and_time() {
        let at = Utc::now();
        let notification = Notification::new("Your package '1 x widget' has been delivered!", at);

        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value["message"], "Your package '1 x widget' has been delivered!");
        assert_eq!(value["time"], serde_json::json!(at));
    }
}
