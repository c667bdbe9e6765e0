use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Duration, Utc};

/// Delivery status. `Delivered` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Shipped,
    Delivered,
}

/// A shipment created from an accepted order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Delivery {
    pub id: Uuid,
    pub item: String,
    pub quantity: u32,
    pub label: String,
    pub status: DeliveryStatus,
    pub created_at: DateTime<Utc>,
    pub duration_secs: i64,
    pub deadline: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Delivery {
    pub fn new(item: &str, quantity: u32, created_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            item: item.to_string(),
            quantity,
            label: format!("{} x {}", quantity, item),
            status: DeliveryStatus::Shipped,
            created_at,
            duration_secs: duration.num_seconds(),
            deadline: created_at + duration,
            delivered_at: None,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == DeliveryStatus::Shipped && self.deadline <= now
    }

    /// Mark as delivered (Shipped -> Delivered)
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.status = DeliveryStatus::Delivered;
        self.delivered_at = Some(at);
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderOutcome {
    Accepted,
    Rejected,
}

/// One order attempt, kept for the order history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: Uuid,
    pub item: String,
    pub quantity: i64,
    pub outcome: OrderOutcome,
    pub delivery_id: Option<Uuid>,
    pub placed_at: DateTime<Utc>,
}

impl OrderRecord {
    pub fn accepted(item: &str, quantity: i64, delivery_id: Uuid, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            item: item.to_string(),
            quantity,
            outcome: OrderOutcome::Accepted,
            delivery_id: Some(delivery_id),
            placed_at,
        }
    }

    pub fn rejected(item: &str, quantity: i64, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            item: item.to_string(),
            quantity,
            outcome: OrderOutcome::Rejected,
            delivery_id: None,
            placed_at,
        }
    }
}
