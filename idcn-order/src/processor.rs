use crate::fulfillment::DeliveryTracker;
use crate::models::{Delivery, OrderRecord};
use crate::notifications::NotificationSink;
use chrono::{DateTime, Utc};
use idcn_catalog::{InventoryError, InventoryStore};
use idcn_core::{CoreError, CoreResult};
use tracing::{info, warn};

/// Validates orders and fulfills them in one step against inventory.
/// Keeps a log of every attempt.
#[derive(Debug, Clone, Default)]
pub struct OrderProcessor {
    history: Vec<OrderRecord>,
}

impl OrderProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decrement stock and ship, or leave stock untouched and notify the
    /// customer of the shortfall.
    pub fn submit(
        &mut self,
        inventory: &mut InventoryStore,
        tracker: &mut DeliveryTracker,
        notifications: &mut NotificationSink,
        item: &str,
        quantity: i64,
        now: DateTime<Utc>,
    ) -> CoreResult<Delivery> {
        if quantity <= 0 {
            self.history.push(OrderRecord::rejected(item, quantity, now));
            warn!(item, quantity, "Rejected order with invalid quantity");
            return Err(CoreError::InvalidQuantity(quantity));
        }

        match inventory.decrement(item, quantity) {
            Ok(remaining) => {
                // decrement succeeded, so quantity fits in the item's u32 count
                let delivery = tracker.enqueue(item, quantity as u32, now);
                self.history.push(OrderRecord::accepted(item, quantity, delivery.id, now));

                info!(item, quantity, remaining, delivery_id = %delivery.id, "Order placed");
                Ok(delivery)
            }
            Err(err @ (InventoryError::UnknownItem(_) | InventoryError::InsufficientStock { .. })) => {
                let available = inventory.get(item).unwrap_or(0);
                notifications.notify(
                    format!(
                        "Order for {} x '{}' cannot be fulfilled. Only {} available.",
                        quantity, item, available
                    ),
                    now,
                );
                self.history.push(OrderRecord::rejected(item, quantity, now));

                warn!(item, quantity, available, "Order could not be fulfilled");
                Err(err.into())
            }
            Err(err) => {
                self.history.push(OrderRecord::rejected(item, quantity, now));
                Err(err.into())
            }
        }
    }

    /// Every order attempt, oldest first
    pub fn history(&self) -> &[OrderRecord] {
        &self.history
    }
}
