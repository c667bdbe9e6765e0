use chrono::{DateTime, Utc};
use idcn_catalog::InventoryStore;
use idcn_core::{CoreResult, DeliveryTiming};
use idcn_order::{CompletionMonitor, Delivery, DeliveryTracker, NotificationSink, OrderProcessor};

/// Everything the simulation mutates. Always accessed through one lock.
pub struct SimulationState {
    pub inventory: InventoryStore,
    pub orders: OrderProcessor,
    pub deliveries: DeliveryTracker,
    pub notifications: NotificationSink,
    pub monitor: CompletionMonitor,
}

impl SimulationState {
    pub fn new(inventory: InventoryStore, timing: Box<dyn DeliveryTiming>) -> Self {
        Self {
            inventory,
            orders: OrderProcessor::new(),
            deliveries: DeliveryTracker::new(timing),
            notifications: NotificationSink::new(),
            monitor: CompletionMonitor::new(),
        }
    }

    pub fn place_order(&mut self, item: &str, quantity: i64, now: DateTime<Utc>) -> CoreResult<Delivery> {
        self.orders.submit(
            &mut self.inventory,
            &mut self.deliveries,
            &mut self.notifications,
            item,
            quantity,
            now,
        )
    }

    /// One tick of delivery progress
    pub fn advance(&mut self, now: DateTime<Utc>) -> Vec<Delivery> {
        self.deliveries.advance(now, &mut self.notifications, &mut self.monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use idcn_core::FixedDuration;

    #[test]
    fn test_units_shipped_match_units_taken() {
        let inventory = InventoryStore::with_items([("widget", 5), ("gadget", 3)]);
        let mut state = SimulationState::new(inventory, Box::new(FixedDuration(Duration::seconds(40))));
        let t0 = Utc::now();

        state.place_order("widget", 2, t0).unwrap();
        state.place_order("gadget", 3, t0).unwrap();
        assert!(state.place_order("widget", 4, t0).is_err());
        state.advance(t0 + Duration::seconds(40));
        state.place_order("widget", 1, t0 + Duration::seconds(41)).unwrap();

        let shipped: u32 = state.deliveries.active().iter()
            .chain(state.deliveries.history())
            .map(|d| d.quantity)
            .sum();
        let remaining: u32 = state.inventory.snapshot().values().sum();
        assert_eq!(shipped, 6);
        assert_eq!(remaining, 8 - shipped);
    }
}
