use crate::models::Delivery;
use crate::monitor::CompletionMonitor;
use crate::notifications::NotificationSink;
use chrono::{DateTime, Utc};
use idcn_core::DeliveryTiming;
use tracing::{debug, info};

/// Owns in-flight deliveries and moves them to history once their deadline
/// has passed
pub struct DeliveryTracker {
    active: Vec<Delivery>,
    history: Vec<Delivery>,
    timing: Box<dyn DeliveryTiming>,
}

impl DeliveryTracker {
    pub fn new(timing: Box<dyn DeliveryTiming>) -> Self {
        Self {
            active: Vec::new(),
            history: Vec::new(),
            timing,
        }
    }

    /// Ship an order. The transit time is drawn here, once, and never again.
    pub fn enqueue(&mut self, item: &str, quantity: u32, now: DateTime<Utc>) -> Delivery {
        let duration = self.timing.next_duration();
        let delivery = Delivery::new(item, quantity, now, duration);

        debug!(
            delivery_id = %delivery.id,
            label = %delivery.label,
            deadline = %delivery.deadline,
            "Delivery shipped"
        );

        self.active.push(delivery.clone());
        delivery
    }

    /// Complete every delivery whose deadline is at or before `now`, oldest
    /// first. Returns the deliveries completed by this call.
    pub fn advance(
        &mut self,
        now: DateTime<Utc>,
        notifications: &mut NotificationSink,
        monitor: &mut CompletionMonitor,
    ) -> Vec<Delivery> {
        if !self.active.iter().any(|d| d.is_due(now)) {
            return Vec::new();
        }

        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(|d| d.is_due(now));
        self.active = pending;

        let mut completed = Vec::with_capacity(due.len());
        for mut delivery in due {
            delivery.complete(now);

            notifications.notify(
                format!("Your package '{}' has been delivered!", delivery.label),
                now,
            );
            monitor.log_delivery(&delivery, now);

            info!(delivery_id = %delivery.id, label = %delivery.label, "Delivery completed");

            self.history.push(delivery.clone());
            completed.push(delivery);
        }

        completed
    }

    pub fn active(&self) -> &[Delivery] {
        &self.active
    }

    pub fn history(&self) -> &[Delivery] {
        &self.history
    }
}
