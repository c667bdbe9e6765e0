use chrono::{DateTime, Utc};
use idcn_shared::CompletionRecord;
use serde::Serialize;
use crate::models::Delivery;

/// Running tally of completed deliveries
#[derive(Debug, Clone, Default)]
pub struct CompletionMonitor {
    delivered_count: u64,
    log: Vec<CompletionRecord>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompletionSummary {
    pub delivered_count: u64,
    pub log: Vec<CompletionRecord>,
}

impl CompletionMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_delivery(&mut self, delivery: &Delivery, at: DateTime<Utc>) {
        self.delivered_count += 1;
        self.log.push(CompletionRecord {
            delivery_id: delivery.id,
            item: delivery.item.clone(),
            time: at,
        });
    }

    pub fn delivered_count(&self) -> u64 {
        self.delivered_count
    }

    pub fn summary(&self) -> CompletionSummary {
        CompletionSummary {
            delivered_count: self.delivered_count,
            log: self.log.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_summary_counts_each_logged_delivery() {
        let mut monitor = CompletionMonitor::new();
        let now = Utc::now();
        let delivery = Delivery::new("thing", 2, now, Duration::seconds(40));

        monitor.log_delivery(&delivery, now);

        let summary = monitor.summary();
        assert_eq!(summary.delivered_count, 1);
        assert_eq!(summary.log.len(), 1);
        assert_eq!(summary.log[0].item, "thing");
        assert_eq!(summary.log[0].delivery_id, delivery.id);
    }
}
