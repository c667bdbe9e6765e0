pub mod models;
pub mod processor;
pub mod fulfillment;
pub mod notifications;
pub mod monitor;

pub use models::{Delivery, DeliveryStatus, OrderOutcome, OrderRecord};
pub use processor::OrderProcessor;
pub use fulfillment::DeliveryTracker;
pub use notifications::NotificationSink;
pub use monitor::{CompletionMonitor, CompletionSummary};
