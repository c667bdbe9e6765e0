pub mod models;

pub use models::records::{CompletionRecord, InventorySnapshot, Notification};
