pub mod inventory;

pub use inventory::{InventoryError, InventoryStore};
