use std::collections::BTreeMap;
use idcn_core::CoreError;
use idcn_shared::InventorySnapshot;
use tracing::debug;

/// Per-item stock counts plus a snapshot of the full mapping after every
/// mutation. Callers serialize access; every method is all-or-nothing.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: BTreeMap<String, u32>,
    history: Vec<InventorySnapshot>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. The seeded state becomes the first history entry.
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut store = Self {
            items: items.into_iter().map(|(name, count)| (name.into(), count)).collect(),
            history: Vec::new(),
        };
        store.record_snapshot();
        store
    }

    /// Current count, `None` if the item is not stocked
    pub fn get(&self, item: &str) -> Option<u32> {
        self.items.get(item).copied()
    }

    /// Take `quantity` units out of stock. Returns the remaining count.
    pub fn decrement(&mut self, item: &str, quantity: i64) -> Result<u32, InventoryError> {
        let requested = positive(quantity)?;
        let count = self.items.get_mut(item)
            .ok_or_else(|| InventoryError::UnknownItem(item.to_string()))?;

        if requested > u64::from(*count) {
            return Err(InventoryError::InsufficientStock {
                item: item.to_string(),
                requested: quantity,
                available: *count,
            });
        }

        // requested <= *count, so the cast cannot truncate
        *count -= requested as u32;
        let remaining = *count;
        self.record_snapshot();

        debug!(item, quantity, remaining, "Decremented inventory");
        Ok(remaining)
    }

    /// Add stock, creating the item when absent. Returns the new count.
    pub fn add(&mut self, item: &str, quantity: i64) -> Result<u32, InventoryError> {
        let added = u32::try_from(positive(quantity)?)
            .map_err(|_| InventoryError::InvalidQuantity(quantity))?;

        let current = self.items.get(item).copied().unwrap_or(0);
        let updated = current.checked_add(added)
            .ok_or(InventoryError::InvalidQuantity(quantity))?;

        self.items.insert(item.to_string(), updated);
        self.record_snapshot();

        debug!(item, quantity, count = updated, "Added inventory");
        Ok(updated)
    }

    /// Overwrite the count of an existing item. Negative values clamp to zero.
    pub fn set(&mut self, item: &str, quantity: i64) -> Result<u32, InventoryError> {
        let count = self.items.get_mut(item)
            .ok_or_else(|| InventoryError::UnknownItem(item.to_string()))?;

        *count = quantity.clamp(0, i64::from(u32::MAX)) as u32;
        let updated = *count;
        self.record_snapshot();

        debug!(item, count = updated, "Set inventory");
        Ok(updated)
    }

    /// Drop an item from the catalog entirely
    pub fn remove(&mut self, item: &str) -> Result<(), InventoryError> {
        self.items.remove(item)
            .ok_or_else(|| InventoryError::UnknownItem(item.to_string()))?;
        self.record_snapshot();

        debug!(item, "Removed inventory item");
        Ok(())
    }

    /// Owned copy of the current mapping
    pub fn snapshot(&self) -> InventorySnapshot {
        self.items.clone()
    }

    /// Every snapshot taken so far, oldest first
    pub fn history(&self) -> &[InventorySnapshot] {
        &self.history
    }

    fn record_snapshot(&mut self) {
        self.history.push(self.items.clone());
    }
}

fn positive(quantity: i64) -> Result<u64, InventoryError> {
    if quantity <= 0 {
        return Err(InventoryError::InvalidQuantity(quantity));
    }
    Ok(quantity as u64)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Inventory item not found: {0}")]
    UnknownItem(String),

    #[error("Insufficient inventory for '{item}': requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: i64,
        available: u32,
    },

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
}

impl From<InventoryError> for CoreError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::UnknownItem(item) => CoreError::UnknownItem(item),
            InventoryError::InsufficientStock { item, requested, available } => {
                CoreError::InsufficientStock { item, requested, available }
            }
            InventoryError::InvalidQuantity(quantity) => CoreError::InvalidQuantity(quantity),
        }
    }
}
