use std::sync::Arc;
use chrono::{DateTime, Utc};
use idcn_catalog::InventoryStore;
use idcn_core::{Clock, CoreError, CoreResult, DeliveryTiming, DurationSampler, SystemClock};
use idcn_order::{CompletionSummary, Delivery, OrderRecord};
use idcn_shared::{InventorySnapshot, Notification};
use parking_lot::Mutex;
use serde::Serialize;

use crate::app_config::Config;
use crate::state::SimulationState;
use crate::EngineError;

/// Handle to the shared simulation. Cheap to clone; every clone sees the
/// same state. Each method holds the lock for its whole body.
#[derive(Clone)]
pub struct Simulation {
    state: Arc<Mutex<SimulationState>>,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub inventory: InventorySnapshot,
    pub deliveries: usize,
    pub notifications: usize,
    pub delivered_today: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub delivered_today: u64,
    pub pending_deliveries: usize,
    pub completed_deliveries: usize,
    pub notifications: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub metrics: DashboardMetrics,
    pub inventory: InventorySnapshot,
    pub deliveries: Vec<Delivery>,
    pub notifications: Vec<Notification>,
    pub delivery_history: Vec<Delivery>,
}

impl Simulation {
    pub fn new(inventory: InventoryStore, timing: Box<dyn DeliveryTiming>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SimulationState::new(inventory, timing))),
            clock,
        }
    }

    /// Build from settings, on the system clock
    pub fn from_config(config: &Config) -> Result<Self, EngineError> {
        config.simulation.tick_interval()?;
        let sampler = DurationSampler::new(config.delivery.window(), config.delivery.seed)?;
        let inventory = InventoryStore::with_items(config.inventory.initial.clone());
        Ok(Self::new(inventory, Box::new(sampler), Arc::new(SystemClock)))
    }

    pub fn place_order(&self, item: &str, quantity: i64) -> CoreResult<Delivery> {
        let now = self.clock.now();
        self.state.lock().place_order(item, quantity, now)
    }

    /// Returns the item's new count
    pub fn add_inventory(&self, item: &str, quantity: i64) -> CoreResult<u32> {
        self.state.lock().inventory.add(item, quantity).map_err(CoreError::from)
    }

    pub fn set_inventory(&self, item: &str, quantity: i64) -> CoreResult<u32> {
        self.state.lock().inventory.set(item, quantity).map_err(CoreError::from)
    }

    pub fn remove_inventory(&self, item: &str) -> CoreResult<()> {
        self.state.lock().inventory.remove(item).map_err(CoreError::from)
    }

    pub fn inventory_snapshot(&self) -> InventorySnapshot {
        self.state.lock().inventory.snapshot()
    }

    pub fn inventory_history(&self) -> Vec<InventorySnapshot> {
        self.state.lock().inventory.history().to_vec()
    }

    pub fn active_deliveries(&self) -> Vec<Delivery> {
        self.state.lock().deliveries.active().to_vec()
    }

    pub fn delivery_history(&self) -> Vec<Delivery> {
        self.state.lock().deliveries.history().to_vec()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.state.lock().notifications.all().to_vec()
    }

    pub fn completion_summary(&self) -> CompletionSummary {
        self.state.lock().monitor.summary()
    }

    pub fn order_history(&self) -> Vec<OrderRecord> {
        self.state.lock().orders.history().to_vec()
    }

    pub fn status(&self) -> StatusReport {
        let state = self.state.lock();
        StatusReport {
            inventory: state.inventory.snapshot(),
            deliveries: state.deliveries.active().len(),
            notifications: state.notifications.len(),
            delivered_today: state.monitor.delivered_count(),
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        let state = self.state.lock();
        Dashboard {
            metrics: DashboardMetrics {
                delivered_today: state.monitor.delivered_count(),
                pending_deliveries: state.deliveries.active().len(),
                completed_deliveries: state.deliveries.history().len(),
                notifications: state.notifications.len(),
            },
            inventory: state.inventory.snapshot(),
            deliveries: state.deliveries.active().to_vec(),
            notifications: state.notifications.all().to_vec(),
            delivery_history: state.deliveries.history().to_vec(),
        }
    }

    /// Complete deliveries due at `now`
    pub fn advance(&self, now: DateTime<Utc>) -> Vec<Delivery> {
        self.state.lock().advance(now)
    }

    /// Complete deliveries due at the clock's current time
    pub fn tick(&self) -> Vec<Delivery> {
        let now = self.clock.now();
        self.advance(now)
    }
}
