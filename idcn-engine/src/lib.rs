pub mod app_config;
pub mod state;
pub mod simulation;
pub mod worker;

pub use simulation::{Dashboard, DashboardMetrics, Simulation, StatusReport};
pub use state::SimulationState;
pub use worker::{ClockHandle, SimulationClock};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Delivery timing error: {0}")]
    Timing(#[from] idcn_core::TimingError),
    #[error("Invalid tick interval: {0}ms")]
    InvalidTickInterval(u64),
}
