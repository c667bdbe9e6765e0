pub mod clock;
pub mod timing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timing::{DeliveryTiming, DeliveryWindow, DurationSampler, FixedDuration, TimingError};

/// Errors surfaced to callers of the simulation. All are recoverable and
/// leave shared state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoreError {
    #[error("Item '{0}' not found in inventory")]
    UnknownItem(String),
    #[error("Insufficient stock for '{item}': requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: i64,
        available: u32,
    },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
}

pub type CoreResult<T> = Result<T, CoreError>;
