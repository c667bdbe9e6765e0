use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// Produces the transit time for a newly shipped delivery. Called exactly
/// once per delivery, at enqueue time.
pub trait DeliveryTiming: Send {
    fn next_duration(&mut self) -> Duration;
}

/// Inclusive range of transit times, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeliveryWindow {
    pub min_secs: u32,
    pub max_secs: u32,
}

impl DeliveryWindow {
    pub fn new(min_secs: u32, max_secs: u32) -> Result<Self, TimingError> {
        let window = Self { min_secs, max_secs };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), TimingError> {
        if self.min_secs == 0 || self.min_secs > self.max_secs {
            return Err(TimingError::InvalidWindow {
                min: self.min_secs,
                max: self.max_secs,
            });
        }
        Ok(())
    }
}

impl Default for DeliveryWindow {
    fn default() -> Self {
        Self {
            min_secs: 40,
            max_secs: 65,
        }
    }
}

/// Uniform draw from a [`DeliveryWindow`] using a seedable PRNG
pub struct DurationSampler {
    window: DeliveryWindow,
    rng: StdRng,
}

impl DurationSampler {
    /// With `Some(seed)` the sequence of durations is reproducible.
    pub fn new(window: DeliveryWindow, seed: Option<u64>) -> Result<Self, TimingError> {
        window.validate()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { window, rng })
    }
}

impl DeliveryTiming for DurationSampler {
    fn next_duration(&mut self) -> Duration {
        let secs = self.rng.gen_range(self.window.min_secs..=self.window.max_secs);
        Duration::seconds(i64::from(secs))
    }
}

/// Every delivery takes the same time
#[derive(Debug, Clone, Copy)]
pub struct FixedDuration(pub Duration);

impl DeliveryTiming for FixedDuration {
    fn next_duration(&mut self) -> Duration {
        self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TimingError {
    #[error("Invalid delivery window: min {min}s, max {max}s")]
    InvalidWindow { min: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_durations_stay_inside_window() {
        let window = DeliveryWindow::default();
        let mut sampler = DurationSampler::new(window, Some(7)).unwrap();

        for _ in 0..500 {
            let secs = sampler.next_duration().num_seconds();
            assert!((40..=65).contains(&secs), "{} outside window", secs);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let window = DeliveryWindow::new(40, 65).unwrap();
        let mut a = DurationSampler::new(window, Some(42)).unwrap();
        let mut b = DurationSampler::new(window, Some(42)).unwrap();

        let first: Vec<_> = (0..20).map(|_| a.next_duration()).collect();
        let second: Vec<_> = (0..20).map(|_| b.next_duration()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_window_rejected() {
        assert!(DeliveryWindow::new(65, 40).is_err());
        assert!(DeliveryWindow::new(0, 10).is_err());
        assert!(DeliveryWindow::new(50, 50).is_ok());
    }
}
