use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::time::Duration;
use idcn_core::DeliveryWindow;
use crate::EngineError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl SimulationConfig {
    /// Period of the simulation clock. Must be non-zero.
    pub fn tick_interval(&self) -> Result<Duration, EngineError> {
        if self.tick_interval_ms == 0 {
            return Err(EngineError::InvalidTickInterval(self.tick_interval_ms));
        }
        Ok(Duration::from_millis(self.tick_interval_ms))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { tick_interval_ms: default_tick_interval_ms() }
    }
}

fn default_tick_interval_ms() -> u64 { 2000 }

#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryConfig {
    #[serde(default = "default_min_secs")]
    pub min_secs: u32,
    #[serde(default = "default_max_secs")]
    pub max_secs: u32,
    /// Fixed PRNG seed for reproducible delivery times
    pub seed: Option<u64>,
}

impl DeliveryConfig {
    pub fn window(&self) -> DeliveryWindow {
        DeliveryWindow { min_secs: self.min_secs, max_secs: self.max_secs }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            min_secs: default_min_secs(),
            max_secs: default_max_secs(),
            seed: None,
        }
    }
}

fn default_min_secs() -> u32 { 40 }
fn default_max_secs() -> u32 { 65 }

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    #[serde(default = "default_initial_inventory")]
    pub initial: BTreeMap<String, u32>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { initial: default_initial_inventory() }
    }
}

fn default_initial_inventory() -> BTreeMap<String, u32> {
    [("widget", 5), ("gadget", 3), ("thing", 2)]
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg.. `IDCN__DELIVERY__SEED=7`
            .add_source(config::Environment::with_prefix("IDCN").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse("");
        assert_eq!(config.simulation.tick_interval().unwrap(), Duration::from_secs(2));
        assert_eq!(config.delivery.window(), DeliveryWindow::default());
        assert_eq!(config.delivery.seed, None);
        assert_eq!(config.inventory.initial.get("widget"), Some(&5));
        assert_eq!(config.inventory.initial.len(), 3);
    }

    #[test]
    fn test_overrides() {
        let config = parse(
            r#"
            [simulation]
            tick_interval_ms = 250

            [delivery]
            min_secs = 5
            max_secs = 10
            seed = 42

            [inventory.initial]
            sprocket = 12
            "#,
        );
        assert_eq!(config.simulation.tick_interval().unwrap(), Duration::from_millis(250));
        assert_eq!(config.delivery.window(), DeliveryWindow { min_secs: 5, max_secs: 10 });
        assert_eq!(config.delivery.seed, Some(42));
        assert_eq!(config.inventory.initial.len(), 1);
        assert_eq!(config.inventory.initial.get("sprocket"), Some(&12));
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config = parse(
            r#"
            [simulation]
            tick_interval_ms = 0
            "#,
        );
        assert!(matches!(
            config.simulation.tick_interval(),
            Err(EngineError::InvalidTickInterval(0))
        ));
    }
}
