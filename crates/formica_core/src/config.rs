//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file read by the hosting driver.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults, missing sections fall back)
//! 3. Command line flags such as `--seed` (applied by the binary)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 50
//! height = 40
//! nest_x = 30
//! nest_y = 20
//! initial_nest_food = 50
//! seed = 42
//!
//! [pheromone]
//! go_straight_probability = 0.9
//! colony_decay_rate = 0.005
//! food_decay_rate = 0.01
//! ```

use crate::simulation::StepParams;
use serde::{Deserialize, Serialize};

/// Grid geometry, nest and starting resources.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    pub nest_x: u16,
    pub nest_y: u16,
    pub initial_nest_food: u64,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 40,
            nest_x: 30,
            nest_y: 20,
            initial_nest_food: 50,
            seed: None,
        }
    }
}

/// Food scattered over the field at startup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FoodConfig {
    pub places: usize,
    pub quantity: u32,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            places: 30,
            quantity: 25,
        }
    }
}

/// Birth and death rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColonyConfig {
    pub max_ants: Option<usize>,
    pub food_per_ant: u64,
    pub life_expectancy: u64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            max_ants: Some(200),
            food_per_ant: 5,
            life_expectancy: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PheromoneConfig {
    pub go_straight_probability: f64,
    pub colony_decay_rate: f64,
    pub food_decay_rate: f64,
}

impl Default for PheromoneConfig {
    fn default() -> Self {
        Self {
            go_straight_probability: 0.9,
            colony_decay_rate: 0.005,
            food_decay_rate: 0.01,
        }
    }
}

/// Cadence of the three scheduled operations, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub step_delay_ms: u64,
    pub birth_delay_ms: u64,
    pub death_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 100,
            birth_delay_ms: 500,
            death_delay_ms: 500,
        }
    }
}

impl TimingConfig {
    /// Steps between two births when the clock is replaced by step counting.
    #[must_use]
    pub fn birth_every_steps(&self) -> u64 {
        Self::every_steps(self.birth_delay_ms, self.step_delay_ms)
    }

    #[must_use]
    pub fn death_every_steps(&self) -> u64 {
        Self::every_steps(self.death_delay_ms, self.step_delay_ms)
    }

    fn every_steps(delay_ms: u64, step_delay_ms: u64) -> u64 {
        (delay_ms / step_delay_ms.max(1)).max(1)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub food: FoodConfig,
    pub colony: ColonyConfig,
    pub pheromone: PheromoneConfig,
    pub timing: TimingConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.nest_x < self.world.width && self.world.nest_y < self.world.height,
            "Nest ({}, {}) must lie inside the {}x{} world",
            self.world.nest_x,
            self.world.nest_y,
            self.world.width,
            self.world.height
        );

        anyhow::ensure!(
            self.colony.max_ants != Some(0),
            "Max ants must be positive when set"
        );

        let p = &self.pheromone;
        anyhow::ensure!(
            (0.0..=1.0).contains(&p.go_straight_probability),
            "Go-straight probability must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            p.colony_decay_rate >= 0.0 && p.colony_decay_rate.is_finite(),
            "Colony decay rate must be non-negative"
        );
        anyhow::ensure!(
            p.food_decay_rate >= 0.0 && p.food_decay_rate.is_finite(),
            "Food decay rate must be non-negative"
        );

        anyhow::ensure!(
            self.timing.step_delay_ms > 0,
            "Step delay must be positive"
        );
        anyhow::ensure!(
            self.timing.birth_delay_ms > 0 && self.timing.death_delay_ms > 0,
            "Birth and death delays must be positive"
        );

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    #[must_use]
    pub fn step_params(&self) -> StepParams {
        StepParams {
            go_straight_probability: self.pheromone.go_straight_probability,
            colony_decay_rate: self.pheromone.colony_decay_rate,
            food_decay_rate: self.pheromone.food_decay_rate,
        }
    }

    /// Hash of every parameter that influences the dynamics. Two runs with
    /// the same fingerprint and seed are identical.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.food).as_bytes());
        hasher.update(format!("{:?}", self.colony).as_bytes());
        hasher.update(format!("{:?}", self.pheromone).as_bytes());
        hasher.update(format!("{:?}", self.timing).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_world_width() {
        let mut config = AppConfig::default();
        config.world.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nest_outside_world() {
        let mut config = AppConfig::default();
        config.world.nest_x = config.world.width;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_go_straight_probability() {
        let mut config = AppConfig::default();
        config.pheromone.go_straight_probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_decay_rate() {
        let mut config = AppConfig::default();
        config.pheromone.food_decay_rate = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [world]
            width = 10
            height = 8
            nest_x = 2
            nest_y = 3
            seed = 7

            [colony]
            life_expectancy = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.world.width, 10);
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.world.initial_nest_food, 50);
        assert_eq!(config.colony.life_expectancy, 20);
        assert_eq!(config.colony.food_per_ant, 5);
        assert_eq!(config.pheromone, PheromoneConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_cadence_in_steps() {
        let timing = TimingConfig::default();
        assert_eq!(timing.birth_every_steps(), 5);
        let fast = TimingConfig {
            step_delay_ms: 1000,
            birth_delay_ms: 10,
            death_delay_ms: 2500,
        };
        assert_eq!(fast.birth_every_steps(), 1);
        assert_eq!(fast.death_every_steps(), 2);
    }

    #[test]
    fn test_fingerprint_consistency() {
        let a = AppConfig::default();
        let mut b = AppConfig::default();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.pheromone.food_decay_rate = 0.02;
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }
}
