use anyhow::{Context, Result};
use std::path::Path;

use crate::app::report::RunReport;
use crate::app::shutdown::ShutdownManager;
use crate::model::config::AppConfig;
use crate::model::metrics::Metrics;
use crate::model::{StepParams, StepReport, World};

pub struct App {
    pub running: bool,
    pub world: World,
    pub config: AppConfig,
    pub params: StepParams,
    pub metrics: Metrics,
    pub max_steps: Option<u64>,
    pub shutdown: ShutdownManager,
}

impl App {
    /// Reads `path` as TOML. A missing file yields the defaults and writes
    /// them out so they can be edited; an unreadable or invalid file is an
    /// error.
    pub fn load_config(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            let default = AppConfig::default();
            if let Ok(toml_str) = default.to_toml() {
                if let Err(e) = std::fs::write(path, toml_str) {
                    tracing::warn!(error = %e, "Could not write default config");
                }
            }
            return Ok(default);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        AppConfig::from_toml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Builds the world described by `config` and scatters the initial food.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let mut world = World::from_config(&config.world).context("building world")?;
        world.place_food(config.food.places, config.food.quantity);

        tracing::info!(
            width = config.world.width,
            height = config.world.height,
            seed = ?config.world.seed,
            food = world.food_quantity(),
            nest_food = world.nest_food_quantity(),
            fingerprint = %config.fingerprint(),
            "Simulation initialized"
        );

        Ok(Self {
            running: true,
            params: config.step_params(),
            world,
            config,
            metrics: Metrics::new(),
            max_steps: None,
            shutdown: ShutdownManager::new(),
        })
    }

    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn step_once(&mut self) -> StepReport {
        let started = std::time::Instant::now();
        let report = self.world.step(&self.params);
        self.metrics.record_step(
            started.elapsed(),
            &report,
            self.world.population(),
            self.world.food_quantity(),
            self.world.nest_food_quantity(),
        );
        report
    }

    pub fn try_birth(&mut self) -> bool {
        let colony = &self.config.colony;
        let born = self
            .world
            .birth(colony.food_per_ant, colony.max_ants, None)
            .is_some();
        if born {
            self.metrics.increment_counter("births");
        }
        born
    }

    pub fn try_death(&mut self) -> bool {
        let died = self
            .world
            .death(self.config.colony.life_expectancy)
            .is_some();
        if died {
            self.metrics.increment_counter("deaths");
        }
        died
    }

    /// Checked after each step: colony gone, food exhausted, step budget
    /// spent or shutdown requested.
    pub fn should_stop(&self) -> bool {
        !self.running
            || self.world.is_over()
            || self.max_steps.is_some_and(|max| self.world.tick >= max)
            || self.shutdown.is_shutdown_requested()
    }

    pub fn report(&self) -> RunReport {
        RunReport {
            steps: self.world.tick,
            seed: self.config.world.seed,
            fingerprint: self.config.fingerprint(),
            births: self.metrics.counter("births"),
            deaths: self.metrics.counter("deaths"),
            pickups: self.metrics.counter("pickups"),
            drops: self.metrics.counter("drops"),
            mean_step_us: self.metrics.mean_step_duration().as_micros() as u64,
            stats: self.world.stats(),
        }
    }
}
