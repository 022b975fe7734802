//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and metrics tracking for monitoring
//! simulation performance and colony health.

use crate::simulation::StepReport;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Steps between two periodic summary log lines.
pub const SUMMARY_INTERVAL: u64 = 1000;

/// Metrics collector for simulation statistics.
pub struct Metrics {
    step_count: AtomicU64,
    ant_count: AtomicU64,
    food_count: AtomicU64,
    nest_food_count: AtomicU64,
    busy_nanos: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_count: AtomicU64::new(0),
            ant_count: AtomicU64::new(0),
            food_count: AtomicU64::new(0),
            nest_food_count: AtomicU64::new(0),
            busy_nanos: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed step with its duration and outcome.
    pub fn record_step(
        &self,
        duration: Duration,
        report: &StepReport,
        ants: usize,
        food: u64,
        nest_food: u64,
    ) {
        self.step_count.fetch_add(1, Ordering::Relaxed);
        self.ant_count.store(ants as u64, Ordering::Relaxed);
        self.food_count.store(food, Ordering::Relaxed);
        self.nest_food_count.store(nest_food, Ordering::Relaxed);
        self.busy_nanos.fetch_add(
            u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX),
            Ordering::Relaxed,
        );
        self.add_to_counter("pickups", report.took_food as u64);
        self.add_to_counter("drops", report.dropped_food as u64);

        let step = self.step_count.load(Ordering::Relaxed);
        if step % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                step = step,
                ants = ants,
                food = food,
                nest_food = nest_food,
                duration_us = duration.as_micros() as u64,
                "Simulation step"
            );
        }
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        self.add_to_counter(name, 1);
    }

    fn add_to_counter(&self, name: &str, amount: u64) {
        if amount == 0 {
            return;
        }
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(amount, Ordering::Relaxed);
    }

    /// Current value of a named counter, zero if never touched.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn ant_count(&self) -> u64 {
        self.ant_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_count(&self) -> u64 {
        self.food_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn nest_food_count(&self) -> u64 {
        self.nest_food_count.load(Ordering::Relaxed)
    }

    /// Mean wall time spent inside `World::step`.
    #[must_use]
    pub fn mean_step_duration(&self) -> Duration {
        let steps = self.step_count();
        if steps == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.busy_nanos.load(Ordering::Relaxed) / steps)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a simulation event.
    pub fn log_event(&self, event_type: &str, details: &str) {
        tracing::info!(
            event_type = event_type,
            details = details,
            "Simulation event"
        );
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG`; defaults to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
