pub mod report;
pub mod shutdown;
pub mod state;

pub use report::RunReport;
pub use shutdown::ShutdownManager;
pub use state::App;

use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

impl App {
    /// Runs as fast as possible. Births and deaths fire on step counts
    /// derived from the configured delays.
    pub fn run_headless(&mut self) -> RunReport {
        let birth_every = self.config.timing.birth_every_steps();
        let death_every = self.config.timing.death_every_steps();

        loop {
            let tick = self.world.tick;
            if tick % birth_every == 0 {
                self.try_birth();
            }
            self.step_once();
            if self.should_stop() {
                break;
            }
            if tick % death_every == 0 {
                self.try_death();
            }
        }

        self.finish()
    }

    /// Paces steps, births and deaths on their own wall-clock timers.
    ///
    /// All three timers are polled from this one task, so world mutations
    /// never overlap.
    pub async fn run_realtime(&mut self) -> RunReport {
        let timing = self.config.timing.clone();
        let mut step_timer = interval(Duration::from_millis(timing.step_delay_ms));
        let mut birth_timer = interval(Duration::from_millis(timing.birth_delay_ms));
        let mut death_timer = interval(Duration::from_millis(timing.death_delay_ms));
        for timer in [&mut step_timer, &mut birth_timer, &mut death_timer] {
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        loop {
            tokio::select! {
                biased;
                _ = birth_timer.tick() => {
                    self.try_birth();
                }
                _ = step_timer.tick() => {
                    self.step_once();
                    if self.should_stop() {
                        break;
                    }
                }
                _ = death_timer.tick() => {
                    self.try_death();
                }
            }
        }

        self.finish()
    }

    fn finish(&mut self) -> RunReport {
        self.running = false;
        let report = self.report();
        let reason = if self.world.population() == 0 {
            "colony extinct"
        } else if self.world.food_quantity() == 0 {
            "food exhausted"
        } else if self.shutdown.is_shutdown_requested() {
            "interrupted"
        } else {
            "step limit reached"
        };
        self.metrics.log_event("simulation_over", reason);
        tracing::info!(
            steps = report.steps,
            ants = report.stats.ants,
            nest_food = report.stats.nest_food_quantity,
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Simulation finished"
        );
        report
    }
}
