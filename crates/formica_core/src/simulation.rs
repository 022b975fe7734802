//! The simulation driver: one discrete step over the whole world.

use crate::behavior::{self, AntAction};
use crate::world::World;
use serde::{Deserialize, Serialize};

/// Per-step tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepParams {
    pub go_straight_probability: f64,
    pub colony_decay_rate: f64,
    pub food_decay_rate: f64,
}

/// Tally of what the ants did during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepReport {
    pub took_food: usize,
    pub dropped_food: usize,
    pub approached: usize,
    pub followed_trail: usize,
    pub explored: usize,
}

impl StepReport {
    fn record(&mut self, action: AntAction) {
        match action {
            AntAction::TookFood => self.took_food += 1,
            AntAction::DroppedFood => self.dropped_food += 1,
            AntAction::Approached => self.approached += 1,
            AntAction::FollowedTrail => self.followed_trail += 1,
            AntAction::Explored => self.explored += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.took_food + self.dropped_food + self.approached + self.followed_trail + self.explored
    }
}

impl World {
    /// Advances the simulation by one step.
    ///
    /// Ants act strictly in population order, so a trail laid by one ant is
    /// visible to every ant after it in the same step. Evaporation runs once
    /// all ants have acted.
    pub fn step(&mut self, params: &StepParams) -> StepReport {
        let mut report = StepReport::default();

        for idx in 0..self.ants.len() {
            if let Some(mut ctx) = self.ant_context(idx) {
                report.record(behavior::act(&mut ctx, params.go_straight_probability));
            }
        }

        self.evaporate(params.colony_decay_rate, params.food_decay_rate);
        self.tick += 1;

        tracing::trace!(tick = self.tick, ?report, "Step complete");
        report
    }

    /// Lowers every live marker's lifespan by its channel's rate.
    pub fn evaporate(&mut self, colony_decay_rate: f64, food_decay_rate: f64) {
        self.grid.evaporate(colony_decay_rate, food_decay_rate);
    }
}
