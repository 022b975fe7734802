use crate::model::snapshot::PopulationStats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary printed when a run ends.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub steps: u64,
    pub seed: Option<u64>,
    pub fingerprint: String,
    pub births: u64,
    pub deaths: u64,
    pub pickups: u64,
    pub drops: u64,
    pub mean_step_us: u64,
    pub stats: PopulationStats,
}

impl RunReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Steps: {} | Ants: {} | Nest food: {} | Food left: {} | Births: {} | Deaths: {}",
            self.steps,
            self.stats.ants,
            self.stats.nest_food_quantity,
            self.stats.food_quantity,
            self.births,
            self.deaths
        )
    }
}
