use super::cell::PheromoneChannel;
use super::geometry::{Direction, Location};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Behavioral mode of an ant, derived from what it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntMode {
    /// Empty-handed, looking for food.
    Foraging,
    /// Carrying food back to the nest.
    Homing,
}

impl AntMode {
    /// Channel an ant in this mode marks while walking.
    #[must_use]
    pub fn deposit_channel(self) -> PheromoneChannel {
        match self {
            AntMode::Foraging => PheromoneChannel::Colony,
            AntMode::Homing => PheromoneChannel::Food,
        }
    }

    /// Channel an ant in this mode follows.
    #[must_use]
    pub fn scent_channel(self) -> PheromoneChannel {
        match self {
            AntMode::Foraging => PheromoneChannel::Food,
            AntMode::Homing => PheromoneChannel::Colony,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ant {
    pub id: Uuid,
    pub location: Location,
    pub direction: Direction,
    pub carried_food: u32,
    /// Cells visited since the last pickup or drop.
    pub path: HashSet<Location>,
    pub age: u64,
}

impl Ant {
    #[must_use]
    pub fn new(id: Uuid, location: Location, direction: Direction) -> Self {
        Self {
            id,
            location,
            direction,
            carried_food: 0,
            path: HashSet::new(),
            age: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> AntMode {
        if self.carried_food > 0 {
            AntMode::Homing
        } else {
            AntMode::Foraging
        }
    }

    #[must_use]
    pub fn has_visited(&self, location: Location) -> bool {
        self.path.contains(&location)
    }

    /// Starts a new goal: forget the walked path and face the way back.
    pub fn turn_back(&mut self) {
        self.path.clear();
        self.direction = self.direction.reversed();
    }

    pub fn turn(&mut self, steps: i32) {
        self.direction = self.direction.rotate(steps);
    }
}
