use serde::{Deserialize, Serialize};

/// The two independent trail signals a cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PheromoneChannel {
    /// Laid by ants looking for food; marks the way back to the nest.
    Colony,
    /// Laid by ants carrying food; marks the way back to the food.
    Food,
}

/// A decaying trail marker.
///
/// `strength` is the path length at which the marker was laid (smaller is
/// better), `lifespan` is the remaining intensity. A marker whose lifespan
/// reached zero is absent whatever its strength says.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pheromone {
    pub strength: u32,
    pub lifespan: f64,
}

impl Pheromone {
    #[must_use]
    pub const fn new(strength: u32, lifespan: f64) -> Self {
        Self { strength, lifespan }
    }

    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.lifespan > 0.0
    }

    /// Present and carrying a usable path indicator.
    #[inline]
    #[must_use]
    pub fn is_trail(&self) -> bool {
        self.strength > 0 && self.is_present()
    }

    /// Offers a marker laid after `path_len` steps.
    ///
    /// Accepted when nothing is present or the stored path is not shorter;
    /// an accepted marker refreshes the lifespan by one unit. Returns whether
    /// the cell was written.
    pub fn offer(&mut self, path_len: u32) -> bool {
        if self.is_present() && self.strength < path_len {
            return false;
        }
        self.strength = path_len;
        self.lifespan += 1.0;
        true
    }

    pub fn evaporate(&mut self, rate: f64) {
        if self.is_present() {
            self.lifespan = (self.lifespan - rate).max(0.0);
        }
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub food_quantity: u32,
    pub colony_pheromone: Pheromone,
    pub food_pheromone: Pheromone,
}

impl Cell {
    #[must_use]
    pub fn with_food(food_quantity: u32) -> Self {
        Self {
            food_quantity,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn has_food(&self) -> bool {
        self.food_quantity > 0
    }

    #[inline]
    #[must_use]
    pub fn pheromone(&self, channel: PheromoneChannel) -> &Pheromone {
        match channel {
            PheromoneChannel::Colony => &self.colony_pheromone,
            PheromoneChannel::Food => &self.food_pheromone,
        }
    }

    #[inline]
    pub fn pheromone_mut(&mut self, channel: PheromoneChannel) -> &mut Pheromone {
        match channel {
            PheromoneChannel::Colony => &mut self.colony_pheromone,
            PheromoneChannel::Food => &mut self.food_pheromone,
        }
    }

    pub fn evaporate(&mut self, colony_rate: f64, food_rate: f64) {
        self.colony_pheromone.evaporate(colony_rate);
        self.food_pheromone.evaporate(food_rate);
    }
}
