//! Population dynamics: food placement, birth and death.
//!
//! These run outside the per-ant step loop on their own cadence. They touch
//! the ant collection and the food counters directly, so callers driving
//! them from several timers must serialize the calls.

use crate::world::World;
use formica_data::{Ant, Direction, Location};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Outcome of a [`World::place_food`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoodPlacement {
    /// Units that landed on field cells.
    pub placed: u64,
    /// Units whose drop point was the nest.
    pub folded_into_nest: u64,
}

impl World {
    /// Drops `cardinality` piles of `quantity` food on uniformly random
    /// cells. Piles may stack; a pile landing on the nest goes straight into
    /// the nest store.
    pub fn place_food(&mut self, cardinality: usize, quantity: u32) -> FoodPlacement {
        let mut placement = FoodPlacement::default();
        let (width, height) = self.size();

        for _ in 0..cardinality {
            let location = Location::new(
                self.rng.gen_range(0..width),
                self.rng.gen_range(0..height),
            );
            if location == self.nest {
                self.nest_food_quantity += u64::from(quantity);
                placement.folded_into_nest += u64::from(quantity);
            } else {
                let cell = self.grid.get_mut(location);
                cell.food_quantity = cell.food_quantity.saturating_add(quantity);
                placement.placed += u64::from(quantity);
            }
        }
        self.food_quantity += placement.placed;

        tracing::debug!(
            piles = cardinality,
            placed = placement.placed,
            folded = placement.folded_into_nest,
            "Food placed"
        );
        placement
    }

    /// Hatches an ant at the nest if the colony is below `max_population`
    /// and the nest can pay `food_cost`. Without an explicit `direction` the
    /// newborn faces a random heading.
    ///
    /// Returns the id of the newborn, or `None` when nothing happened.
    pub fn birth(
        &mut self,
        food_cost: u64,
        max_population: Option<usize>,
        direction: Option<Direction>,
    ) -> Option<Uuid> {
        if max_population.is_some_and(|max| self.ants.len() >= max) {
            return None;
        }
        if self.nest_food_quantity < food_cost {
            return None;
        }

        let direction = direction
            .unwrap_or_else(|| Direction::new(self.rng.gen_range(0..i32::from(Direction::COUNT))));
        let id = Uuid::from_u128(self.rng.gen::<u128>());

        self.nest_food_quantity -= food_cost;
        self.ants.push(Ant::new(id, self.nest, direction));

        tracing::debug!(%id, direction = direction.index(), population = self.ants.len(), "Ant born");
        Some(id)
    }

    /// Removes one ant, picked uniformly among those older than
    /// `life_expectancy`. Its load is dropped where it stands: into the nest
    /// store at the nest, onto the cell anywhere else.
    pub fn death(&mut self, life_expectancy: u64) -> Option<Ant> {
        let ancients: Vec<usize> = self
            .ants
            .iter()
            .enumerate()
            .filter(|(_, ant)| ant.age > life_expectancy)
            .map(|(idx, _)| idx)
            .collect();

        let &idx = ancients.choose(&mut self.rng)?;
        let dying = self.ants.remove(idx);
        let load = u64::from(dying.carried_food);

        if dying.location == self.nest {
            self.nest_food_quantity += load;
            self.food_quantity = self.food_quantity.saturating_sub(load);
        } else {
            let cell = self.grid.get_mut(dying.location);
            cell.food_quantity = cell.food_quantity.saturating_add(dying.carried_food);
        }

        tracing::debug!(
            id = %dying.id,
            age = dying.age,
            dropped = load,
            population = self.ants.len(),
            "Ant died"
        );
        Some(dying)
    }
}
