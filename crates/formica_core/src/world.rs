//! The world: grid, nest, food counters and the ant population.
//!
//! `World` is the single owner of every cell and ant. Behavior code never
//! holds a free-floating reference to either; it borrows one ant and the
//! shared state through an [`AntContext`] built from the world and an index.

use crate::config::WorldConfig;
use crate::error::{Result, WorldError};
use crate::grid::Grid;
use formica_data::{Ant, Cell, Direction, Location};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct World {
    pub grid: Grid,
    /// Fixed for the lifetime of the simulation.
    pub nest: Location,
    /// Update order for a step; birth appends, death removes in place.
    pub ants: Vec<Ant>,
    /// Food outside the nest, on cells or carried by ants.
    pub food_quantity: u64,
    pub nest_food_quantity: u64,
    /// Completed steps.
    pub tick: u64,
    pub rng: ChaCha8Rng,
}

/// Mutable view of one ant plus the shared state its turn may touch.
pub struct AntContext<'a> {
    pub ant: &'a mut Ant,
    pub grid: &'a mut Grid,
    pub nest: Location,
    pub food_quantity: &'a mut u64,
    pub nest_food_quantity: &'a mut u64,
    pub rng: &'a mut ChaCha8Rng,
}

impl World {
    /// Builds a world whose random source is seeded from the OS.
    pub fn new(size: (u16, u16), nest: Location, initial_nest_food: u64) -> Result<Self> {
        Self::with_rng(size, nest, initial_nest_food, ChaCha8Rng::from_entropy())
    }

    /// Builds a reproducible world.
    pub fn with_seed(
        size: (u16, u16),
        nest: Location,
        initial_nest_food: u64,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(
            size,
            nest,
            initial_nest_food,
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    pub fn with_rng(
        (width, height): (u16, u16),
        nest: Location,
        initial_nest_food: u64,
        rng: ChaCha8Rng,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(WorldError::InvalidSize { width, height });
        }
        if nest.x >= width || nest.y >= height {
            return Err(WorldError::NestOutOfBounds {
                x: nest.x,
                y: nest.y,
                width,
                height,
            });
        }

        tracing::debug!(width, height, nest = %nest, initial_nest_food, "World created");

        Ok(Self {
            grid: Grid::new(width, height),
            nest,
            ants: Vec::new(),
            food_quantity: 0,
            nest_food_quantity: initial_nest_food,
            tick: 0,
            rng,
        })
    }

    /// Builds a world from the `[world]` configuration section.
    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        let size = (config.width, config.height);
        let nest = Location::new(config.nest_x, config.nest_y);
        match config.seed {
            Some(seed) => Self::with_seed(size, nest, config.initial_nest_food, seed),
            None => Self::new(size, nest, config.initial_nest_food),
        }
    }

    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        (self.grid.width, self.grid.height)
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.grid.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.grid.height
    }

    #[must_use]
    pub fn nest(&self) -> Location {
        self.nest
    }

    #[must_use]
    pub fn cell(&self, location: Location) -> &Cell {
        self.grid.get(location)
    }

    #[must_use]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.ants.len()
    }

    #[must_use]
    pub fn food_quantity(&self) -> u64 {
        self.food_quantity
    }

    #[must_use]
    pub fn nest_food_quantity(&self) -> u64 {
        self.nest_food_quantity
    }

    /// Food lying on cells, recomputed from the grid.
    #[must_use]
    pub fn field_food_quantity(&self) -> u64 {
        self.grid
            .iter()
            .filter(|(loc, _)| *loc != self.nest)
            .map(|(_, cell)| u64::from(cell.food_quantity))
            .sum()
    }

    /// Food currently held by ants.
    #[must_use]
    pub fn carried_food(&self) -> u64 {
        self.ants.iter().map(|a| u64::from(a.carried_food)).sum()
    }

    /// True once the colony is extinct or nothing is left to collect.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.ants.is_empty() || self.food_quantity == 0
    }

    /// One step from `location` towards `direction`, wrapped.
    #[must_use]
    pub fn neighbor(&self, location: Location, direction: Direction) -> Location {
        self.grid.neighbor(location, direction)
    }

    /// Splits the world into the borrows one ant's turn needs.
    pub fn ant_context(&mut self, index: usize) -> Option<AntContext<'_>> {
        let World {
            grid,
            nest,
            ants,
            food_quantity,
            nest_food_quantity,
            rng,
            ..
        } = self;
        let ant = ants.get_mut(index)?;
        Some(AntContext {
            ant,
            grid,
            nest: *nest,
            food_quantity,
            nest_food_quantity,
            rng,
        })
    }
}
