pub mod macros;

use formica_lib::model::state::{Ant, Direction, Location, Pheromone, PheromoneChannel};
use formica_lib::model::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

type WorldMod = Box<dyn FnOnce(&mut World)>;

#[allow(dead_code)]
pub struct WorldBuilder {
    size: (u16, u16),
    nest: Location,
    nest_food: u64,
    seed: u64,
    mods: Vec<WorldMod>,
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            size: (5, 5),
            nest: Location::new(2, 2),
            nest_food: 0,
            seed: 42,
            mods: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_nest(mut self, x: u16, y: u16) -> Self {
        self.nest = Location::new(x, y);
        self
    }

    pub fn with_nest_food(mut self, quantity: u64) -> Self {
        self.nest_food = quantity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Puts food on a field cell and keeps the world counter in sync.
    pub fn with_food(mut self, x: u16, y: u16, quantity: u32) -> Self {
        self.mods.push(Box::new(move |world| {
            world.grid.get_mut(Location::new(x, y)).food_quantity += quantity;
            world.food_quantity += u64::from(quantity);
        }));
        self
    }

    /// Adds an ant at the nest facing `direction`.
    pub fn with_ant(mut self, direction: Direction) -> Self {
        self.mods.push(Box::new(move |world| {
            let id = ant_id(world.ants.len());
            let nest = world.nest;
            world.ants.push(Ant::new(id, nest, direction));
        }));
        self
    }

    /// Adds an ant anywhere, optionally loaded with food.
    pub fn with_ant_at(mut self, x: u16, y: u16, direction: Direction, carried: u32) -> Self {
        self.mods.push(Box::new(move |world| {
            let id = ant_id(world.ants.len());
            let mut ant = Ant::new(id, Location::new(x, y), direction);
            ant.carried_food = carried;
            world.food_quantity += u64::from(carried);
            world.ants.push(ant);
        }));
        self
    }

    pub fn with_pheromone(
        mut self,
        x: u16,
        y: u16,
        channel: PheromoneChannel,
        pheromone: Pheromone,
    ) -> Self {
        self.mods.push(Box::new(move |world| {
            *world.grid.get_mut(Location::new(x, y)).pheromone_mut(channel) = pheromone;
        }));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::with_rng(
            self.size,
            self.nest,
            self.nest_food,
            ChaCha8Rng::seed_from_u64(self.seed),
        )
        .expect("Failed to create world in test builder");
        for m in self.mods {
            m(&mut world);
        }
        world
    }
}

/// Deterministic ids for builder-made ants.
fn ant_id(n: usize) -> Uuid {
    Uuid::from_u128(n as u128 + 1)
}
