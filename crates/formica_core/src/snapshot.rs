use crate::world::World;
use formica_data::{AntMode, Cell, Direction, Location};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PopulationStats {
    pub tick: u64,
    pub ants: usize,
    pub foraging: usize,
    pub homing: usize,
    pub carried_food: u64,
    pub food_quantity: u64,
    pub nest_food_quantity: u64,
    pub field_food_quantity: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AntSnapshot {
    pub id: Uuid,
    pub location: Location,
    pub direction: Direction,
    pub carried_food: u32,
    pub age: u64,
    pub mode: AntMode,
}

/// Read-only copy of everything a renderer needs.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: u16,
    pub height: u16,
    pub nest: Location,
    pub cells: Vec<Cell>,
    pub ants: Vec<AntSnapshot>,
    pub stats: PopulationStats,
}

impl WorldSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl World {
    #[must_use]
    pub fn stats(&self) -> PopulationStats {
        let homing = self
            .ants
            .iter()
            .filter(|a| a.mode() == AntMode::Homing)
            .count();
        PopulationStats {
            tick: self.tick,
            ants: self.ants.len(),
            foraging: self.ants.len() - homing,
            homing,
            carried_food: self.carried_food(),
            food_quantity: self.food_quantity,
            nest_food_quantity: self.nest_food_quantity,
            field_food_quantity: self.field_food_quantity(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            width: self.grid.width,
            height: self.grid.height,
            nest: self.nest,
            cells: self.grid.cells.clone(),
            ants: self
                .ants
                .iter()
                .map(|a| AntSnapshot {
                    id: a.id,
                    location: a.location,
                    direction: a.direction,
                    carried_food: a.carried_food,
                    age: a.age,
                    mode: a.mode(),
                })
                .collect(),
            stats: self.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_split_by_mode() {
        let mut world = World::with_seed((4, 4), Location::new(0, 0), 10, 9).unwrap();
        world.birth(1, None, None);
        world.birth(1, None, None);
        world.ants[1].carried_food = 2;
        world.ants[1].location = Location::new(1, 1);
        world.food_quantity = 2;

        let stats = world.stats();
        assert_eq!(stats.ants, 2);
        assert_eq!(stats.foraging, 1);
        assert_eq!(stats.homing, 1);
        assert_eq!(stats.carried_food, 2);
        assert_eq!(stats.nest_food_quantity, 8);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut world = World::with_seed((3, 2), Location::new(1, 1), 5, 9).unwrap();
        world.birth(5, None, Some(Direction::EAST));
        let snapshot = world.snapshot();
        assert_eq!(snapshot.cells.len(), 6);
        assert_eq!(snapshot.ants[0].mode, AntMode::Foraging);

        let json = snapshot.to_json().unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.nest, Location::new(1, 1));
        assert_eq!(back.stats, snapshot.stats);
    }
}
