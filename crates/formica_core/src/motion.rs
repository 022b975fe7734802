//! Motion primitives: relative neighbors, forward movement with trail
//! marking, randomized exploration and trail following.

use crate::world::AntContext;
use formica_data::{Direction, Location, PheromoneChannel};
use rand::Rng;

/// How an ant chose its move when it did not reach a goal cell directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Moved towards the shortest trail ahead.
    FollowedTrail,
    /// No usable trail ahead; wandered.
    Explored,
}

impl AntContext<'_> {
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Location {
        self.grid.neighbor(self.ant.location, direction)
    }

    /// Neighbor at `steps` clockwise rotations from the current heading.
    #[inline]
    pub fn relative(&self, steps: i32) -> Location {
        self.neighbor(self.ant.direction.rotate(steps))
    }

    pub fn ahead(&self) -> Location {
        self.relative(0)
    }

    pub fn ahead_left(&self) -> Location {
        self.relative(-1)
    }

    pub fn ahead_right(&self) -> Location {
        self.relative(1)
    }

    pub fn left(&self) -> Location {
        self.relative(-2)
    }

    pub fn right(&self) -> Location {
        self.relative(2)
    }

    pub fn back(&self) -> Location {
        self.relative(4)
    }

    #[inline]
    pub fn is_nest(&self, location: Location) -> bool {
        location == self.nest
    }
}

/// Rotates the ant; negative steps turn counter-clockwise.
pub fn turn(ctx: &mut AntContext<'_>, steps: i32) {
    ctx.ant.turn(steps);
}

/// Faces `direction`, then moves one cell.
pub fn turn_towards(ctx: &mut AntContext<'_>, direction: Direction) {
    let steps = ctx.ant.direction.steps_to(direction);
    turn(ctx, steps);
    forward(ctx);
}

/// Moves the ant one cell ahead.
///
/// The cell being left is marked on the channel of the ant's mode unless the
/// ant already walked through it during the current goal. The marker holds
/// the length of the path so far and never replaces a shorter live one.
/// Returns whether a marker was written.
pub fn forward(ctx: &mut AntContext<'_>) -> bool {
    let here = ctx.ant.location;
    let mut marked = false;

    if !ctx.ant.has_visited(here) {
        let path_len = u32::try_from(ctx.ant.path.len()).unwrap_or(u32::MAX);
        let channel = ctx.ant.mode().deposit_channel();
        marked = ctx.grid.get_mut(here).pheromone_mut(channel).offer(path_len);
    }

    ctx.ant.path.insert(here);
    ctx.ant.location = ctx.ahead();
    marked
}

/// Wanders while avoiding the cells of the current path.
///
/// Goes straight with probability `go_straight_probability` if the cell
/// ahead is fresh. Otherwise prefers ahead-left for half of the remaining
/// probability mass, then ahead-right, and when both are already visited
/// picks a random turn (or none) and steps regardless.
pub fn random_step(ctx: &mut AntContext<'_>, go_straight_probability: f64) {
    let roll: f64 = ctx.rng.gen();

    if roll < go_straight_probability && !ctx.ant.has_visited(ctx.ahead()) {
        forward(ctx);
        return;
    }

    let left_threshold = go_straight_probability + (1.0 - go_straight_probability) / 2.0;
    if roll < left_threshold && !ctx.ant.has_visited(ctx.ahead_left()) {
        turn(ctx, -1);
    } else if !ctx.ant.has_visited(ctx.ahead_right()) {
        turn(ctx, 1);
    } else {
        let steps = match ctx.rng.gen_range(0..3) {
            0 => -1,
            1 => 1,
            _ => 0,
        };
        turn(ctx, steps);
    }
    forward(ctx);
}

/// Follows the shortest live trail among the three cells ahead on `channel`,
/// falling back to [`random_step`] when none qualifies.
///
/// Cells are scanned ahead-left, ahead, ahead-right; ties keep the first.
pub fn fitness_step(
    ctx: &mut AntContext<'_>,
    channel: PheromoneChannel,
    go_straight_probability: f64,
) -> StepKind {
    let mut best: Option<(u32, Direction)> = None;

    for steps in -1..=1 {
        let direction = ctx.ant.direction.rotate(steps);
        let pheromone = *ctx.grid.get(ctx.neighbor(direction)).pheromone(channel);
        if !pheromone.is_trail() {
            continue;
        }
        if best.map_or(true, |(strength, _)| pheromone.strength < strength) {
            best = Some((pheromone.strength, direction));
        }
    }

    match best {
        Some((_, direction)) => {
            turn_towards(ctx, direction);
            StepKind::FollowedTrail
        }
        None => {
            random_step(ctx, go_straight_probability);
            StepKind::Explored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;
    use formica_data::{Ant, Pheromone};
    use uuid::Uuid;

    fn world_with_ant(direction: Direction) -> World {
        let mut world = World::with_seed((5, 5), Location::new(2, 2), 0, 11).unwrap();
        world
            .ants
            .push(Ant::new(Uuid::nil(), Location::new(2, 2), direction));
        world
    }

    #[test]
    fn test_relative_neighbors() {
        let mut world = world_with_ant(Direction::NORTH);
        let ctx = world.ant_context(0).unwrap();
        assert_eq!(ctx.ahead(), Location::new(2, 1));
        assert_eq!(ctx.ahead_left(), Location::new(1, 1));
        assert_eq!(ctx.ahead_right(), Location::new(3, 1));
        assert_eq!(ctx.left(), Location::new(1, 2));
        assert_eq!(ctx.right(), Location::new(3, 2));
        assert_eq!(ctx.back(), Location::new(2, 3));
    }

    #[test]
    fn test_forward_marks_colony_channel_when_foraging() {
        let mut world = world_with_ant(Direction::EAST);
        let mut ctx = world.ant_context(0).unwrap();
        assert!(forward(&mut ctx));
        assert_eq!(ctx.ant.location, Location::new(3, 2));
        assert!(ctx.ant.has_visited(Location::new(2, 2)));

        let left = world.cell(Location::new(2, 2));
        assert_eq!(left.colony_pheromone, Pheromone::new(0, 1.0));
        assert!(!left.food_pheromone.is_present());
    }

    #[test]
    fn test_forward_marks_food_channel_when_homing() {
        let mut world = world_with_ant(Direction::EAST);
        world.ants[0].carried_food = 1;
        world.ants[0].path.insert(Location::new(0, 0));
        let mut ctx = world.ant_context(0).unwrap();
        forward(&mut ctx);

        let left = world.cell(Location::new(2, 2));
        assert_eq!(left.food_pheromone, Pheromone::new(1, 1.0));
        assert!(!left.colony_pheromone.is_present());
    }

    #[test]
    fn test_forward_skips_marking_visited_cell() {
        let mut world = world_with_ant(Direction::EAST);
        world.ants[0].path.insert(Location::new(2, 2));
        let mut ctx = world.ant_context(0).unwrap();
        assert!(!forward(&mut ctx));
        assert_eq!(ctx.ant.location, Location::new(3, 2));
        assert!(!world.cell(Location::new(2, 2)).colony_pheromone.is_present());
    }

    #[test]
    fn test_forward_rejects_longer_path() {
        let mut world = world_with_ant(Direction::EAST);
        world.grid.get_mut(Location::new(2, 2)).colony_pheromone = Pheromone::new(3, 0.8);
        for x in 0..5 {
            world.ants[0].path.insert(Location::new(x, 0));
        }
        let mut ctx = world.ant_context(0).unwrap();
        assert!(!forward(&mut ctx));
        assert_eq!(
            world.cell(Location::new(2, 2)).colony_pheromone,
            Pheromone::new(3, 0.8)
        );
    }

    #[test]
    fn test_random_step_straight_with_certain_probability() {
        let mut world = world_with_ant(Direction::SOUTH);
        let mut ctx = world.ant_context(0).unwrap();
        random_step(&mut ctx, 1.0);
        assert_eq!(ctx.ant.location, Location::new(2, 3));
        assert_eq!(ctx.ant.direction, Direction::SOUTH);
    }

    #[test]
    fn test_random_step_turns_left_when_ahead_visited() {
        let mut world = world_with_ant(Direction::NORTH);
        world.ants[0].path.insert(Location::new(2, 1));
        let mut ctx = world.ant_context(0).unwrap();
        random_step(&mut ctx, 1.0);
        assert_eq!(ctx.ant.direction, Direction::new(7));
        assert_eq!(ctx.ant.location, Location::new(1, 1));
    }

    #[test]
    fn test_random_step_turns_right_when_left_blocked() {
        let mut world = world_with_ant(Direction::NORTH);
        world.ants[0].path.insert(Location::new(2, 1));
        world.ants[0].path.insert(Location::new(1, 1));
        let mut ctx = world.ant_context(0).unwrap();
        random_step(&mut ctx, 1.0);
        assert_eq!(ctx.ant.direction, Direction::new(1));
        assert_eq!(ctx.ant.location, Location::new(3, 1));
    }

    #[test]
    fn test_random_step_moves_when_boxed_in() {
        let mut world = world_with_ant(Direction::NORTH);
        for x in 1..=3 {
            world.ants[0].path.insert(Location::new(x, 1));
        }
        let mut ctx = world.ant_context(0).unwrap();
        random_step(&mut ctx, 0.5);
        let d = ctx.ant.direction.index();
        assert!(d == 7 || d == 0 || d == 1);
        assert_eq!(ctx.ant.location.y, 1);
    }

    #[test]
    fn test_fitness_step_picks_shortest_trail() {
        let mut world = world_with_ant(Direction::NORTH);
        world.grid.get_mut(Location::new(1, 1)).food_pheromone = Pheromone::new(6, 1.0);
        world.grid.get_mut(Location::new(2, 1)).food_pheromone = Pheromone::new(4, 1.0);
        world.grid.get_mut(Location::new(3, 1)).food_pheromone = Pheromone::new(2, 1.0);
        let mut ctx = world.ant_context(0).unwrap();
        let kind = fitness_step(&mut ctx, PheromoneChannel::Food, 0.9);
        assert_eq!(kind, StepKind::FollowedTrail);
        assert_eq!(ctx.ant.direction, Direction::new(1));
        assert_eq!(ctx.ant.location, Location::new(3, 1));
    }

    #[test]
    fn test_fitness_step_ties_keep_scan_order() {
        let mut world = world_with_ant(Direction::NORTH);
        world.grid.get_mut(Location::new(1, 1)).food_pheromone = Pheromone::new(2, 1.0);
        world.grid.get_mut(Location::new(3, 1)).food_pheromone = Pheromone::new(2, 1.0);
        let mut ctx = world.ant_context(0).unwrap();
        fitness_step(&mut ctx, PheromoneChannel::Food, 0.9);
        assert_eq!(ctx.ant.location, Location::new(1, 1));
    }

    #[test]
    fn test_fitness_step_ignores_expired_and_zero_trails() {
        let mut world = world_with_ant(Direction::NORTH);
        world.grid.get_mut(Location::new(1, 1)).colony_pheromone = Pheromone::new(1, 0.0);
        world.grid.get_mut(Location::new(3, 1)).colony_pheromone = Pheromone::new(0, 3.0);
        let mut ctx = world.ant_context(0).unwrap();
        let kind = fitness_step(&mut ctx, PheromoneChannel::Colony, 1.0);
        assert_eq!(kind, StepKind::Explored);
        assert_eq!(ctx.ant.location, Location::new(2, 1));
    }
}
