//! Per-ant decision policy.
//!
//! An ant either forages (empty-handed) or homes (carrying food). Each turn
//! it first tries to complete its goal in place, then to step straight onto
//! a goal cell it can sense, and only then follows trails or wanders.

use crate::motion::{self, StepKind};
use crate::world::AntContext;
use formica_data::{AntMode, Direction, Location};

/// What an ant did during its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntAction {
    TookFood,
    DroppedFood,
    /// Stepped onto an adjacent goal cell.
    Approached,
    FollowedTrail,
    Explored,
}

impl From<StepKind> for AntAction {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::FollowedTrail => AntAction::FollowedTrail,
            StepKind::Explored => AntAction::Explored,
        }
    }
}

/// Picks up one unit of food from the current cell. The nest never yields
/// food this way.
pub fn take_food(ctx: &mut AntContext<'_>) -> bool {
    let here = ctx.ant.location;
    if ctx.is_nest(here) {
        return false;
    }
    let cell = ctx.grid.get_mut(here);
    if !cell.has_food() {
        return false;
    }
    cell.food_quantity -= 1;
    ctx.ant.carried_food += 1;
    ctx.ant.turn_back();
    true
}

/// Unloads everything the ant carries when it stands on the nest.
pub fn drop_food(ctx: &mut AntContext<'_>) -> bool {
    if !ctx.is_nest(ctx.ant.location) {
        return false;
    }
    let load = u64::from(ctx.ant.carried_food);
    *ctx.nest_food_quantity += load;
    *ctx.food_quantity = ctx.food_quantity.saturating_sub(load);
    ctx.ant.carried_food = 0;
    ctx.ant.turn_back();
    true
}

/// Scans the headings within `spread` steps of the current one and walks
/// onto the first neighbor accepted by `is_goal`.
fn approach<F>(ctx: &mut AntContext<'_>, spread: i32, is_goal: F) -> bool
where
    F: Fn(&AntContext<'_>, Location) -> bool,
{
    let view: &AntContext<'_> = ctx;
    let heading = view.ant.direction;
    let target: Option<Direction> = (-spread..=spread)
        .map(|steps| heading.rotate(steps))
        .find(|&d| is_goal(view, view.neighbor(d)));

    match target {
        Some(direction) => {
            motion::turn_towards(ctx, direction);
            true
        }
        None => false,
    }
}

/// Steps onto food sensed ahead, ahead-left or ahead-right.
pub fn approach_food(ctx: &mut AntContext<'_>) -> bool {
    approach(ctx, 1, |ctx, loc| {
        !ctx.is_nest(loc) && ctx.grid.get(loc).has_food()
    })
}

/// Steps onto the nest when it lies within two rotations of the heading.
pub fn approach_nest(ctx: &mut AntContext<'_>) -> bool {
    approach(ctx, 2, |ctx, loc| ctx.is_nest(loc))
}

fn seek_food(ctx: &mut AntContext<'_>, go_straight_probability: f64) -> AntAction {
    if take_food(ctx) {
        AntAction::TookFood
    } else if approach_food(ctx) {
        AntAction::Approached
    } else {
        let channel = AntMode::Foraging.scent_channel();
        motion::fitness_step(ctx, channel, go_straight_probability).into()
    }
}

fn seek_nest(ctx: &mut AntContext<'_>, go_straight_probability: f64) -> AntAction {
    if drop_food(ctx) {
        AntAction::DroppedFood
    } else if approach_nest(ctx) {
        AntAction::Approached
    } else {
        let channel = AntMode::Homing.scent_channel();
        motion::fitness_step(ctx, channel, go_straight_probability).into()
    }
}

/// Runs one turn for the ant and ages it.
pub fn act(ctx: &mut AntContext<'_>, go_straight_probability: f64) -> AntAction {
    let action = match ctx.ant.mode() {
        AntMode::Foraging => seek_food(ctx, go_straight_probability),
        AntMode::Homing => seek_nest(ctx, go_straight_probability),
    };
    ctx.ant.age += 1;
    action
}
