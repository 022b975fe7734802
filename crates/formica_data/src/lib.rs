//! Plain data structures shared by the Formica simulation crates.
//!
//! Nothing in here knows about the grid size or the random source; the
//! engine in `formica_core` owns those and drives these values.

pub mod data;

pub use data::ant::{Ant, AntMode};
pub use data::cell::{Cell, Pheromone, PheromoneChannel};
pub use data::geometry::{Direction, Location};
