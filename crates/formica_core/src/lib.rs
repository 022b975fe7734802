//! # Formica Core
//!
//! The simulation engine for Formica, an ant colony foraging on a toroidal
//! grid by laying and following pheromone trails.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Torus-wrapped grid of cells holding food and two decaying pheromones
//! - Motion primitives (trail marking, exploration, trail following)
//! - The foraging / homing decision policy of each ant
//! - The step driver with evaporation, plus food placement, birth and death
//! - Configuration, metrics collection and structured logging
//!
//! ## Architecture
//!
//! `World` owns every cell and ant. A step runs each ant's turn in
//! population order through an `AntContext` split out of the world, then
//! evaporates pheromones once. Randomness comes from a seedable ChaCha
//! generator held by the world, so seeded runs are reproducible.
//!
//! ## Example
//!
//! ```
//! use formica_core::{StepParams, World};
//! use formica_data::{Direction, Location};
//!
//! let mut world = World::with_seed((20, 20), Location::new(10, 10), 10, 42).unwrap();
//! world.place_food(5, 3);
//! world.birth(5, Some(10), Some(Direction::NORTH));
//!
//! let params = StepParams {
//!     go_straight_probability: 0.9,
//!     colony_decay_rate: 0.005,
//!     food_decay_rate: 0.01,
//! };
//! let report = world.step(&params);
//! assert_eq!(report.total(), 1);
//! ```

/// Per-ant decision policy (foraging and homing)
pub mod behavior;
/// Configuration management for simulation parameters
pub mod config;
/// Error types for world construction
pub mod error;
/// Torus-wrapped cell grid
pub mod grid;
/// Food placement, birth and death
pub mod lifecycle;
/// Performance metrics collection and structured logging
pub mod metrics;
/// Movement, trail marking and exploration
pub mod motion;
/// The per-step simulation driver
pub mod simulation;
/// Read-only world snapshots for renderers and reports
pub mod snapshot;
/// World state and per-ant borrow splitting
pub mod world;

pub use behavior::AntAction;
pub use config::AppConfig;
pub use error::WorldError;
pub use grid::Grid;
pub use lifecycle::FoodPlacement;
pub use metrics::{init_logging, Metrics};
pub use simulation::{StepParams, StepReport};
pub use snapshot::{PopulationStats, WorldSnapshot};
pub use world::{AntContext, World};
