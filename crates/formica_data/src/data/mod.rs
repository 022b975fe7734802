//! Core data structures for the Formica simulation.

pub mod ant;
pub mod cell;
pub mod geometry;
