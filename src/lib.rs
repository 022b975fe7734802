//! Hosting driver for the Formica ant colony simulation.
//!
//! The engine lives in `formica_core`; this crate loads configuration,
//! schedules steps, births and deaths, and reports on the run.

pub mod app;
pub mod model;
