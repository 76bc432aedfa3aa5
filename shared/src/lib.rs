//! Shared types and logic for the Final Grade Calculator
//!
//! This crate contains the grade solver and its result types, shared between
//! the frontend (via WASM) and any other consumer of the calculation.

pub mod models;
pub mod solver;
pub mod validation;

pub use models::*;
pub use solver::*;
pub use validation::*;
