//! Domain models for the Final Grade Calculator

mod inputs;
mod result;

pub use inputs::*;
pub use result::*;
