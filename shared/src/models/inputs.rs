//! Raw form input model

use serde::{Deserialize, Serialize};

use crate::models::CalculationResult;
use crate::solver;

/// The three text fields of the calculator form, exactly as entered.
///
/// Fields stay raw text until the solver parses them, so the form can hold
/// partial or non-numeric input without losing it. An empty string and an
/// unset field are equivalent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradeInputs {
    /// Percentage already earned in the course before the final exam
    pub current_grade: Option<String>,
    /// Target overall course percentage
    pub desired_grade: Option<String>,
    /// Share of the overall grade contributed by the final exam, as a percentage
    pub final_weight: Option<String>,
}

impl GradeInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all three fields back to unset
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Run the solver against the current field values
    pub fn solve(&self) -> CalculationResult {
        solver::solve(
            self.current_grade.as_deref(),
            self.desired_grade.as_deref(),
            self.final_weight.as_deref(),
        )
    }
}
