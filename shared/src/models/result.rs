//! Calculation result models

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A range violation on one of the three form fields.
///
/// Violations accumulate; the solver never stops at the first one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Current grade must be between 0 and 100.")]
    CurrentGradeOutOfRange,
    #[error("Desired grade must be between 0 and 100.")]
    DesiredGradeOutOfRange,
    /// The weight divides the computation, so 0 is excluded
    #[error("Final exam weight must be between 0 (exclusive) and 100 (inclusive).")]
    FinalWeightOutOfRange,
}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The UI renders these directly, so serialize the message itself
        serializer.collect_str(self)
    }
}

/// How a computed required score should be read.
///
/// Thresholds are applied to the display-rounded score, not the raw one, so
/// that a borderline raw value like 100.001 lands in the same bucket the user
/// sees on screen.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    /// Rounded score <= 0: the desired grade is already locked in
    AlreadySecured,
    /// Rounded score > 100: the desired grade cannot be reached at this weight
    Unreachable,
    /// Anything in between: this is the score to aim for
    Required,
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interpretation::AlreadySecured => {
                write!(f, "You have already secured your desired grade; any score on the final will do.")
            }
            Interpretation::Unreachable => {
                write!(f, "The desired grade cannot be reached at this final exam weight.")
            }
            Interpretation::Required => {
                write!(f, "This is the score you need on the final exam.")
            }
        }
    }
}

/// A successfully computed required final score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComputedResult {
    /// Exact required score, unrounded and possibly negative or above 100
    pub required_final: f64,
    /// Required score rounded to 2 decimal places for display
    pub required_final_rounded: f64,
    pub interpretation: Interpretation,
    /// Ordered derivation trace, one human-readable line per step
    pub steps: Vec<String>,
}

impl ComputedResult {
    /// Headline number for display: negative scores are floored to 0.
    ///
    /// Presentation rule only; the signed values stay available on the result
    /// for the already-secured interpretation.
    pub fn display_score(&self) -> f64 {
        self.required_final_rounded.max(0.0)
    }
}

/// The outcome of one solver invocation.
///
/// Every input combination maps to exactly one of these three shapes; the
/// solver never panics and never returns errors alongside a computed score.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculationResult {
    /// At least one field is still empty or unparseable; render a neutral
    /// prompt, not an error
    NotReady,
    /// All fields parsed but at least one is out of range
    Invalid { errors: Vec<ValidationError> },
    /// All fields parsed and passed validation
    Computed(ComputedResult),
}

impl CalculationResult {
    pub fn is_computed(&self) -> bool {
        matches!(self, CalculationResult::Computed(_))
    }
}
