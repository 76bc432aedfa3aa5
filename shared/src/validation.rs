//! Range validation for parsed percentage inputs

use crate::models::ValidationError;

/// Validate the current grade is in [0, 100]
pub fn validate_current_grade(value: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::CurrentGradeOutOfRange)
    }
}

/// Validate the desired grade is in [0, 100]
pub fn validate_desired_grade(value: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::DesiredGradeOutOfRange)
    }
}

/// Validate the final exam weight is in (0, 100].
/// Strictly positive because the weight is a divisor in the computation.
pub fn validate_final_weight(value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value <= 100.0 {
        Ok(())
    } else {
        Err(ValidationError::FinalWeightOutOfRange)
    }
}

/// Run all three range checks and collect every violation, in the fixed
/// order current, desired, weight. No short-circuiting.
pub fn validate_inputs(current: f64, desired: f64, weight: f64) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if let Err(e) = validate_current_grade(current) {
        errors.push(e);
    }
    if let Err(e) = validate_desired_grade(desired) {
        errors.push(e);
    }
    if let Err(e) = validate_final_weight(weight) {
        errors.push(e);
    }
    errors
}
