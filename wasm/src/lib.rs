//! WebAssembly module for the Final Grade Calculator
//!
//! Provides client-side computation for:
//! - Required final exam score
//! - Input validation with accumulated messages
//! - Display clamping of the headline score
//!
//! The UI owns nothing but raw text fields; every change re-solves and
//! re-renders from the JSON result returned here.

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::solver::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"final-grade-calculator wasm initialized".into());
}

/// Solve for the required final exam score from the three raw text fields.
///
/// Empty strings count as unset. Returns the full `CalculationResult` as
/// JSON, tagged with `status`: `not_ready`, `invalid`, or `computed`.
#[wasm_bindgen]
pub fn solve_grade(current: &str, desired: &str, weight: &str) -> String {
    let result = solve(Some(current), Some(desired), Some(weight));
    to_json(&result)
}

/// Clamp a rounded required score for headline display.
/// Negative scores render as 0; the signed value stays in the result.
#[wasm_bindgen]
pub fn display_required_score(rounded_score: f64) -> f64 {
    rounded_score.max(0.0)
}

/// The calculator form state: three optional text fields and a reset action.
///
/// Holds no derived numeric state; `solve` recomputes everything from the
/// raw text on every call.
#[wasm_bindgen]
#[derive(Default)]
pub struct GradeForm {
    inputs: GradeInputs,
}

#[wasm_bindgen]
impl GradeForm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_grade(&mut self, text: &str) {
        self.inputs.current_grade = non_empty(text);
    }

    pub fn set_desired_grade(&mut self, text: &str) {
        self.inputs.desired_grade = non_empty(text);
    }

    pub fn set_final_weight(&mut self, text: &str) {
        self.inputs.final_weight = non_empty(text);
    }

    /// Clear all three fields back to unset
    pub fn reset(&mut self) {
        self.inputs.reset();
    }

    /// Solve against the current field values, as JSON
    pub fn solve(&self) -> String {
        to_json(&self.inputs.solve())
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn to_json(result: &CalculationResult) -> String {
    // CalculationResult serialization cannot fail, but the boundary should
    // still never throw
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"status":"not_ready"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_grade_computed() {
        let json = solve_grade("80", "90", "20");
        assert!(json.contains(r#""status":"computed""#));
        assert!(json.contains(r#""interpretation":"unreachable""#));
    }

    #[test]
    fn test_solve_grade_not_ready_on_empty_field() {
        let json = solve_grade("", "90", "20");
        assert_eq!(json, r#"{"status":"not_ready"}"#);
    }

    #[test]
    fn test_solve_grade_invalid_carries_messages() {
        let json = solve_grade("150", "90", "20");
        assert!(json.contains(r#""status":"invalid""#));
        assert!(json.contains("Current grade must be between 0 and 100."));
    }

    #[test]
    fn test_display_required_score_clamps_negatives() {
        assert_eq!(display_required_score(-20.0), 0.0);
        assert_eq!(display_required_score(0.0), 0.0);
        assert_eq!(display_required_score(85.5), 85.5);
    }

    #[test]
    fn test_form_tracks_fields_and_resets() {
        let mut form = GradeForm::new();
        form.set_current_grade("80");
        form.set_desired_grade("90");
        form.set_final_weight("50");
        assert!(form.solve().contains(r#""status":"computed""#));

        form.reset();
        assert_eq!(form.solve(), r#"{"status":"not_ready"}"#);
    }

    #[test]
    fn test_form_treats_blank_text_as_unset() {
        let mut form = GradeForm::new();
        form.set_current_grade("80");
        form.set_desired_grade("  ");
        form.set_final_weight("50");
        assert_eq!(form.solve(), r#"{"status":"not_ready"}"#);
    }
}
