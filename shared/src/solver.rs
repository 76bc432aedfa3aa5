//! The grade solver: parse, validate, compute.
//!
//! One pure, total function over the three form fields. Every input
//! combination maps to exactly one [`CalculationResult`] shape; nothing here
//! panics or returns early with a partial answer.

use crate::models::{CalculationResult, ComputedResult, Interpretation};
use crate::validation::validate_inputs;

/// Parse one raw text field into a percentage.
///
/// Accepts a comma as the decimal separator ("72,5" parses as 72.5). Unset,
/// empty, unparseable, and non-finite inputs all collapse to `None`: the
/// solver only distinguishes "a valid number" from "not available yet".
pub fn parse_percentage(text: Option<&str>) -> Option<f64> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    let value: f64 = text.replace(',', ".").parse().ok()?;
    value.is_finite().then_some(value)
}

/// Round to 2 decimal places (half away from zero) for display
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the minimum final exam score needed to reach the desired overall
/// grade.
///
/// Grading model: `desired = current * (1 - w) + required * w` where `w` is
/// the final weight as a fraction. Returns `NotReady` while any field is
/// missing, `Invalid` with all range violations, or `Computed` with the
/// score, its interpretation, and a step-by-step derivation trace.
pub fn solve(
    current: Option<&str>,
    desired: Option<&str>,
    weight: Option<&str>,
) -> CalculationResult {
    let (Some(current), Some(desired), Some(weight)) = (
        parse_percentage(current),
        parse_percentage(desired),
        parse_percentage(weight),
    ) else {
        return CalculationResult::NotReady;
    };

    let errors = validate_inputs(current, desired, weight);
    if !errors.is_empty() {
        return CalculationResult::Invalid { errors };
    }

    let w = weight / 100.0;
    let non_final_weight = 1.0 - w;
    let required_final = (desired - current * non_final_weight) / w;
    let required_final_rounded = round_to_hundredths(required_final);

    // Classify on the rounded value, so the bucket matches what is displayed
    let interpretation = if required_final_rounded <= 0.0 {
        Interpretation::AlreadySecured
    } else if required_final_rounded > 100.0 {
        Interpretation::Unreachable
    } else {
        Interpretation::Required
    };

    let steps = vec![
        "Formula: desired = current * (1 - w) + required * w".to_string(),
        "Rearranged: required = (desired - current * (1 - w)) / w".to_string(),
        format!("Inputs: current = {current}%, desired = {desired}%, weight = {weight}% (w = {w})"),
        format!("Non-final weight: 1 - {w} = {non_final_weight}"),
        format!("required = ({desired} - {current} * {non_final_weight}) / {w} = {required_final}"),
        format!("Required final exam score (rounded): {required_final_rounded:.2}%"),
    ];

    CalculationResult::Computed(ComputedResult {
        required_final,
        required_final_rounded,
        interpretation,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentage_period() {
        assert_eq!(parse_percentage(Some("72.5")), Some(72.5));
        assert_eq!(parse_percentage(Some("100")), Some(100.0));
    }

    #[test]
    fn test_parse_percentage_comma_separator() {
        assert_eq!(parse_percentage(Some("72,5")), Some(72.5));
        assert_eq!(parse_percentage(Some("0,25")), Some(0.25));
    }

    #[test]
    fn test_parse_percentage_not_available() {
        assert_eq!(parse_percentage(None), None);
        assert_eq!(parse_percentage(Some("")), None);
        assert_eq!(parse_percentage(Some("   ")), None);
        assert_eq!(parse_percentage(Some("abc")), None);
        assert_eq!(parse_percentage(Some("1,000.5")), None);
    }

    #[test]
    fn test_parse_percentage_rejects_non_finite() {
        assert_eq!(parse_percentage(Some("inf")), None);
        assert_eq!(parse_percentage(Some("NaN")), None);
        assert_eq!(parse_percentage(Some("1e400")), None);
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(130.0), 130.0);
        assert_eq!(round_to_hundredths(85.678), 85.68);
        assert_eq!(round_to_hundredths(85.674), 85.67);
        assert_eq!(round_to_hundredths(-0.004), 0.0);
    }
}
