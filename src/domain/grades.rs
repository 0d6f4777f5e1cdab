//! Grade rules: validation of the four raw inputs and the pass/fail average.

use crate::domain::credentials::is_blank;
use crate::domain::entities::{AverageResult, GradeSet, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Lowest accepted grade.
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade.
pub const MAX_GRADE: f64 = 10.0;
/// An average at or above this passes.
pub const PASS_THRESHOLD: f64 = 6.0;

pub const MSG_REQUIRED: &str = "the first three grades are required";
pub const MSG_NOT_NUMBERS: &str = "all grades must be valid numbers";
pub const MSG_FOURTH_NOT_NUMBER: &str = "grade 4 must be a valid number";
pub const MSG_OUT_OF_RANGE: &str = "grades must be between 0 and 10";

/// Plain decimal: optional sign, digits, optional fraction. No exponent, no `inf`/`NaN`.
static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)$")
        .unwrap_or_else(|error| panic!("decimal regex failed to compile: {error}"))
});

/// Parse a grade entry. Surrounding whitespace is ignored; `.` is the only separator.
///
/// Decimals too large for `f64` come back as infinity and fail the range rule.
pub fn parse_grade(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if !DECIMAL_RE.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn in_range(n: f64) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&n)
}

/// Input filter for a grade field: the edit is kept only if it is empty or numeric.
pub fn is_acceptable_input(raw: &str) -> bool {
    raw.is_empty() || parse_grade(raw).is_some()
}

/// Check three required grades and an optional fourth. First failing rule wins.
pub fn validate_grades(g1: &str, g2: &str, g3: &str, g4: &str) -> ValidationResult {
    let required = [g1, g2, g3];
    if required.iter().any(|g| is_blank(g)) {
        return ValidationResult::invalid(MSG_REQUIRED);
    }

    let parsed: Option<Vec<f64>> = required.iter().map(|g| parse_grade(g)).collect();
    let Some(parsed) = parsed else {
        return ValidationResult::invalid(MSG_NOT_NUMBERS);
    };

    let fourth = if is_blank(g4) {
        None
    } else {
        match parse_grade(g4) {
            Some(n) => Some(n),
            None => return ValidationResult::invalid(MSG_FOURTH_NOT_NUMBER),
        }
    };

    if parsed.iter().any(|&n| !in_range(n)) {
        return ValidationResult::invalid(MSG_OUT_OF_RANGE);
    }
    if fourth.is_some_and(|n| !in_range(n)) {
        return ValidationResult::invalid(MSG_OUT_OF_RANGE);
    }

    ValidationResult::valid()
}

/// Arithmetic mean and verdict. Callers pass grades that already passed `validate_grades`.
pub fn compute_average(grades: &[f64]) -> AverageResult {
    debug_assert!(!grades.is_empty(), "compute_average needs at least one grade");
    debug_assert!(grades.iter().all(|&n| in_range(n)), "grade out of range");

    let average = grades.iter().sum::<f64>() / grades.len() as f64;
    AverageResult {
        average,
        is_passed: average >= PASS_THRESHOLD,
    }
}

impl GradeSet {
    pub fn validate(&self) -> ValidationResult {
        validate_grades(&self.grade1, &self.grade2, &self.grade3, &self.grade4)
    }

    /// Numeric values of the non-blank entries; the fourth only when supplied.
    pub fn parsed(&self) -> Vec<f64> {
        let mut grades: Vec<f64> = [&self.grade1, &self.grade2, &self.grade3]
            .into_iter()
            .filter_map(|g| parse_grade(g))
            .collect();
        if !is_blank(&self.grade4) {
            grades.extend(parse_grade(&self.grade4));
        }
        grades
    }

    /// Validate, then average. The error side carries the failing `ValidationResult`.
    pub fn evaluate(&self) -> Result<AverageResult, ValidationResult> {
        let check = self.validate();
        if !check.is_valid {
            return Err(check);
        }
        Ok(compute_average(&self.parsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_grades_without_fourth() {
        assert!(validate_grades("5", "6", "7", "").is_valid);
        let avg = compute_average(&[5.0, 6.0, 7.0]);
        assert_eq!(avg.average, 6.0);
        assert!(avg.is_passed);
    }

    #[test]
    fn test_missing_third_beats_valid_fourth() {
        let r = validate_grades("5", "6", "", "8");
        assert_eq!(r, ValidationResult::invalid(MSG_REQUIRED));
        let r = validate_grades("5", " ", "7", "");
        assert_eq!(r.message, MSG_REQUIRED);
    }

    #[test]
    fn test_non_numeric_required() {
        let r = validate_grades("5", "abc", "7", "");
        assert_eq!(r.message, MSG_NOT_NUMBERS);
    }

    #[test]
    fn test_non_numeric_checked_before_range() {
        let r = validate_grades("50", "x", "7", "");
        assert_eq!(r.message, MSG_NOT_NUMBERS);
        let r = validate_grades("50", "6", "7", "y");
        assert_eq!(r.message, MSG_FOURTH_NOT_NUMBER);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(validate_grades("5", "11", "7", "").message, MSG_OUT_OF_RANGE);
        assert_eq!(validate_grades("-1", "5", "7", "").message, MSG_OUT_OF_RANGE);
        assert_eq!(validate_grades("5", "6", "7", "10.5").message, MSG_OUT_OF_RANGE);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate_grades("0", "10", "10.0", "0.0").is_valid);
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("7"), Some(7.0));
        assert_eq!(parse_grade(" 7.25 "), Some(7.25));
        assert_eq!(parse_grade("+3"), Some(3.0));
        assert_eq!(parse_grade("-0.5"), Some(-0.5));
        assert_eq!(parse_grade(".5"), Some(0.5));
        assert_eq!(parse_grade("5."), Some(5.0));
        assert_eq!(parse_grade("1e1"), None);
        assert_eq!(parse_grade("NaN"), None);
        assert_eq!(parse_grade("inf"), None);
        assert_eq!(parse_grade("7,5"), None);
        assert_eq!(parse_grade("-"), None);
        assert_eq!(parse_grade(""), None);
    }

    #[test]
    fn test_huge_decimal_is_a_number_out_of_range() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(parse_grade(&huge), Some(f64::INFINITY));
        assert_eq!(validate_grades(&huge, "5", "5", "").message, MSG_OUT_OF_RANGE);
        assert_eq!(validate_grades("5", "5", "5", &huge).message, MSG_OUT_OF_RANGE);
        assert_eq!(
            validate_grades(&format!("-{huge}"), "5", "5", "").message,
            MSG_OUT_OF_RANGE
        );
    }

    #[test]
    fn test_whitespace_fourth_counts_as_blank() {
        assert!(validate_grades("5", "6", "7", "   ").is_valid);
        assert!(validate_grades("5", "6", "7", " \t").is_valid);
        assert_eq!(
            GradeSet::new("5", "6", "7", " \t").parsed(),
            vec![5.0, 6.0, 7.0]
        );
        let avg = GradeSet::new("5", "6", "7", "  ").evaluate().unwrap();
        assert_eq!(avg.average, 6.0);
    }

    #[test]
    fn test_input_filter() {
        assert!(is_acceptable_input(""));
        assert!(is_acceptable_input("8.5"));
        assert!(!is_acceptable_input("8a"));
        assert!(!is_acceptable_input(" "));
    }

    #[test]
    fn test_average_boundaries() {
        let zero = compute_average(&[0.0, 0.0, 0.0]);
        assert_eq!(zero.average, 0.0);
        assert!(!zero.is_passed);

        let six = compute_average(&[6.0, 6.0, 6.0, 6.0]);
        assert_eq!(six.average, 6.0);
        assert!(six.is_passed);

        let below = compute_average(&[5.0, 6.0, 6.9]);
        assert!(!below.is_passed);
    }

    #[test]
    fn test_parsed_includes_fourth_only_when_present() {
        assert_eq!(GradeSet::new("5", "6", "7", "").parsed(), vec![5.0, 6.0, 7.0]);
        assert_eq!(GradeSet::new("5", "6", "7", "8").parsed(), vec![5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_evaluate() {
        let ok = GradeSet::new("4", "8", "9", "3").evaluate().unwrap();
        assert_eq!(ok.average, 6.0);
        assert!(ok.is_passed);

        let err = GradeSet::new("4", "", "9", "").evaluate().unwrap_err();
        assert_eq!(err.message, MSG_REQUIRED);
    }

    #[test]
    fn test_validation_is_repeatable() {
        let a = validate_grades("5", "11", "7", "");
        let b = validate_grades("5", "11", "7", "");
        assert_eq!(a, b);
    }
}
