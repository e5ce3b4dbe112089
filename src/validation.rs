//! Input validation for throughput requests.
//!
//! Checks the planning parameters before optimization. Detects:
//! - Non-positive or non-finite magnitudes
//! - Margins outside [0, 1]
//! - A zero bay count
//! - Missing or non-positive volumes
//!
//! Also provides the global window pre-check and the parser for the
//! bracketed volume list (`[a, b, c]`) of the input form.

use crate::models::Parameters;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending input field (camelCase, as in request files).
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A magnitude is zero, negative, or not a finite number.
    NotPositive,
    /// A margin lies outside [0, 1].
    MarginOutOfRange,
    /// The bay count is zero.
    InvalidBayCount,
    /// No volume was configured.
    EmptyVolumes,
    /// The volume list could not be parsed.
    MalformedVolumes,
    /// Protocols and travel alone exceed the target time.
    InfeasibleWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates the planning parameters.
///
/// Checks:
/// 1. `targetTime`, `flowRate`, `distance`, `speed`, `protocol1`,
///    `protocol2` are strictly positive real numbers
/// 2. Every margin lies in [0, 1] (bounds included)
/// 3. `numBays` is at least 1
/// 4. At least one volume, each strictly positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_parameters(parameters: &Parameters) -> ValidationResult {
    let mut errors = Vec::new();

    let magnitudes = [
        ("targetTime", parameters.target_time),
        ("flowRate", parameters.flow_rate),
        ("distance", parameters.distance),
        ("speed", parameters.speed),
        ("protocol1", parameters.protocol1),
        ("protocol2", parameters.protocol2),
    ];
    for (field, value) in magnitudes {
        if !is_positive(value) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NotPositive,
                field,
                format!("input should be a strictly positive real number, got {value}"),
            ));
        }
    }

    let margins = [
        ("targetTimeMargin", parameters.target_time_margin),
        ("flowRateMargin", parameters.flow_rate_margin),
        ("speedMargin", parameters.speed_margin),
        ("protocol1Margin", parameters.protocol1_margin),
        ("protocol2Margin", parameters.protocol2_margin),
    ];
    for (field, value) in margins {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MarginOutOfRange,
                field,
                format!("input should be a real number between 0 and 1 (inclusive), got {value}"),
            ));
        }
    }

    if parameters.num_bays == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBayCount,
            "numBays",
            "input should be a strictly positive integer",
        ));
    }

    if parameters.volumes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyVolumes,
            "volumes",
            "at least one truck type volume is required",
        ));
    }
    for (i, &volume) in parameters.volumes.iter().enumerate() {
        if !is_positive(volume) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NotPositive,
                "volumes",
                format!(
                    "volume #{} should be a strictly positive real number, got {volume}",
                    i + 1
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Rejects requests where no truck could ever be processed.
///
/// The fixed part of a cycle (both protocols plus the nominal round
/// trip) must fit in the target time. Loading time and margins are not
/// considered.
pub fn check_window(parameters: &Parameters) -> Result<(), ValidationError> {
    let required = parameters.fixed_overhead();
    if required > parameters.target_time {
        return Err(ValidationError::new(
            ValidationErrorKind::InfeasibleWindow,
            "targetTime",
            format!(
                "protocols and travel take {required:.2} min, exceeding the {:.2} min target time; no truck can be processed",
                parameters.target_time
            ),
        ));
    }
    Ok(())
}

/// Parses a bracketed volume list such as `"[10, 20.5, 0.5]"`.
///
/// Each element must be a plain JSON-style decimal and strictly positive:
/// an integer part without leading zeros (`0` alone is allowed), then an
/// optional fractional part. `.5`, `05`, `1e3` and signs are rejected.
pub fn parse_volumes(text: &str) -> Result<Vec<f64>, ValidationError> {
    let malformed = || {
        ValidationError::new(
            ValidationErrorKind::MalformedVolumes,
            "volumes",
            "input should be written as [a, b, c, ...] where each element is a strictly positive real number",
        )
    };

    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(malformed)?;

    let mut volumes = Vec::new();
    for token in inner.split(',') {
        let token = token.trim();
        if !is_plain_decimal(token) {
            return Err(malformed());
        }
        let volume: f64 = token.parse().map_err(|_| malformed())?;
        if !is_positive(volume) {
            return Err(malformed());
        }
        volumes.push(volume);
    }
    Ok(volumes)
}

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// `(0|[1-9]\d*)(\.\d+)?`
fn is_plain_decimal(token: &str) -> bool {
    let (whole, frac) = match token.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (token, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let whole_ok = digits(whole) && (whole == "0" || !whole.starts_with('0'));
    whole_ok && frac.map_or(true, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Parameters {
        Parameters::new(120.0, vec![10.0, 20.0], 30.0, 2)
            .with_travel(10.0, 60.0)
            .with_protocols(5.0, 5.0)
            .with_uniform_margin(0.1)
    }

    #[test]
    fn test_valid_parameters() {
        assert!(validate_parameters(&valid()).is_ok());
    }

    #[test]
    fn test_margin_bounds_inclusive() {
        assert!(validate_parameters(&valid().with_uniform_margin(0.0)).is_ok());
        assert!(validate_parameters(&valid().with_uniform_margin(1.0)).is_ok());
    }

    #[test]
    fn test_margin_out_of_range() {
        let p = valid().with_speed_margin(1.2).with_flow_rate_margin(-0.1);
        let errors = validate_parameters(&p).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MarginOutOfRange));
        assert!(errors.iter().any(|e| e.field == "speedMargin"));
        assert!(errors.iter().any(|e| e.field == "flowRateMargin"));
    }

    #[test]
    fn test_non_positive_magnitudes() {
        let mut p = valid();
        p.speed = 0.0;
        p.flow_rate = f64::NAN;
        p.distance = -1.0;
        let errors = validate_parameters(&p).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::NotPositive));
    }

    #[test]
    fn test_bay_count() {
        let mut p = valid();
        p.num_bays = 0;
        let errors = validate_parameters(&p).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBayCount);
    }

    #[test]
    fn test_volumes() {
        let mut p = valid();
        p.volumes = vec![];
        let errors = validate_parameters(&p).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyVolumes);

        p.volumes = vec![10.0, 0.0, -3.0];
        let errors = validate_parameters(&p).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("#2"));
    }

    #[test]
    fn test_window_check() {
        // 5 + 5 + 2 * 10 = 30
        let p = Parameters::new(30.0, vec![10.0], 15.0, 1)
            .with_travel(10.0, 60.0)
            .with_protocols(5.0, 5.0);
        assert!(check_window(&p).is_ok());

        let mut tight = p.clone();
        tight.target_time = 29.0;
        let err = check_window(&tight).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InfeasibleWindow);
        assert!(err.message.contains("30.00 min"));
    }

    #[test]
    fn test_parse_volumes() {
        assert_eq!(parse_volumes("[10, 20.5, 0.5]").unwrap(), vec![10.0, 20.5, 0.5]);
        assert_eq!(parse_volumes("[100, 0.05]").unwrap(), vec![100.0, 0.05]);
        assert_eq!(parse_volumes(" [ 7 ] ").unwrap(), vec![7.0]);
        assert_eq!(parse_volumes("[10,10]").unwrap(), vec![10.0, 10.0]);
    }

    #[test]
    fn test_parse_volumes_rejects() {
        let malformed = [
            "10, 20", "[]", "[10,]", "[-5]", "[0]", "[0.0]", "[1e3]", "[10. ]", "[a]", "[1.2.3]",
        ];
        for bad in malformed {
            let err = parse_volumes(bad).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::MalformedVolumes, "{bad}");
        }
    }

    #[test]
    fn test_parse_volumes_rejects_non_json_numbers() {
        for bad in ["[.5]", "[05]", "[1, 007.5]", "[00]", "[+5]"] {
            let err = parse_volumes(bad).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::MalformedVolumes, "{bad}");
        }
    }
}
