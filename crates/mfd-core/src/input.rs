//! Operator input parsing and the measurement direction choice set.

use crate::errors::{ErrorInfo, MfdError};

/// Direction labels offered to the operator when selecting where the
/// vibration was measured.
pub const MEASURED_DIRECTIONS: [&str; 3] = ["Axiale", "Radiale", "Axiale et radiale"];

fn input_error(code: &str, message: impl Into<String>) -> MfdError {
    MfdError::Input(ErrorInfo::new(code, message))
}

/// Parses a comma-separated list of measured frequencies.
///
/// Tokens are whitespace-trimmed and empty tokens are skipped, so
/// trailing commas are harmless. Any non-numeric token fails the whole
/// parse: silently dropping a mistyped frequency would produce a
/// misleadingly confident empty diagnosis.
pub fn parse_measured_frequencies(text: &str) -> Result<Vec<f64>, MfdError> {
    let mut frequencies = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| {
            MfdError::Input(
                ErrorInfo::new(
                    "bad-frequency-token",
                    format!("measured frequency `{token}` is not a number"),
                )
                .with_context("token", token)
                .with_hint("expected a comma-separated list such as `50, 100, 120.5`"),
            )
        })?;
        if !value.is_finite() {
            return Err(input_error(
                "non-finite-frequency",
                format!("measured frequency `{token}` is not finite"),
            ));
        }
        frequencies.push(value);
    }
    Ok(frequencies)
}
