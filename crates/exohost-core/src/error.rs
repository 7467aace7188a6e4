//! # Input Errors
//!
//! The model never fails on an `f64`. Text coming from a form or a command
//! line can, and this is the only place it does.

use thiserror::Error;

/// Failure to turn user text into a model input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The field was missing or blank.
    #[error("{field} is empty")]
    Empty { field: String },

    /// The field was not a number.
    #[error("{field} is not a number: {value:?}")]
    NotNumeric { field: String, value: String },
}

/// Parse a numeric field, ignoring surrounding whitespace.
///
/// Accepts everything `f64::from_str` does, including `inf` and `nan`.
pub fn parse_input(field: &str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty {
            field: field.to_string(),
        });
    }
    trimmed.parse::<f64>().map_err(|_| InputError::NotNumeric {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_input("m", "1.0"), Ok(1.0));
        assert_eq!(parse_input("m", "  -0.35\n"), Ok(-0.35));
        assert_eq!(parse_input("m", "1e-2"), Ok(0.01));
    }

    #[test]
    fn accepts_non_finite_spellings() {
        assert_eq!(parse_input("m", "inf"), Ok(f64::INFINITY));
        assert!(parse_input("m", "NaN").map(f64::is_nan).unwrap_or(false));
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(
            parse_input("stellar_mass", "   "),
            Err(InputError::Empty {
                field: "stellar_mass".to_string()
            })
        );
    }

    #[test]
    fn rejects_text() {
        let err = parse_input("metallicity", "solar");
        assert!(matches!(err, Err(InputError::NotNumeric { .. })));
        let msg = err.map(|_| String::new()).unwrap_or_else(|e| e.to_string());
        assert_eq!(msg, "metallicity is not a number: \"solar\"");
    }
}
