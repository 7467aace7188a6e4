//! # Percent Formatting
//!
//! Probabilities render as `P * 100` with two decimals and a trailing `%`.
//! Non-finite values keep the reference spellings `inf`, `-inf` and `nan`.

use std::fmt;

/// A probability in `[0, 1]` (nominally) displayed as a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage(f64);

impl Percentage {
    /// Wrap a probability.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        Self(probability)
    }

    /// The wrapped probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.0
    }

    /// The probability scaled to percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = self.percent();
        if percent.is_nan() {
            // std spells it "NaN"
            f.write_str("nan%")
        } else {
            write!(f, "{:.2}%", percent)
        }
    }
}

/// Format a probability as `"<P*100 to 2 decimals>%"`.
#[must_use]
pub fn format_percent(probability: f64) -> String {
    Percentage::from_probability(probability).to_string()
}

// =============================================================================
// TESTS
// =============================================================================
