//! # Exohost Core
//!
//! Probability that a star hosts a detectable exoplanetary system, from its
//! mass and metallicity, via a Tsallis q-exponential of a stellar potential.
//!
//! ```rust
//! assert_eq!(exohost_core::compute(1.0, 0.0), "2.21%");
//! ```
//!
//! ## Layout
//!
//! - [`params`]: the five fitted constants
//! - [`potential`]: the stellar potential `phi`
//! - [`tsallis`]: the q-exponential and its base clamp
//! - [`model`]: full evaluation with every intermediate
//! - [`percent`]: output formatting
//! - [`domain`]: slider ranges of the form
//! - [`error`]: parsing of text inputs
//!
//! Nothing here does I/O or fails on an `f64`.

pub mod domain;
pub mod error;
pub mod model;
pub mod params;
pub mod percent;
pub mod potential;
pub mod tsallis;

pub use domain::{SliderSpec, MASS_SLIDER, METALLICITY_SLIDER};
pub use error::{parse_input, InputError};
pub use model::{Evaluation, Model};
pub use params::{ModelParameters, MASS_FLOOR, PUBLISHED};
pub use percent::{format_percent, Percentage};
pub use potential::{PotentialTerms, StellarInputs};
pub use tsallis::{q_exp_decay, q_exponent, q_exponential, tsallis_base, TsallisBase};

/// Host probability as a percentage string, e.g. `"2.21%"`.
///
/// Uses the published parameters. Total over `f64`: out-of-domain inputs are
/// evaluated as-is, and a singular result renders as `"-inf%"` or `"nan%"`.
#[must_use]
pub fn compute(stellar_mass: f64, metallicity: f64) -> String {
    Model::published().compute(stellar_mass, metallicity)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_outputs() {
        assert_eq!(compute(1.0, 0.0), "2.21%");
        assert_eq!(compute(0.1, -1.0), "0.15%");
        assert_eq!(compute(2.5, 0.5), "0.66%");
        assert_eq!(compute(0.1, 0.5), "5.78%");
        assert_eq!(compute(1.5, -0.5), "0.32%");
        assert_eq!(compute(1.0, 5.0), "99.99%");
    }

    #[test]
    fn deterministic() {
        assert_eq!(compute(0.85, -0.2), compute(0.85, -0.2));
    }

    #[test]
    fn out_of_domain_mass_does_not_fail() {
        assert_eq!(compute(0.0, 0.0), "0.00%");
        assert_eq!(compute(-1.0, 0.0), "0.00%");
    }
}
