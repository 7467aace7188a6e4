//! # Host Probability Model
//!
//! Ties the stellar potential and the q-exponential together:
//!
//! ```text
//! phi  = kappa * 10^(a_met * Z) * max(M, 1e-5)^alpha * exp(-beta * M)
//! base = max(0, 1 - (1 - q) * phi)
//! P    = 1 - base^(1 / (1 - q))
//! ```
//!
//! A [`Model`] is immutable and cheap to share. Each call to
//! [`Model::evaluate`] is independent of every other call.

use crate::params::{ModelParameters, PUBLISHED};
use crate::percent::{format_percent, Percentage};
use crate::potential::{stellar_potential, StellarInputs};
use crate::tsallis::{q_exp_decay, tsallis_base};
use serde::{Deserialize, Serialize};

/// Every intermediate value of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The inputs as given.
    pub inputs: StellarInputs,
    /// Mass after the floor, as used in the power term.
    pub effective_mass: f64,
    /// `10^(a_met * Z)`
    pub z_term: f64,
    /// `m_eff^alpha * exp(-beta * M)`
    pub m_term: f64,
    /// Stellar potential.
    pub phi: f64,
    /// `1 - (1 - q) * phi` before the clamp.
    pub raw_base: f64,
    /// Base after the clamp.
    pub base: f64,
    /// `base^(1 / (1 - q))`
    pub eq_minus_phi: f64,
    /// `1 - eq_minus_phi`
    pub probability: f64,
}

impl Evaluation {
    /// True if the base was clamped to zero before the power step.
    #[must_use]
    pub fn base_clamped(&self) -> bool {
        self.raw_base <= 0.0
    }

    /// True if the probability is not a finite number.
    ///
    /// This happens when a clamped base meets a negative exponent
    /// (`0^negative = +inf`, so `P = -inf`) or when an input is NaN.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        !self.probability.is_finite()
    }

    /// The probability as a [`Percentage`].
    #[must_use]
    pub fn percentage(&self) -> Percentage {
        Percentage::from_probability(self.probability)
    }

    /// The formatted output string, e.g. `"2.21%"`.
    #[must_use]
    pub fn to_percent_string(&self) -> String {
        format_percent(self.probability)
    }
}

/// The host probability model for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Model {
    params: ModelParameters,
}

impl Model {
    /// Model with the published parameters.
    #[must_use]
    pub fn published() -> Self {
        Self { params: PUBLISHED }
    }

    /// Model with a custom parameter set.
    #[must_use]
    pub fn with_params(params: ModelParameters) -> Self {
        Self { params }
    }

    /// The parameter set in use.
    #[must_use]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Evaluate the model, keeping every intermediate.
    #[must_use]
    pub fn evaluate(&self, inputs: StellarInputs) -> Evaluation {
        let terms = stellar_potential(&inputs, &self.params);
        let base = tsallis_base(terms.phi, self.params.q_index);
        let eq_minus_phi = q_exp_decay(base.value, self.params.q_index);
        let probability = 1.0 - eq_minus_phi;

        Evaluation {
            inputs,
            effective_mass: inputs.effective_mass(),
            z_term: terms.z_term,
            m_term: terms.m_term,
            phi: terms.phi,
            raw_base: base.raw,
            base: base.value,
            eq_minus_phi,
            probability,
        }
    }

    /// Evaluate and return only the probability.
    #[must_use]
    pub fn probability(&self, stellar_mass: f64, metallicity: f64) -> f64 {
        self.evaluate(StellarInputs::new(stellar_mass, metallicity))
            .probability
    }

    /// Evaluate and format, e.g. `"2.21%"`.
    #[must_use]
    pub fn compute(&self, stellar_mass: f64, metallicity: f64) -> String {
        self.evaluate(StellarInputs::new(stellar_mass, metallicity))
            .to_percent_string()
    }
}

// =============================================================================
// TESTS
// =============================================================================
