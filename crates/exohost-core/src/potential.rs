//! # Stellar Potential
//!
//! `phi = kappa * 10^(a_met * Z) * max(M, floor)^alpha * exp(-beta * M)`
//!
//! The evaluation order matches the fitted reference bit for bit, so the
//! terms are kept as separate values rather than folded into one expression.

use crate::params::{ModelParameters, MASS_FLOOR};
use serde::{Deserialize, Serialize};

/// The two physical inputs of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StellarInputs {
    /// Stellar mass in solar masses.
    pub stellar_mass: f64,
    /// Metallicity as [Fe/H].
    pub metallicity: f64,
}

impl StellarInputs {
    /// Create a new input pair.
    #[must_use]
    pub fn new(stellar_mass: f64, metallicity: f64) -> Self {
        Self {
            stellar_mass,
            metallicity,
        }
    }

    /// The Sun: one solar mass at solar metallicity.
    #[must_use]
    pub fn solar() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Mass used inside the power term.
    ///
    /// The floor only wins when it is strictly greater, so a NaN mass
    /// passes through unchanged.
    #[must_use]
    pub fn effective_mass(&self) -> f64 {
        if MASS_FLOOR > self.stellar_mass {
            MASS_FLOOR
        } else {
            self.stellar_mass
        }
    }
}

/// The intermediate terms of the stellar potential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialTerms {
    /// `10^(a_met * Z)`
    pub z_term: f64,
    /// `m_eff^alpha * exp(-beta * M)`
    pub m_term: f64,
    /// `kappa * z_term * m_term`
    pub phi: f64,
}

/// `10^(a_met * Z)`
#[must_use]
pub fn metallicity_term(metallicity: f64, params: &ModelParameters) -> f64 {
    10.0_f64.powf(params.a_met * metallicity)
}

/// `max(M, floor)^alpha * exp(-beta * M)`
///
/// The decay uses the raw mass, not the floored one.
#[must_use]
pub fn mass_term(inputs: &StellarInputs, params: &ModelParameters) -> f64 {
    inputs.effective_mass().powf(params.alpha_mass) * (-params.beta_mass * inputs.stellar_mass).exp()
}

/// Compute the stellar potential and its component terms.
#[must_use]
pub fn stellar_potential(inputs: &StellarInputs, params: &ModelParameters) -> PotentialTerms {
    let z_term = metallicity_term(inputs.metallicity, params);
    let m_term = mass_term(inputs, params);
    let phi = params.kappa * z_term * m_term;

    PotentialTerms {
        z_term,
        m_term,
        phi,
    }
}

// =============================================================================
// TESTS
// =============================================================================
