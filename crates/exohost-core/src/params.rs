//! # Model Parameters
//!
//! The five fitted constants of the host probability model.
//!
//! The published set is a compile-time constant. Other sets can be built
//! as plain values, which is how the clamp branch of the q-exponential is
//! reached in tests.

/// Lower bound applied to the mass inside the power term.
///
/// Guards against `0^alpha` and negative bases. The exponential decay
/// term still sees the unclamped mass.
pub const MASS_FLOOR: f64 = 1e-5;

/// Fitted parameters of the stellar potential and the q-exponential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// Tsallis non-extensivity index `q`.
    pub q_index: f64,
    /// Overall scale of the stellar potential.
    pub kappa: f64,
    /// Metallicity exponent: `10^(a_met * Z)`.
    pub a_met: f64,
    /// Mass power-law exponent.
    pub alpha_mass: f64,
    /// Mass exponential decay rate.
    pub beta_mass: f64,
}

/// The parameter set fitted on the Kepler DR25 stellar sample.
pub const PUBLISHED: ModelParameters = ModelParameters {
    q_index: 1.8591,
    kappa: 0.2121,
    a_met: 1.0789,
    alpha_mass: 0.9825,
    beta_mass: 2.2413,
};

impl Default for ModelParameters {
    fn default() -> Self {
        PUBLISHED
    }
}

impl ModelParameters {
    /// Replace `kappa`, keeping the other constants.
    #[must_use]
    pub fn with_kappa(mut self, kappa: f64) -> Self {
        self.kappa = kappa;
        self
    }

    /// Replace `q_index`, keeping the other constants.
    #[must_use]
    pub fn with_q_index(mut self, q_index: f64) -> Self {
        self.q_index = q_index;
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
