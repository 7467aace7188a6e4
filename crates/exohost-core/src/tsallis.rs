//! # Tsallis q-Exponential
//!
//! `exp_q(x) = [1 + (1 - q) x]^(1 / (1 - q))`
//!
//! The model evaluates it at `x = -phi`. A non-positive base is clamped to
//! zero before the power step. For `q > 1` the exponent is negative, so a
//! clamped base yields `0^negative = +inf` under IEEE-754 `powf`. That
//! value is returned as-is; callers detect it through [`TsallisBase::clamped`]
//! or a non-finite result.

/// The base `1 - (1 - q) * phi`, before and after the clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TsallisBase {
    /// Base as computed.
    pub raw: f64,
    /// Base after clamping non-positive values to zero.
    pub value: f64,
    /// True if the clamp fired.
    pub clamped: bool,
}

/// Compute the q-exponential base for the potential `phi`.
#[must_use]
pub fn tsallis_base(phi: f64, q_index: f64) -> TsallisBase {
    let raw = 1.0 - (1.0 - q_index) * phi;
    // NaN compares false and passes through unclamped.
    if raw <= 0.0 {
        TsallisBase {
            raw,
            value: 0.0,
            clamped: true,
        }
    } else {
        TsallisBase {
            raw,
            value: raw,
            clamped: false,
        }
    }
}

/// Exponent of the q-exponential, `1 / (1 - q)`.
///
/// Negative whenever `q > 1`, which is the case for the published set.
#[must_use]
pub fn q_exponent(q_index: f64) -> f64 {
    1.0 / (1.0 - q_index)
}

/// Raise a (clamped) base to `1 / (1 - q)`.
#[must_use]
pub fn q_exp_decay(base: f64, q_index: f64) -> f64 {
    base.powf(q_exponent(q_index))
}

/// The q-exponential `exp_q(x)` with the same clamp as the model.
#[must_use]
pub fn q_exponential(x: f64, q_index: f64) -> f64 {
    let base = 1.0 + (1.0 - q_index) * x;
    let base = if base <= 0.0 { 0.0 } else { base };
    q_exp_decay(base, q_index)
}

// =============================================================================
// TESTS
// =============================================================================
