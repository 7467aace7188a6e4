//! Request and response types for the HTTP API.

use exohost_core::{Evaluation, MASS_SLIDER, METALLICITY_SLIDER};
use serde::{Deserialize, Serialize};

/// Form body of `POST /calculate`.
///
/// Fields stay as text so blank or malformed values reach the model's
/// own parser instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateForm {
    #[serde(default)]
    pub stellar_mass: String,
    #[serde(default)]
    pub metallicity: String,
}

/// JSON body of `POST /api/probability`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProbabilityRequest {
    pub stellar_mass: f64,
    pub metallicity: f64,
}

/// Query string of `POST /api/probability`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProbabilityQuery {
    #[serde(default)]
    pub detailed: bool,
}

/// JSON response of `POST /api/probability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbabilityResponse {
    /// Formatted output, identical to what the form displays.
    pub probability: String,
    /// `P * 100`; `null` when singular.
    pub percent: Option<f64>,
    /// True if the probability is not finite.
    pub singular: bool,
    /// True if both inputs lie within the slider ranges.
    pub within_domain: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
}

impl ProbabilityResponse {
    /// Build a response from an evaluation.
    pub fn from_evaluation(eval: &Evaluation, detailed: bool) -> Self {
        let singular = eval.is_singular();
        Self {
            probability: eval.to_percent_string(),
            percent: (!singular).then(|| eval.percentage().percent()),
            singular,
            within_domain: MASS_SLIDER.contains(eval.inputs.stellar_mass)
                && METALLICITY_SLIDER.contains(eval.inputs.metallicity),
            evaluation: detailed.then_some(*eval),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
