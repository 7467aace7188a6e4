//! Route handlers.
//!
//! Every handler evaluates the model synchronously; none of them await
//! anything but the request body.

use super::types::{
    CalculateForm, ErrorResponse, HealthResponse, ProbabilityQuery, ProbabilityRequest,
    ProbabilityResponse,
};
use super::AppState;
use crate::page::Page;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use exohost_core::{parse_input, Evaluation, InputError, StellarInputs};

/// `GET /`
pub async fn index() -> Html<String> {
    Html(Page::initial().render())
}

/// `POST /calculate`
pub async fn calculate(State(state): State<AppState>, Form(form): Form<CalculateForm>) -> Response {
    let inputs = match parse_form(&form) {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::debug!(error = %e, "rejected form input");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(Page::with_error(e.to_string()).render()),
            )
                .into_response();
        }
    };

    let eval = evaluate(&state, inputs);
    Html(Page::with_result(inputs.stellar_mass, inputs.metallicity, eval.to_percent_string()).render())
        .into_response()
}

/// `POST /api/probability`
pub async fn probability(
    State(state): State<AppState>,
    Query(query): Query<ProbabilityQuery>,
    payload: Result<Json<ProbabilityRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected json body");
            return (
                rejection.status(),
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    let inputs = StellarInputs::new(request.stellar_mass, request.metallicity);
    let eval = evaluate(&state, inputs);
    Json(ProbabilityResponse::from_evaluation(&eval, query.detailed)).into_response()
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn parse_form(form: &CalculateForm) -> Result<StellarInputs, InputError> {
    let stellar_mass = parse_input("stellar_mass", &form.stellar_mass)?;
    let metallicity = parse_input("metallicity", &form.metallicity)?;
    Ok(StellarInputs::new(stellar_mass, metallicity))
}

fn evaluate(state: &AppState, inputs: StellarInputs) -> Evaluation {
    let eval = state.model.evaluate(inputs);
    if eval.is_singular() {
        tracing::warn!(
            stellar_mass = inputs.stellar_mass,
            metallicity = inputs.metallicity,
            phi = eval.phi,
            base_clamped = eval.base_clamped(),
            "singular probability"
        );
    } else {
        tracing::debug!(
            stellar_mass = inputs.stellar_mass,
            metallicity = inputs.metallicity,
            probability = eval.probability,
            "evaluated"
        );
    }
    eval
}
