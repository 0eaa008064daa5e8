//! Energy calculation endpoint
//!
//! `POST /api/calculate` is the single transport entry point into the
//! engine: validate the raw payload, run the pure pipeline, return the
//! profile at full precision. Rounding to whole calories happens in the
//! frontend at display time.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use calorie_calculator_engine::{energy, validation, CalculationRequest, EnergyProfile};
use tracing::debug;

/// Create calculation routes
pub fn calculate_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate_energy))
        // Form frontends historically posted with a trailing slash
        .route("/calculate/", post(calculate_energy))
}

/// POST /api/calculate - Compute BMR, TDEE, and calorie goal targets
async fn calculate_energy(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> ApiResult<Json<EnergyProfile>> {
    // Malformed bodies get the same structured envelope as validation errors
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let input = validation::validate(&req).map_err(ApiError::Validation)?;

    let profile = energy::evaluate(&input);

    debug!(
        age = input.age,
        sex = ?input.sex,
        activity = input.activity_level.description(),
        bmr = profile.bmr,
        tdee = profile.tdee,
        "Calculated energy profile"
    );

    Ok(Json(profile))
}
