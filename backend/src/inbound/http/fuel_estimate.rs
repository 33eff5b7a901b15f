//! Fuel cost estimate HTTP handler.
//!
//! ```text
//! POST /fuelestimate
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::domain::PlanetId;
use crate::domain::ports::FuelEstimateRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload naming the target planet and crew size.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
pub struct FuelEstimateBody {
    /// Target planet identifier.
    #[schema(example = 0)]
    pub id: i64,
    /// Number of crew members; must be positive.
    #[schema(example = 1)]
    pub crew_cap: i64,
}

impl From<FuelEstimateBody> for FuelEstimateRequest {
    fn from(value: FuelEstimateBody) -> Self {
        Self {
            planet_id: PlanetId::new(value.id),
            crew_capacity: value.crew_cap,
        }
    }
}

/// Response payload carrying the rounded estimate.
///
/// Whole estimates are written as JSON integers (`26981321`, not
/// `26981321.0`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct FuelEstimateResponse {
    #[serde(rename = "Fuel Cost Estimation", serialize_with = "serialize_whole_number")]
    #[schema(example = 26_981_321.0)]
    pub fuel_cost_estimation: f64,
}

/// 2^63, the first magnitude outside the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn serialize_whole_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < I64_LIMIT {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the value is integral and inside the i64 range"
        )]
        let whole = *value as i64;
        serializer.serialize_i64(whole)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Estimate the fuel cost of reaching a planet.
#[utoipa::path(
    post,
    path = "/fuelestimate",
    request_body = FuelEstimateBody,
    responses(
        (status = 200, description = "Rounded fuel cost estimate", body = FuelEstimateResponse),
        (status = 400, description = "Malformed body or non-positive crew", body = ErrorSchema),
        (status = 404, description = "Target planet not found", body = ErrorSchema),
        (status = 422, description = "Estimate undefined for this planet", body = ErrorSchema)
    ),
    tags = ["fuel"],
    operation_id = "estimateFuel"
)]
#[post("/fuelestimate")]
pub async fn estimate_fuel(
    state: web::Data<HttpState>,
    payload: web::Json<FuelEstimateBody>,
) -> ApiResult<web::Json<FuelEstimateResponse>> {
    let fuel_cost_estimation = state
        .fuel_estimates
        .estimate_fuel(payload.into_inner().into())
        .await?;
    Ok(web::Json(FuelEstimateResponse {
        fuel_cost_estimation,
    }))
}
