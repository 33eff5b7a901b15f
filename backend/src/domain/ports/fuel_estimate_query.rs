//! Driving port for fuel cost estimates.

use async_trait::async_trait;

use crate::domain::{Error, PlanetId};

/// Input for a fuel cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelEstimateRequest {
    pub planet_id: PlanetId,
    pub crew_capacity: i64,
}

/// Domain use-case port for fuel cost estimates.
#[async_trait]
pub trait FuelEstimateQuery: Send + Sync {
    /// Estimate the fuel cost for the requested planet and crew.
    ///
    /// Unknown planets yield a not-found error, non-positive crews an
    /// invalid-request error, and undefined arithmetic a computation fault.
    async fn estimate_fuel(&self, request: FuelEstimateRequest) -> Result<f64, Error>;
}
