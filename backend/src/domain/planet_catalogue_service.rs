//! Planet catalogue domain service.
//!
//! Implements the driving ports on top of a [`PlanetRepository`], turning
//! absence into not-found errors and repository faults into internal errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{
    FuelEstimateQuery, FuelEstimateRequest, PlanetRepository, PlanetRepositoryError,
    PlanetsCommand, PlanetsQuery,
};
use crate::domain::{Error, FuelEstimateError, Planet, PlanetDraft, PlanetId, estimate_fuel_cost};

/// Message returned when a catalogue operation targets an unknown planet.
pub const PLANET_NOT_FOUND: &str = "Planet not found";
/// Message returned when a fuel estimate targets an unknown planet.
pub const TARGET_PLANET_NOT_FOUND: &str = "Target Planet not found";

/// Catalogue service implementing the planet driving ports.
#[derive(Clone)]
pub struct PlanetCatalogueService<R> {
    repository: Arc<R>,
}

impl<R> PlanetCatalogueService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> PlanetCatalogueService<R>
where
    R: PlanetRepository,
{
    fn map_repository_error(err: PlanetRepositoryError) -> Error {
        error!(error = %err, "planet repository failure");
        Error::internal(format!("planet repository error: {err}"))
    }

    fn not_found(id: PlanetId, message: &str) -> Error {
        Error::not_found(message).with_details(json!({ "id": id.get() }))
    }

    fn map_estimate_error(err: FuelEstimateError, planet: &Planet) -> Error {
        match err {
            FuelEstimateError::NonPositiveCrew { crew_capacity } => {
                Error::invalid_request(err.to_string()).with_details(json!({
                    "field": "crew_cap",
                    "value": crew_capacity,
                    "code": "non_positive_crew",
                }))
            }
            FuelEstimateError::ZeroRadius
            | FuelEstimateError::ZeroGravity
            | FuelEstimateError::NonFinite => {
                Error::computation_fault(err.to_string()).with_details(json!({
                    "id": planet.id().get(),
                    "radius": planet.radius(),
                    "mass": planet.mass(),
                    "isTerrestrial": planet.is_terrestrial(),
                }))
            }
        }
    }
}

#[async_trait]
impl<R> PlanetsQuery for PlanetCatalogueService<R>
where
    R: PlanetRepository,
{
    async fn list_planets(&self) -> Result<Vec<Planet>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_planet(&self, id: PlanetId) -> Result<Planet, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::not_found(id, PLANET_NOT_FOUND))
    }
}

#[async_trait]
impl<R> PlanetsCommand for PlanetCatalogueService<R>
where
    R: PlanetRepository,
{
    async fn create_planet(&self, draft: PlanetDraft) -> Result<Planet, Error> {
        let planet = self
            .repository
            .insert(draft)
            .await
            .map_err(Self::map_repository_error)?;
        debug!(planet_id = %planet.id(), "planet created");
        Ok(planet)
    }

    async fn update_planet(&self, id: PlanetId, draft: PlanetDraft) -> Result<Planet, Error> {
        let planet = self
            .repository
            .replace(id, draft)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::not_found(id, PLANET_NOT_FOUND))?;
        debug!(planet_id = %id, "planet replaced");
        Ok(planet)
    }

    async fn delete_planet(&self, id: PlanetId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::not_found(id, PLANET_NOT_FOUND))?;
        debug!(planet_id = %id, "planet deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> FuelEstimateQuery for PlanetCatalogueService<R>
where
    R: PlanetRepository,
{
    async fn estimate_fuel(&self, request: FuelEstimateRequest) -> Result<f64, Error> {
        let planet = self
            .repository
            .find_by_id(request.planet_id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::not_found(request.planet_id, TARGET_PLANET_NOT_FOUND))?;

        estimate_fuel_cost(&planet, request.crew_capacity)
            .map_err(|err| Self::map_estimate_error(err, &planet))
    }
}
