//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a running server.

use std::sync::Arc;

use crate::domain::ports::{FuelEstimateQuery, PlanetRepository, PlanetsCommand, PlanetsQuery};
use crate::domain::PlanetCatalogueService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub planets: Arc<dyn PlanetsQuery>,
    pub planets_command: Arc<dyn PlanetsCommand>,
    pub fuel_estimates: Arc<dyn FuelEstimateQuery>,
}

impl HttpState {
    /// Construct state from individual port implementations.
    pub fn new(
        planets: Arc<dyn PlanetsQuery>,
        planets_command: Arc<dyn PlanetsCommand>,
        fuel_estimates: Arc<dyn FuelEstimateQuery>,
    ) -> Self {
        Self {
            planets,
            planets_command,
            fuel_estimates,
        }
    }

    /// Wire every port to one catalogue service over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use planet_catalogue::inbound::http::state::HttpState;
    /// use planet_catalogue::outbound::memory::InMemoryPlanetRepository;
    ///
    /// let state = HttpState::for_repository(Arc::new(InMemoryPlanetRepository::new()));
    /// let _planets = state.planets.clone();
    /// ```
    pub fn for_repository<R>(repository: Arc<R>) -> Self
    where
        R: PlanetRepository + 'static,
    {
        let service = Arc::new(PlanetCatalogueService::new(repository));
        Self::new(service.clone(), service.clone(), service)
    }
}
