//! Driving port for reading the planet catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Planet, PlanetId};

/// Domain use-case port for catalogue reads.
#[async_trait]
pub trait PlanetsQuery: Send + Sync {
    /// Return every planet in listing order.
    async fn list_planets(&self) -> Result<Vec<Planet>, Error>;

    /// Return the planet with the given identifier or a not-found error.
    async fn get_planet(&self, id: PlanetId) -> Result<Planet, Error>;
}
