//! Driving port for catalogue mutations.

use async_trait::async_trait;

use crate::domain::{Error, Planet, PlanetDraft, PlanetId};

/// Domain use-case port for creating, replacing, and removing planets.
#[async_trait]
pub trait PlanetsCommand: Send + Sync {
    /// Add a planet under a store-assigned identifier.
    async fn create_planet(&self, draft: PlanetDraft) -> Result<Planet, Error>;

    /// Replace all attributes of an existing planet.
    async fn update_planet(&self, id: PlanetId, draft: PlanetDraft) -> Result<Planet, Error>;

    /// Remove a planet from the catalogue.
    async fn delete_planet(&self, id: PlanetId) -> Result<(), Error>;
}
