//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`PlanetsQuery`, `PlanetsCommand`, `FuelEstimateQuery`) are
//! what inbound adapters call. The driven [`PlanetRepository`] port is what
//! storage adapters implement; its errors are strongly typed so the service
//! maps them into predictable domain errors.

mod fuel_estimate_query;
mod planet_repository;
mod planets_command;
mod planets_query;

pub use fuel_estimate_query::{FuelEstimateQuery, FuelEstimateRequest};
#[cfg(test)]
pub use planet_repository::MockPlanetRepository;
pub use planet_repository::{PlanetRepository, PlanetRepositoryError};
pub use planets_command::PlanetsCommand;
pub use planets_query::PlanetsQuery;
