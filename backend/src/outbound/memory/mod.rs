//! Process-local adapters that keep state in memory for the life of the
//! server.

mod planet_store;

pub use planet_store::InMemoryPlanetRepository;
