//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod fuel_estimate;
pub mod health;
pub mod planets;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
