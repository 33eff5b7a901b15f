//! Domain primitives, services, and ports.
//!
//! Purpose: define the planet catalogue types and use-cases independently of
//! HTTP or storage concerns.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - Planet / PlanetDraft / PlanetId — catalogue records.
//! - estimate_fuel_cost — the fuel cost formula.
//! - PlanetCatalogueService — implements the driving ports in [`ports`].

pub mod error;
pub mod fuel;
pub mod planet;
pub mod planet_catalogue_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fuel::{FuelEstimateError, estimate_fuel_cost};
pub use self::planet::{Planet, PlanetDraft, PlanetId, reference_catalogue};
pub use self::planet_catalogue_service::{
    PLANET_NOT_FOUND, PlanetCatalogueService, TARGET_PLANET_NOT_FOUND,
};
pub use self::trace_id::TraceId;

/// Header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
