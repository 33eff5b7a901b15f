//! Planet catalogue service library.
//!
//! Layout follows ports and adapters: [`domain`] holds the catalogue types,
//! the fuel formula, and the port traits; [`inbound`] and [`outbound`] adapt
//! them to HTTP and to the in-memory store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
