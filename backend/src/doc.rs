//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every planet catalogue endpoint, the fuel estimator,
//! and the health probes, plus the request and response schemas they use.
//! Domain error types are documented through the wrappers in
//! [`crate::inbound::http::schemas`] so the domain stays free of utoipa.
//!
//! The generated document backs Swagger UI (debug builds) and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::fuel_estimate::{FuelEstimateBody, FuelEstimateResponse};
use crate::inbound::http::planets::{MessageResponse, PlanetRequest, PlanetResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Planet catalogue API",
        description = "CRUD over a planet catalogue plus a fuel cost estimator.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::planets::list_planets,
        crate::inbound::http::planets::get_planet,
        crate::inbound::http::planets::create_planet,
        crate::inbound::http::planets::update_planet,
        crate::inbound::http::planets::delete_planet,
        crate::inbound::http::fuel_estimate::estimate_fuel,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PlanetRequest,
        PlanetResponse,
        MessageResponse,
        FuelEstimateBody,
        FuelEstimateResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "planets", description = "Planet catalogue maintenance"),
        (name = "fuel", description = "Fuel cost estimation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, &["code", "message", "traceId", "details"])]
    #[case("PlanetResponse", &["id", "name", "dist_from_earth", "is_terrestrial"])]
    #[case("FuelEstimateBody", &["id", "crew_cap"])]
    #[case("FuelEstimateResponse", &["Fuel Cost Estimation"])]
    fn schemas_expose_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("registered schema");

        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/planets")]
    #[case("/planets/{id}")]
    #[case("/planet")]
    #[case("/planet/{id}")]
    #[case("/fuelestimate")]
    #[case("/health/ready")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}
