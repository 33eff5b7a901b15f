//! Planet catalogue HTTP handlers.
//!
//! ```text
//! GET    /planets
//! GET    /planets/{id}
//! POST   /planet
//! PUT    /planet/{id}
//! DELETE /planet/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Planet, PlanetDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_planet_id;

/// Message returned after a successful delete.
pub const PLANET_DELETED: &str = "Planet deleted successfully";

/// Request payload describing a planet.
///
/// Any `id` supplied by the client is accepted and ignored; the store assigns
/// identifiers on create and the path decides them on update.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PlanetRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 7)]
    pub id: Option<i64>,
    #[schema(example = "Pluto")]
    pub name: String,
    #[schema(example = "Farthest Planet")]
    pub description: String,
    #[schema(example = 299_792_458)]
    pub dist_from_earth: i64,
    #[schema(example = 300)]
    pub radius: i64,
    #[schema(example = 300_000)]
    pub mass: i64,
    pub is_terrestrial: bool,
}

impl From<PlanetRequest> for PlanetDraft {
    fn from(value: PlanetRequest) -> Self {
        let PlanetRequest {
            id: _,
            name,
            description,
            dist_from_earth,
            radius,
            mass,
            is_terrestrial,
        } = value;
        Self {
            name,
            description,
            distance_from_earth: dist_from_earth,
            radius,
            mass,
            is_terrestrial,
        }
    }
}

/// Response payload for a stored planet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PlanetResponse {
    #[schema(example = 0)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub dist_from_earth: i64,
    pub radius: i64,
    pub mass: i64,
    pub is_terrestrial: bool,
}

impl From<Planet> for PlanetResponse {
    fn from(value: Planet) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_owned(),
            description: value.description().to_owned(),
            dist_from_earth: value.distance_from_earth(),
            radius: value.radius(),
            mass: value.mass(),
            is_terrestrial: value.is_terrestrial(),
        }
    }
}

/// Plain confirmation message.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Planet deleted successfully")]
    pub message: String,
}

/// List every planet in insertion order.
#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "Planets in insertion order", body = [PlanetResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "listPlanets"
)]
#[get("/planets")]
pub async fn list_planets(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PlanetResponse>>> {
    let planets = state.planets.list_planets().await?;
    Ok(web::Json(
        planets.into_iter().map(PlanetResponse::from).collect(),
    ))
}

/// Fetch one planet by identifier.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(("id" = String, Path, description = "Integer planet identifier")),
    responses(
        (status = 200, description = "Planet", body = PlanetResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Planet not found", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "getPlanet"
)]
#[get("/planets/{id}")]
pub async fn get_planet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PlanetResponse>> {
    let id = parse_planet_id(&path, "id")?;
    let planet = state.planets.get_planet(id).await?;
    Ok(web::Json(PlanetResponse::from(planet)))
}

/// Add a planet under a store-assigned identifier.
#[utoipa::path(
    post,
    path = "/planet",
    request_body = PlanetRequest,
    responses(
        (status = 201, description = "Created planet", body = PlanetResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "createPlanet"
)]
#[post("/planet")]
pub async fn create_planet(
    state: web::Data<HttpState>,
    payload: web::Json<PlanetRequest>,
) -> ApiResult<HttpResponse> {
    let planet = state
        .planets_command
        .create_planet(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(PlanetResponse::from(planet)))
}

/// Replace every attribute of an existing planet.
///
/// The identifier in the path wins over any identifier in the body. The
/// target is looked up before the body is inspected, so an unknown planet is
/// reported as not found even when the body is malformed.
#[utoipa::path(
    put,
    path = "/planet/{id}",
    params(("id" = String, Path, description = "Integer planet identifier")),
    request_body = PlanetRequest,
    responses(
        (status = 200, description = "Updated planet", body = PlanetResponse),
        (status = 400, description = "Bad identifier or malformed body", body = ErrorSchema),
        (status = 404, description = "Planet not found", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "updatePlanet"
)]
#[put("/planet/{id}")]
pub async fn update_planet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Result<web::Json<PlanetRequest>, actix_web::Error>,
) -> actix_web::Result<web::Json<PlanetResponse>> {
    let id = parse_planet_id(&path, "id")?;
    state.planets.get_planet(id).await?;
    let draft = payload?.into_inner().into();
    let planet = state.planets_command.update_planet(id, draft).await?;
    Ok(web::Json(PlanetResponse::from(planet)))
}

/// Remove a planet from the catalogue.
#[utoipa::path(
    delete,
    path = "/planet/{id}",
    params(("id" = String, Path, description = "Integer planet identifier")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Planet not found", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "deletePlanet"
)]
#[delete("/planet/{id}")]
pub async fn delete_planet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_planet_id(&path, "id")?;
    state.planets_command.delete_planet(id).await?;
    Ok(web::Json(MessageResponse {
        message: PLANET_DELETED.to_owned(),
    }))
}
