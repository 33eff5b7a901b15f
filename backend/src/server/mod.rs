//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use planet_catalogue::Trace;
#[cfg(debug_assertions)]
use planet_catalogue::doc::ApiDoc;
use planet_catalogue::domain::reference_catalogue;
use planet_catalogue::inbound::http::fuel_estimate::estimate_fuel;
use planet_catalogue::inbound::http::health::{HealthState, live, ready};
use planet_catalogue::inbound::http::planets::{
    create_planet, delete_planet, get_planet, list_planets, update_planet,
};
use planet_catalogue::inbound::http::state::HttpState;
use planet_catalogue::inbound::http::validation::json_config;
use planet_catalogue::outbound::memory::InMemoryPlanetRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = if config.seed_catalogue {
        InMemoryPlanetRepository::with_planets(reference_catalogue())
    } else {
        InMemoryPlanetRepository::new()
    };
    info!(
        seeded = config.seed_catalogue,
        planets = repository.len(),
        "planet store initialised"
    );
    web::Data::new(HttpState::for_repository(Arc::new(repository)))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(list_planets)
        .service(get_planet)
        .service(create_planet)
        .service(update_planet)
        .service(delete_planet)
        .service(estimate_fuel)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Every worker shares one planet store, so writes through any worker are
/// visible to all of them.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
