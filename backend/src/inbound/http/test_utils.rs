//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::reference_catalogue;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{fuel_estimate, planets, validation};
use crate::outbound::memory::InMemoryPlanetRepository;

/// HTTP state over a fresh store seeded with the reference catalogue.
pub fn seeded_state() -> HttpState {
    HttpState::for_repository(Arc::new(InMemoryPlanetRepository::with_planets(
        reference_catalogue(),
    )))
}

/// Build an application exposing every catalogue route over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(validation::json_config())
        .wrap(Trace)
        .service(planets::list_planets)
        .service(planets::get_planet)
        .service(planets::create_planet)
        .service(planets::update_planet)
        .service(planets::delete_planet)
        .service(fuel_estimate::estimate_fuel)
}
