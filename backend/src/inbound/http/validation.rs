//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures (malformed JSON bodies, non-integer path segments) are
//! converted into [`Error::invalid_request`] so clients always receive the
//! standard error envelope with a 400 status.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;
use tracing::warn;

use crate::domain::{Error, PlanetId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidInteger,
    InvalidJson,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInteger => "invalid_integer",
            Self::InvalidJson => "invalid_json",
        }
    }
}

/// Parse a raw path segment into a [`PlanetId`].
///
/// # Errors
/// Returns an invalid-request error naming the field and the rejected value.
pub(crate) fn parse_planet_id(raw: &str, field: &'static str) -> Result<PlanetId, Error> {
    raw.parse::<PlanetId>().map_err(|err| {
        Error::invalid_request(format!("{field} must be an integer: {err}")).with_details(json!({
            "field": field,
            "value": raw,
            "code": ValidationCode::InvalidInteger.as_str(),
        }))
    })
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = %req.path(), "rejected request body");
    Error::invalid_request(err.to_string())
        .with_details(json!({
            "field": "body",
            "code": ValidationCode::InvalidJson.as_str(),
        }))
        .into()
}

/// JSON extractor configuration mapping decode failures into domain errors.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
