//! Roster request errors
//!
//! Every variant renders as the same opaque 500; the detail, with its source
//! location, only goes to the log.

use roster_cache::CacheError;
use roster_upstream::UpstreamError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum RosterError {
    /// Board id or token not configured
    #[error("Missing credential: {name} {location}")]
    MissingCredential {
        name: &'static str,
        location: ErrorLocation,
    },

    /// Board or identity service failure
    #[error("Upstream failure: {source} {location}")]
    Upstream {
        #[source]
        source: UpstreamError,
        location: ErrorLocation,
    },

    /// Cache store failure
    #[error("Cache failure: {source} {location}")]
    Cache {
        #[source]
        source: CacheError,
        location: ErrorLocation,
    },
}

impl RosterError {
    #[track_caller]
    pub fn missing_credential(name: &'static str) -> Self {
        RosterError::MissingCredential {
            name,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_BODY).into_response()
    }
}

impl From<UpstreamError> for RosterError {
    #[track_caller]
    fn from(source: UpstreamError) -> Self {
        RosterError::Upstream {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CacheError> for RosterError {
    #[track_caller]
    fn from(source: CacheError) -> Self {
        RosterError::Cache {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
