use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors talking to the board or identity services
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned status {status} {location}")]
    Status {
        service: &'static str,
        status: u16,
        location: ErrorLocation,
    },

    #[error("Invalid URL {url}: {message} {location}")]
    Url {
        url: String,
        message: String,
        location: ErrorLocation,
    },
}

impl UpstreamError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        UpstreamError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(service: &'static str, status: reqwest::StatusCode) -> Self {
        UpstreamError::Status {
            service,
            status: status.as_u16(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url(url: &str, message: impl Into<String>) -> Self {
        UpstreamError::Url {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
