use thiserror::Error;

use joinup_boundary::ErrorResponse;

mod public;
mod util;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

/// Stand-in for the detail text of an error response that carries none.
pub const DEFAULT_ERROR_DETAIL: &str = "An error occurred";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// Transport failure or undecodable response body.
    #[error("{0}")]
    Fetch(String),

    /// Structured non-2xx response from the backend.
    #[error("{}", .0.detail.as_deref().unwrap_or(DEFAULT_ERROR_DETAIL))]
    Api(ErrorResponse),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<ErrorResponse> for Error {
    fn from(err: ErrorResponse) -> Self {
        Self::Api(err)
    }
}
