use axum::response::{IntoResponse, Response};
use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Timeout")]
    Timeout,
}

#[cfg_attr(test, mockall::automock)]
pub trait OriginClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn error_string(&self) -> String;
}

impl<T: OriginClientErrorChecker> From<T> for Error {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() || err.is_request() {
            Error::Network(err.error_string())
        } else {
            Error::InvalidRequest(err.error_string())
        }
    }
}

// Transport failures are reported as gateway errors, never as the tunnel fallback.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Error::Network(_) | Error::InvalidRequest(_) => StatusCode::BAD_GATEWAY,
        };

        (status, "Origin request failed").into_response()
    }
}
