//! HTTP client layer for the backend under `/api`.
//!
//! Every function here returns `Result<_, FetchError>` — the layer itself
//! never swallows a failure. Whether an error is absorbed (the leads
//! listing keeps rendering with an empty page) or surfaced (login and CSV
//! import show the message inline) is decided at the call site.

use common::model::auth::ErrorBody;
use gloo_net::http::Response;
use thiserror::Error;

pub mod auth;
pub mod leads;
pub mod token_store;

pub const API_BASE: &str = "/api";

/// Failure of any backend call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status. `message` is the
    /// server-supplied `detail` when present, its status text otherwise.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e),
            other => FetchError::Network(other.to_string()),
        }
    }
}

/// Builds the `Api` error for a non-success response, preferring the
/// FastAPI-style `{"detail": ...}` body over the bare status text.
pub(crate) async fn error_from_response(response: Response) -> FetchError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            detail: Some(detail),
        }) => detail,
        _ => {
            let text = response.status_text();
            if text.is_empty() {
                format!("HTTP {}", status)
            } else {
                text
            }
        }
    };
    FetchError::Api { status, message }
}
