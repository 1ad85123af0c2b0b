//! HTTP client for the Payop API.
//!
//! [`GatewayClient`] works over any [`Transport`]. The `reqwest`-backed
//! [`ReqwestTransport`] is gated behind the `client` cargo feature so
//! crates that only need signing and the wire types do not pull in
//! `reqwest`.

mod gateway;
#[cfg(feature = "client")]
mod reqwest_transport;
mod transport;

pub use gateway::GatewayClient;
#[cfg(feature = "client")]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{GatewayRequest, GatewayResponse, Transport};

use http::StatusCode;

use crate::objects::ProtocolError;
use crate::signature::SignatureError;

/// [`GatewayClient`] over the default `reqwest` transport.
#[cfg(feature = "client")]
pub type PayopClient = GatewayClient<ReqwestTransport>;

/// Errors produced by [`GatewayClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request did not produce a usable JSON response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response is valid JSON but lacks an expected field.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The order cannot be signed. Nothing was sent.
    #[error("validation error: {0}")]
    Validation(#[from] SignatureError),

    /// An identifier cannot be used as a path segment. Nothing was sent.
    #[error("validation error: `{0}` is not a valid identifier")]
    InvalidId(String),
}

/// Failures between sending a request and decoding its JSON body.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Network-level failure (DNS, TLS, connection reset, timeout, …).
    #[error("http error: {0}")]
    Http(Box<dyn std::error::Error + Send + Sync>),

    /// The request path could not be joined onto the base URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// A header value contains characters HTTP does not allow.
    #[error("invalid header value: {0}")]
    Header(#[from] http::header::InvalidHeaderValue),

    /// The gateway returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body could not be decoded as JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(Box::new(value))
    }
}
