//! The transport seam between [`GatewayClient`](super::GatewayClient) and
//! the network.

use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use serde_json::Value;

use super::TransportError;

/// One outbound request, with `path` relative to the API root.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl GatewayRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            headers: HeaderMap::new(),
            body: Some(body),
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: &str) -> Result<Self, TransportError> {
        let mut value = HeaderValue::from_str(value)?;
        value.set_sensitive(true);
        self.headers.insert(name, value);
        Ok(self)
    }
}

/// Raw response as received. Status checks and JSON decoding happen in the
/// client, not the transport.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Sends a [`GatewayRequest`] and returns whatever came back.
///
/// Implementations should not retry and should not treat non-2xx statuses
/// as errors.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, TransportError>;
}
