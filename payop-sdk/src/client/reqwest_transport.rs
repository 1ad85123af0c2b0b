//! [`Transport`] backed by `reqwest`.

use reqwest::Client;
use url::Url;

use super::TransportError;
use super::transport::{GatewayRequest, GatewayResponse, Transport};
use crate::config::TransportConfig;

/// Sends requests to the configured API root with a shared
/// `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Build a transport with its own client, applying the configured
    /// timeout.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy). The configured timeout no longer applies.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, TransportError> {
        let url = self.base_url.join(&request.path)?;
        tracing::debug!(method = %request.method, %url, "Payop API request");

        let mut builder = self
            .http
            .request(request.method, url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        Ok(GatewayResponse { status, body })
    }
}
