//! The Payop gateway client.
//!
//! Every operation maps to exactly one request. Nothing is retried and
//! every failure is returned to the caller as is.

use http::header::AUTHORIZATION;
use serde::Serialize;
use serde_json::{Map, Value};

use super::transport::{GatewayRequest, GatewayResponse, Transport};
use super::{ClientError, TransportError};
use crate::config::{Credentials, SessionConfig};
use crate::objects::{
    self, Card, CardTokenRequest, CheckoutRequest, CreateInvoiceRequest, Customer,
    INVOICE_LANGUAGE, Order, Payer,
};

/// Typed client for the Payop API.
///
/// Holds the merchant [`Credentials`] and a [`SessionConfig`]. The session
/// setters return `&mut Self` so they chain, and their values stay in
/// effect for every later call until overwritten:
///
/// ```ignore
/// let invoice_id = client
///     .set_payment_method(381)
///     .set_invoice_result_url("https://shop.example/ok")
///     .set_invoice_fail_path("https://shop.example/fail")
///     .create_invoice(&order, &payer)
///     .await?;
/// ```
///
/// The session is plain data owned by this instance. Use one client per
/// logical session, or wrap it in a lock, when sharing across tasks.
#[derive(Debug, Clone)]
pub struct GatewayClient<T> {
    transport: T,
    credentials: Credentials,
    session: SessionConfig,
}

#[cfg(feature = "client")]
impl GatewayClient<super::ReqwestTransport> {
    /// Create a client for the production API with default settings.
    pub fn new(credentials: Credentials) -> Result<Self, TransportError> {
        Self::with_config(credentials, &crate::config::TransportConfig::default())
    }

    /// Create a client with a custom base URL or timeout.
    pub fn with_config(
        credentials: Credentials,
        config: &crate::config::TransportConfig,
    ) -> Result<Self, TransportError> {
        let transport = super::ReqwestTransport::new(config)?;
        Ok(Self::with_transport(credentials, transport))
    }
}

impl<T: Transport> GatewayClient<T> {
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            transport,
            credentials,
            session: SessionConfig::default(),
        }
    }

    /// Replace the whole session at once.
    pub fn with_session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_payment_method(&mut self, id: u32) -> &mut Self {
        self.session.payment_method = id;
        self
    }

    pub fn set_currency(&mut self, code: impl Into<String>) -> &mut Self {
        self.session.currency = code.into();
        self
    }

    pub fn set_check_status_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.session.check_status_url = url.into();
        self
    }

    pub fn set_invoice_result_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.session.invoice_result_url = url.into();
        self
    }

    pub fn set_invoice_fail_path(&mut self, url: impl Into<String>) -> &mut Self {
        self.session.invoice_fail_path = url.into();
        self
    }

    /// `POST invoices/create` – create an invoice with empty metadata.
    ///
    /// Returns the invoice identifier.
    pub async fn create_invoice(&self, order: &Order, payer: &Payer) -> Result<String, ClientError> {
        self.create_invoice_with_metadata(order, payer, &Map::new())
            .await
    }

    /// `POST invoices/create` – create an invoice carrying `metadata`.
    ///
    /// The order is signed before anything is sent; an order that cannot
    /// be signed fails with [`ClientError::Validation`].
    #[tracing::instrument(skip_all, fields(order_id = %order.id))]
    pub async fn create_invoice_with_metadata(
        &self,
        order: &Order,
        payer: &Payer,
        metadata: &Map<String, Value>,
    ) -> Result<String, ClientError> {
        let signature = order.signature(self.credentials.secret_key())?;
        let body = CreateInvoiceRequest {
            public_key: self.credentials.public_key(),
            order,
            payer,
            metadata,
            language: INVOICE_LANGUAGE,
            payment_method: self.session.payment_method,
            result_url: &self.session.invoice_result_url,
            fail_path: &self.session.invoice_fail_path,
            signature,
        };

        let request = GatewayRequest::post("invoices/create", to_body(&body)?);
        let response = self.execute(request).await?;
        let invoice_id = objects::take_data_string(response)?;
        tracing::info!(%invoice_id, "Invoice created");
        Ok(invoice_id)
    }

    /// `GET invoices/{id}` – returns the `data` payload.
    #[tracing::instrument(skip(self))]
    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Value, ClientError> {
        let request = GatewayRequest::get(format!("invoices/{}", segment(invoice_id)?));
        let response = self.execute(request).await?;
        Ok(objects::take_data(response)?)
    }

    /// `GET checkout/check-transaction-status/{id}` – returns the `data`
    /// payload.
    #[tracing::instrument(skip(self))]
    pub async fn check_invoice_status(&self, invoice_id: &str) -> Result<Value, ClientError> {
        let request = GatewayRequest::get(format!(
            "checkout/check-transaction-status/{}",
            segment(invoice_id)?
        ));
        let response = self.execute(request).await?;
        Ok(objects::take_data(response)?)
    }

    /// `POST checkout/create` – pay an invoice.
    ///
    /// Unlike the lookups, this returns the whole response body (which
    /// carries e.g. `txid` next to `data`). Pass `None` as `card_token` to
    /// pay without a tokenized card.
    #[tracing::instrument(skip(self, customer, card_token))]
    pub async fn checkout(
        &self,
        invoice_id: &str,
        customer: &Customer,
        card_token: Option<&str>,
    ) -> Result<Value, ClientError> {
        let body = CheckoutRequest {
            invoice_identifier: invoice_id,
            customer,
            card_token: card_token.unwrap_or_default(),
            pay_currency: &self.session.currency,
            payment_method: self.session.payment_method,
            check_status_url: &self.session.check_status_url,
        };
        let request = GatewayRequest::post("checkout/create", to_body(&body)?);
        self.execute(request).await
    }

    /// `POST payment-tools/card-token/create` – tokenize a card for an
    /// invoice.
    ///
    /// Returns the whole response body; the token is in its `token` field.
    #[tracing::instrument(skip(self, card))]
    pub async fn create_card_token(
        &self,
        invoice_id: &str,
        card: &Card,
    ) -> Result<Value, ClientError> {
        let body = CardTokenRequest {
            card,
            invoice_identifier: invoice_id,
        };
        let request = GatewayRequest::post("payment-tools/card-token/create", to_body(&body)?);
        self.execute(request).await
    }

    /// `GET transactions/{id}` – authenticated with the bearer token.
    /// Returns the `data` payload.
    #[tracing::instrument(skip(self))]
    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Value, ClientError> {
        let request =
            GatewayRequest::get(format!("transactions/{}", segment(transaction_id)?))
                .with_header(AUTHORIZATION, self.credentials.bearer_token())?;
        let response = self.execute(request).await?;
        Ok(objects::take_data(response)?)
    }

    async fn execute(&self, request: GatewayRequest) -> Result<Value, ClientError> {
        let method = request.method.clone();
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        tracing::debug!(%method, %path, status = %response.status, "Payop API response");
        Ok(parse_response(response)?)
    }
}

fn parse_response(response: GatewayResponse) -> Result<Value, TransportError> {
    let status = response.status;
    if !status.is_success() {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        return Err(TransportError::Status { status, body });
    }
    Ok(serde_json::from_slice(&response.body)?)
}

fn to_body(body: &impl Serialize) -> Result<Value, TransportError> {
    Ok(serde_json::to_value(body)?)
}

/// Percent-encode an identifier used as a single path segment.
///
/// Empty and dot segments are rejected: URL resolution would drop them or
/// walk up to the parent route.
fn segment(id: &str) -> Result<std::borrow::Cow<'_, str>, ClientError> {
    match id {
        "" | "." | ".." => Err(ClientError::InvalidId(id.to_owned())),
        _ => Ok(urlencoding::encode(id)),
    }
}
