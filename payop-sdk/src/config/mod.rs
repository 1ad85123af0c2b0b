//! Configuration types for the Payop client.
//!
//! These types hold already-validated values. Loading them from files or
//! the environment is left to the application.

mod credentials;
mod session;
mod transport;

pub use credentials::Credentials;
pub use session::{DEFAULT_CURRENCY, DEFAULT_PAYMENT_METHOD, SessionConfig};
pub use transport::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TransportConfig};
