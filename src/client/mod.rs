//! HTTP clients for the transfers backend.
//!
//! - [`api`] - Backend base URL and query string construction
//! - [`http`] - Shared `reqwest` client with timeouts and pooling
//! - [`transfers`] - The `/eth/transfers` endpoint
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{ApiConfig, HttpConfig, TransferClient};
//! use crate::domain::TransferFilter;
//!
//! let api = ApiConfig::new("http://localhost:8080");
//! let client = TransferClient::new(HttpConfig::default())?;
//! let page = client.get_transfers(api.transfers_url(&TransferFilter::default())?).await?;
//! ```

pub mod api;
pub mod http;
pub mod transfers;

#[cfg(test)]
mod tests;

pub use api::ApiConfig;
pub use http::HttpConfig;
pub use transfers::TransferClient;
