//! Domain types for the Lobster transfer explorer.
//!
//! - [`error`] - Error type for fetching and decoding transfers
//! - [`transfer`] - Transfer records, token metadata and the query filter

pub mod error;
pub mod transfer;

pub use error::ExplorerError;
pub use transfer::{FilterField, TokenInfo, Transfer, TransferFilter, TransferPage};
