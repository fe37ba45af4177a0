//! Widget components for the transfer explorer.
//!
//! - [`helpers`]: Pure formatting for addresses, amounts and explorer links
//! - [`transfer_table`]: The transfers table and its display rows

pub mod helpers;
pub mod transfer_table;

pub use helpers::{format_address, format_tx_link, token_url};
pub use transfer_table::{TransferRow, TransferTable, column_titles};
