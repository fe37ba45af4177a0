//! Transfer records and the filter used to query them.
//!
//! The backend serves `{ "transfers": [...] }`, sometimes with a `token`
//! object alongside. Amounts stay as decimal strings in base units because
//! they routinely exceed `u64`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DEFAULT_TOKEN_SYMBOL;

// ============================================================================
// Transfer
// ============================================================================

/// A single token-movement event as indexed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Backend row identifier.
    pub id: i64,
    /// Sending address (hex string).
    pub sender: String,
    /// Receiving address (hex string).
    pub recipient: String,
    /// Amount in base units, as a non-negative decimal string.
    pub amount: String,
    /// Block that included the transfer.
    pub block_number: u64,
    /// Hash of the transaction that emitted the event.
    pub tx_hash: String,
}

// ============================================================================
// Token Info
// ============================================================================

/// Token metadata attached to the transfers response.
///
/// Only the symbol is used, for the amount column header. Amounts are always
/// scaled by 10^18 whatever else the object carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Ticker symbol.
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

fn default_symbol() -> String {
    DEFAULT_TOKEN_SYMBOL.to_string()
}

impl Default for TokenInfo {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
        }
    }
}

// ============================================================================
// Transfer Page
// ============================================================================

/// Body of `GET /eth/transfers`.
///
/// A missing or `null` `transfers` field decodes as an empty list. A `token`
/// object that does not fit [`TokenInfo`] is ignored rather than failing the
/// whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transfers: Vec<Transfer>,
    #[serde(default, deserialize_with = "lenient_token")]
    pub token: Option<TokenInfo>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Transfer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Transfer>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_token<'de, D>(deserializer: D) -> Result<Option<TokenInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// ============================================================================
// Filter
// ============================================================================

/// Which of the two address filters an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Sender,
    Recipient,
}

impl FilterField {
    /// Label shown above the input box.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sender => "Sender Address",
            Self::Recipient => "Recipient Address",
        }
    }

    /// Query-string parameter name.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Sender => "sender",
            Self::Recipient => "recipient",
        }
    }
}

/// The sender/recipient pair sent to the backend.
///
/// An empty string means "no constraint" for that side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferFilter {
    pub sender: String,
    pub recipient: String,
}

impl TransferFilter {
    #[must_use]
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
        }
    }

    #[must_use]
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Sender => &self.sender,
            FilterField::Recipient => &self.recipient,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Sender => self.sender = value,
            FilterField::Recipient => self.recipient = value,
        }
    }

    /// Query parameters for the non-empty sides, sender first.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [FilterField::Sender, FilterField::Recipient]
            .into_iter()
            .map(|field| (field.param(), self.get(field)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_decodes_backend_response() {
        let json = r#"{
            "token": { "decimals": 18, "symbol": "DEMO" },
            "transfers": [{
                "id": 1,
                "sender": "0xaaaa000000000000000000000000000000001111",
                "recipient": "0xbbbb000000000000000000000000000000002222",
                "amount": "3000000000000000000",
                "block_number": 100,
                "tx_hash": "0xcccc00000000000000000000000000000000000000000000000000000003333"
            }]
        }"#;

        let page: TransferPage = serde_json::from_str(json).expect("valid page");

        assert_eq!(page.transfers.len(), 1);
        assert_eq!(page.transfers[0].amount, "3000000000000000000");
        assert_eq!(page.transfers[0].block_number, 100);
        assert_eq!(
            page.token,
            Some(TokenInfo {
                symbol: "DEMO".to_string()
            })
        );
    }

    #[test]
    fn test_page_without_transfers_field_is_empty() {
        let page: TransferPage = serde_json::from_str("{}").expect("empty object");
        assert!(page.transfers.is_empty());
        assert!(page.token.is_none());
    }

    #[test]
    fn test_null_transfers_is_empty() {
        let page: TransferPage =
            serde_json::from_str(r#"{"transfers": null}"#).expect("null transfers");
        assert!(page.transfers.is_empty());
    }

    #[test]
    fn test_token_object_is_decoded_leniently() {
        let cases = [
            (r#"{"token": {"decimals": 18}}"#, Some(TokenInfo::default())),
            (
                r#"{"token": {"symbol": "DEMO"}}"#,
                Some(TokenInfo {
                    symbol: "DEMO".to_string(),
                }),
            ),
            (r#"{"token": {"symbol": 5}}"#, None),
            (r#"{"token": "LOB"}"#, None),
            (r#"{"token": null}"#, None),
        ];

        for (json, expected) in cases {
            let page: TransferPage = serde_json::from_str(json).expect(json);
            assert_eq!(page.token, expected, "{json}");
        }
    }

    #[test]
    fn test_page_rejects_wrong_shape() {
        assert!(serde_json::from_str::<TransferPage>(r#"{"transfers": 5}"#).is_err());
        assert!(
            serde_json::from_str::<TransferPage>(r#"{"transfers": [{"id": "x"}]}"#).is_err()
        );
        assert!(serde_json::from_str::<TransferPage>("5").is_err());
    }

    #[test]
    fn test_query_pairs_omit_empty_filters() {
        let cases = [
            (TransferFilter::default(), vec![]),
            (TransferFilter::new("0xabc", ""), vec![("sender", "0xabc")]),
            (TransferFilter::new("", "0xdef"), vec![("recipient", "0xdef")]),
            (
                TransferFilter::new("0xabc", "0xdef"),
                vec![("sender", "0xabc"), ("recipient", "0xdef")],
            ),
        ];

        for (filter, expected) in cases {
            assert_eq!(filter.query_pairs(), expected, "{filter:?}");
        }
    }

    #[test]
    fn test_filter_get_set() {
        let mut filter = TransferFilter::default();
        assert!(filter.query_pairs().is_empty());

        filter.set(FilterField::Recipient, "0x12".to_string());
        assert_eq!(filter.get(FilterField::Recipient), "0x12");
        assert_eq!(filter.get(FilterField::Sender), "");
        assert_eq!(filter, TransferFilter::new("", "0x12"));
    }
}
