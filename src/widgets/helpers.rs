//! Helper functions for formatting transfer data.
//!
//! This module contains the pure formatting used by the table widget and the
//! `list` command:
//! - Address and hash truncation
//! - Base-unit amount scaling with arbitrary precision
//! - Etherscan links

use num_bigint::BigUint;
use num_traits::Zero;

use crate::constants::{
    ETHERSCAN_ADDRESS_URL, ETHERSCAN_TX_URL, TOKEN_CONTRACT, TOKEN_DECIMALS,
    TRUNCATE_PREFIX_LEN, TRUNCATE_SUFFIX_LEN,
};

// ============================================================================
// Address Formatting
// ============================================================================

/// Shorten an address or hash to its first 6 and last 4 characters.
///
/// Inputs shorter than 10 characters are returned unchanged, since there is
/// nothing to elide.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     format_address("0xAAAA000000000000000000000000000000001111"),
///     "0xAAAA...1111"
/// );
/// ```
#[must_use]
pub fn format_address(addr: &str) -> String {
    let len = addr.chars().count();
    if len < TRUNCATE_PREFIX_LEN + TRUNCATE_SUFFIX_LEN {
        return addr.to_string();
    }

    let prefix: String = addr.chars().take(TRUNCATE_PREFIX_LEN).collect();
    let suffix: String = addr.chars().skip(len - TRUNCATE_SUFFIX_LEN).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Format a base-unit amount as whole LobsterTokens (divided by 10^18).
///
/// The fractional part is discarded (truncation, not rounding). Arithmetic is
/// done on `BigUint` so amounts beyond `u128` keep every digit. An empty
/// string counts as zero; any other non-numeric input is returned as-is so a
/// bad row still shows something.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_amount("1500000000000000000"), "1");
/// assert_eq!(format_amount("1234000000000000000000"), "1,234");
/// ```
#[must_use]
pub fn format_amount(amount: &str) -> String {
    let trimmed = amount.trim();
    let value = if trimmed.is_empty() {
        BigUint::zero()
    } else {
        match trimmed.parse::<BigUint>() {
            Ok(value) => value,
            Err(_) => return amount.to_string(),
        }
    };

    let scale = BigUint::from(10u32).pow(TOKEN_DECIMALS);
    format_with_commas(&(value / scale))
}

/// Format a number with commas for thousands separators.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_with_commas(&BigUint::from(1_000_000u32)), "1,000,000");
/// ```
#[must_use]
pub fn format_with_commas(n: &BigUint) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

// ============================================================================
// Explorer Links
// ============================================================================

/// An outbound Etherscan link with its short label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxLink {
    pub url: String,
    pub label: String,
}

/// Build the Etherscan link for a transaction hash.
#[must_use]
pub fn format_tx_link(hash: &str) -> TxLink {
    TxLink {
        url: format!("{ETHERSCAN_TX_URL}{hash}"),
        label: format_address(hash),
    }
}

/// Etherscan page of the LobsterToken contract.
#[must_use]
pub fn token_url() -> String {
    format!("{ETHERSCAN_ADDRESS_URL}{TOKEN_CONTRACT}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[rstest]
    #[case::ethereum_address(
        "0xAAAA000000000000000000000000000000001111",
        "0xAAAA...1111"
    )]
    #[case::exactly_ten("0123456789", "012345...6789")]
    #[case::lowercase_hash(
        "0xcccc00000000000000000000000000000000000000000000000000000003333",
        "0xcccc...3333"
    )]
    #[case::too_short("0xabc", "0xabc")]
    #[case::empty("", "")]
    fn test_format_address(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_address(input), expected);
    }

    #[test]
    fn test_format_address_matches_slice_rule() {
        let addresses = [
            "0x0000000000000000000000000000000000000000",
            "0xf794F9B70FB3D9f5a3d5823898c0b2E560bD4348",
            "abcdefghijk",
        ];

        for addr in addresses {
            let expected = format!("{}...{}", &addr[..6], &addr[addr.len() - 4..]);
            assert_eq!(format_address(addr), expected, "{addr}");
        }
    }

    /// Table-driven tests for base-unit scaling.
    #[test]
    fn test_format_amount() {
        let cases = [
            ("0", "0"),
            ("", "0"),
            ("999999999999999999", "0"),
            ("1000000000000000000", "1"),
            ("1500000000000000000", "1"),
            ("2000000000000000000", "2"),
            ("3000000000000000000", "3"),
            ("1234000000000000000000", "1,234"),
            ("1000000000000000000000000", "1,000,000"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_amount(input), expected, "amount={input}");
        }
    }

    #[test]
    fn test_format_amount_beyond_u128() {
        // 2^200 base units; far past what f64 or u128 can carry exactly
        let huge = (BigUint::from(1u32) << 200u32).to_string();
        assert_snapshot!(
            format_amount(&huge),
            @"1,606,938,044,258,990,275,541,962,092,341,162,602,522,202"
        );
    }

    #[test]
    fn test_format_amount_quotient_is_exact() {
        for n in [0u64, 7, 1_000, 123_456_789, u64::MAX] {
            for remainder in ["0", "1", "999999999999999999"] {
                let amount = BigUint::from(n) * BigUint::from(10u32).pow(18)
                    + remainder.parse::<BigUint>().unwrap();
                assert_eq!(
                    format_amount(&amount.to_string()),
                    format_with_commas(&BigUint::from(n)),
                    "n={n} r={remainder}"
                );
            }
        }
    }

    #[test]
    fn test_format_amount_keeps_garbage_visible() {
        assert_eq!(format_amount("not-a-number"), "not-a-number");
        assert_eq!(format_amount("-5"), "-5");
    }

    #[test]
    fn test_format_with_commas() {
        let cases = [
            (0_u64, "0"),
            (999, "999"),
            (1000, "1,000"),
            (1_000_000, "1,000,000"),
            (1_234_567_890, "1,234,567,890"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format_with_commas(&BigUint::from(input)),
                expected,
                "input={input}"
            );
        }
    }

    #[test]
    fn test_format_tx_link() {
        let link =
            format_tx_link("0xCCCC000000000000000000000000000000000000000000000000000000003333");
        assert_snapshot!(
            link.url,
            @"https://holesky.etherscan.io/tx/0xCCCC000000000000000000000000000000000000000000000000000000003333"
        );
        assert_eq!(link.label, "0xCCCC...3333");
    }

    #[test]
    fn test_token_url() {
        assert_eq!(
            token_url(),
            "https://holesky.etherscan.io/address/0xf794F9B70FB3D9f5a3d5823898c0b2E560bD4348"
        );
    }
}
