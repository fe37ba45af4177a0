//! Application constants for the Lobster transfer explorer.
//!
//! Timing, token defaults and explorer URLs live here so the formatter, the
//! query controller and the UI agree on them.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Quiet period after the last filter edit before a fetch is sent.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Redraw / housekeeping interval of the event loop.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Default request timeout for the backend API, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Number of ticks a toast stays on screen (2 seconds at 100ms ticks).
pub const TOAST_TICKS: u8 = 20;

// ============================================================================
// Backend
// ============================================================================

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Path of the transfers listing endpoint.
pub const TRANSFERS_PATH: &str = "/eth/transfers";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "LOBSTER_API_URL";

/// Environment variable naming a log file.
pub const LOG_FILE_ENV: &str = "LOBSTER_LOG_FILE";

// ============================================================================
// Token
// ============================================================================

/// Base units per whole token are `10^TOKEN_DECIMALS`.
pub const TOKEN_DECIMALS: u32 = 18;

/// Symbol assumed when the response does not describe the token.
pub const DEFAULT_TOKEN_SYMBOL: &str = "LOB";

/// LobsterToken contract on Holesky.
pub const TOKEN_CONTRACT: &str = "0xf794F9B70FB3D9f5a3d5823898c0b2E560bD4348";

// ============================================================================
// Explorer Links
// ============================================================================

/// Etherscan transaction page prefix (Holesky).
pub const ETHERSCAN_TX_URL: &str = "https://holesky.etherscan.io/tx/";

/// Etherscan address page prefix (Holesky).
pub const ETHERSCAN_ADDRESS_URL: &str = "https://holesky.etherscan.io/address/";

/// Leading characters kept when truncating addresses and hashes.
pub const TRUNCATE_PREFIX_LEN: usize = 6;

/// Trailing characters kept when truncating addresses and hashes.
pub const TRUNCATE_SUFFIX_LEN: usize = 4;

// ============================================================================
// Tests
// ============================================================================
