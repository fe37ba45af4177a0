//! Application state for the transfer explorer.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                       App                        │
//! ├─────────────────┬────────────────┬───────────────┤
//! │ QueryController │   FetchState   │    UiState    │
//! │  - filters      │  - phase       │  - focus      │
//! │  - debounce     │  - rows/error  │  - selection  │
//! │  - API base     │  - request id  │  - help/toast │
//! └─────────────────┴────────────────┴───────────────┘
//! ```
//!
//! Fetches run on spawned tasks and report back through [`AppMessage`].

use tokio::sync::mpsc;

use crate::client::{ApiConfig, HttpConfig, TransferClient};
use crate::domain::TransferPage;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod clipboard;
pub mod config;
pub mod debounce;
pub mod fetch;
pub mod query;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use fetch::{FetchPhase, FetchState, FetchView, RequestId};
pub use query::QueryController;
pub use ui_state::{Focus, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A transfers fetch finished. Errors are already display strings.
    TransfersLoaded {
        request: RequestId,
        result: Result<TransferPage, String>,
    },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options resolved from the command line and config file.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub api: ApiConfig,
    pub http: HttpConfig,
    /// Sender filter for the first fetch.
    pub sender: Option<String>,
    /// Recipient filter for the first fetch.
    pub recipient: Option<String>,
}

// ============================================================================
// Main App State
// ============================================================================

#[derive(Debug)]
pub struct App {
    /// Filters, debounce deadline and API base.
    pub query: QueryController,

    /// Loading / error / rows of the latest request.
    pub fetch: FetchState,

    /// Focus, selection, popups, toasts.
    pub ui: UiState,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for the loading spinner.
    pub animation_tick: u64,

    // NOTE: sends use `let _ = tx.send(...)`; the receiver lives as long as
    // the App, so a failed send only happens during shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    pub(crate) client: TransferClient,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// Clipboard and browser actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
