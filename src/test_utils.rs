//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of copy-pasting transfer fixtures or backend
//! setup across tests.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    http::{StatusCode, Uri, header},
    routing::get,
};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::client::{ApiConfig, HttpConfig};
use crate::domain::{Transfer, TransferPage};
use crate::state::{App, StartupOptions};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransferMother;

impl TransferMother {
    /// The single-row scenario: 3 tokens from 0xAAAA...1111 to 0xBBBB...2222.
    pub fn scenario() -> Transfer {
        Transfer {
            id: 1,
            sender: "0xAAAA000000000000000000000000000000001111".to_string(),
            recipient: "0xBBBB000000000000000000000000000000002222".to_string(),
            amount: "3000000000000000000".to_string(),
            block_number: 100,
            tx_hash: "0xCCCC000000000000000000000000000000000000000000000000000000003333"
                .to_string(),
        }
    }

    pub fn with_id(id: i64) -> Transfer {
        Transfer {
            id,
            block_number: 100 + id as u64,
            tx_hash: format!("0x{id:064x}"),
            ..Self::scenario()
        }
    }

    pub fn with_amount(id: i64, amount: &str) -> Transfer {
        Transfer {
            amount: amount.to_string(),
            ..Self::with_id(id)
        }
    }

    pub fn page(transfers: Vec<Transfer>) -> TransferPage {
        TransferPage {
            transfers,
            token: None,
        }
    }
}

/// JSON bodies as the backend would send them.
pub struct JsonMother;

impl JsonMother {
    pub fn scenario() -> String {
        r#"{"transfers":[{"id":1,"sender":"0xAAAA000000000000000000000000000000001111","recipient":"0xBBBB000000000000000000000000000000002222","amount":"3000000000000000000","block_number":100,"tx_hash":"0xCCCC000000000000000000000000000000000000000000000000000000003333"}]}"#
            .to_string()
    }

    pub fn empty() -> String {
        r#"{"transfers":[]}"#.to_string()
    }

    /// The scenario body with an extra `"token"` member holding `token` verbatim.
    pub fn with_token(token: &str) -> String {
        let scenario = Self::scenario();
        let transfers = scenario.trim_start_matches('{');
        format!(r#"{{"token":{token},{transfers}"#)
    }
}

// ============================================================================
// Mock Backend
// ============================================================================

/// An in-process stand-in for the transfers API.
///
/// Every request URI (path and query) is recorded in `requests`.
pub struct MockBackend {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    /// Serve `body` with `status` on `/eth/transfers` from an ephemeral port.
    pub async fn spawn(status: StatusCode, body: String) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let router = Router::new().route(
            "/eth/transfers",
            get(move |uri: Uri| {
                let recorded = Arc::clone(&recorded);
                let body = body.clone();
                async move {
                    recorded.lock().unwrap().push(uri.to_string());
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock backend");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn api(&self) -> ApiConfig {
        ApiConfig::new(&self.base_url)
    }

    pub fn recorded(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// An API base nothing listens on.
pub fn unreachable_api() -> ApiConfig {
    ApiConfig::new("http://127.0.0.1:9")
}

// ============================================================================
// App & Terminal Fixtures
// ============================================================================

pub fn test_app(api: ApiConfig) -> App {
    App::new(StartupOptions {
        api,
        http: HttpConfig::default(),
        ..StartupOptions::default()
    })
    .expect("test app should build")
}

pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test terminal")
}

/// Flatten a buffer into newline-separated rows.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut result = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.height {
            result.push('\n');
        }
    }
    result
}
