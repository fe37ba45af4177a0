use std::time::Duration;

use axum::http::StatusCode;

use super::{ApiConfig, HttpConfig, TransferClient};
use crate::domain::{ExplorerError, TokenInfo, TransferFilter};
use crate::test_utils::{JsonMother, MockBackend, TransferMother, unreachable_api};

fn client() -> TransferClient {
    TransferClient::new(HttpConfig::with_timeout(Duration::from_secs(5)))
        .expect("client should build")
}

async fn fetch(
    api: &ApiConfig,
    filter: &TransferFilter,
) -> Result<crate::domain::TransferPage, ExplorerError> {
    let url = api.transfers_url(filter).expect("valid url");
    client().get_transfers(url).await
}

#[tokio::test]
async fn test_success_decodes_transfers() {
    let backend = MockBackend::spawn(StatusCode::OK, JsonMother::scenario()).await;

    let page = fetch(&backend.api(), &TransferFilter::default())
        .await
        .expect("fetch should succeed");

    assert_eq!(page.transfers, vec![TransferMother::scenario()]);
    assert_eq!(backend.recorded(), vec!["/eth/transfers".to_string()]);
}

#[tokio::test]
async fn test_filters_reach_backend_as_query() {
    let backend = MockBackend::spawn(StatusCode::OK, JsonMother::empty()).await;

    fetch(&backend.api(), &TransferFilter::new("0xabc", "0xdef"))
        .await
        .expect("fetch should succeed");

    assert_eq!(
        backend.recorded(),
        vec!["/eth/transfers?sender=0xabc&recipient=0xdef".to_string()]
    );
}

#[tokio::test]
async fn test_token_info_is_decoded() {
    let backend = MockBackend::spawn(
        StatusCode::OK,
        JsonMother::with_token(r#"{"decimals":18,"symbol":"DEMO"}"#),
    )
    .await;

    let page = fetch(&backend.api(), &TransferFilter::default())
        .await
        .expect("fetch should succeed");

    assert_eq!(
        page.token,
        Some(TokenInfo {
            symbol: "DEMO".to_string()
        })
    );
    assert_eq!(page.transfers, vec![TransferMother::scenario()]);
}

#[tokio::test]
async fn test_partial_or_odd_token_keeps_transfers() {
    let cases = [
        (r#"{"decimals":18}"#, Some(TokenInfo::default())),
        (r#"{"symbol":42}"#, None),
        (r#""LOB""#, None),
    ];

    for (token, expected) in cases {
        let backend = MockBackend::spawn(StatusCode::OK, JsonMother::with_token(token)).await;

        let page = fetch(&backend.api(), &TransferFilter::default())
            .await
            .unwrap_or_else(|err| panic!("token {token} failed the fetch: {err}"));

        assert_eq!(page.token, expected, "token {token}");
        assert_eq!(page.transfers, vec![TransferMother::scenario()], "token {token}");
    }
}

#[tokio::test]
async fn test_missing_transfers_field_is_empty_list() {
    let backend = MockBackend::spawn(StatusCode::OK, "{}".to_string()).await;

    let page = fetch(&backend.api(), &TransferFilter::default())
        .await
        .expect("fetch should succeed");

    assert!(page.transfers.is_empty());
}

#[tokio::test]
async fn test_null_transfers_field_is_empty_list() {
    let backend = MockBackend::spawn(StatusCode::OK, r#"{"transfers":null}"#.to_string()).await;

    let page = fetch(&backend.api(), &TransferFilter::default())
        .await
        .expect("null transfers is not an error");

    assert!(page.transfers.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_http_error() {
    let backend = MockBackend::spawn(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#""Error fetching transfers: db down""#.to_string(),
    )
    .await;

    let err = fetch(&backend.api(), &TransferFilter::default())
        .await
        .expect_err("500 must fail");

    assert!(matches!(err, ExplorerError::Http { status: 500 }), "{err:?}");
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_malformed_body_surfaces_parser_message() {
    let backend = MockBackend::spawn(StatusCode::OK, "<html>oops</html>".to_string()).await;

    let err = fetch(&backend.api(), &TransferFilter::default())
        .await
        .expect_err("HTML is not JSON");

    let expected = serde_json::from_str::<serde_json::Value>("<html>oops</html>")
        .unwrap_err()
        .to_string();
    assert!(matches!(err, ExplorerError::Parse { .. }), "{err:?}");
    assert_eq!(err.to_string(), expected);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let err = fetch(&unreachable_api(), &TransferFilter::default())
        .await
        .expect_err("nothing listens on port 9");

    assert!(matches!(err, ExplorerError::Transport(_)), "{err:?}");
    assert!(!err.to_string().is_empty());
}
