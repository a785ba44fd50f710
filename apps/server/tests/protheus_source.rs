//! Runs the REST source against a local stand-in for the ERP endpoints.

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use pricedesk_price_source::{
    BasicCredentials, Dataset, PriceSource, ProtheusRestSource, SourceEndpoints, SourceError,
};
use rust_decimal_macros::dec;
use serde_json::json;

const USER: &str = "svc";
const PASSWORD: &str = "s3cret";

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Basic {}", BASE64.encode(format!("{}:{}", USER, PASSWORD)));
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false)
}

async fn price_table(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([
        {
            "DA1_CODPRO": "123",
            "B1_DESC": "Widget",
            "DA0_DESCRI": "Retail",
            "DA1_CODTAB": "T1",
            "DA1_PRCVEN": 100,
            "DA0_CONDPG": "001",
            "B1_IPI": "10"
        },
        {
            "DA1_CODPRO": 124,
            "B1_DESC": "Gadget",
            "DA0_DESCRI": "Retail",
            "DA1_CODTAB": "T1",
            "DA1_PRCVEN": "n/a",
            "DA0_CONDPG": 1
        }
    ]))
    .into_response()
}

async fn conditions(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([
        { "E4_CODIGO": "001", "E4_DESCRI": "30 days", "E4_XACRESC": 5.5 }
    ]))
    .into_response()
}

async fn broken() -> &'static str {
    "<html>maintenance</html>"
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "[]"
}

async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route("/tabelapreco", get(price_table))
        .route("/se4", get(conditions))
        .route("/broken", get(broken))
        .route("/slow", get(slow));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn source_for(addr: SocketAddr, credentials: BasicCredentials) -> ProtheusRestSource {
    let endpoints = SourceEndpoints::from_base(&format!("http://{}", addr));
    ProtheusRestSource::with_timeout(endpoints, credentials, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn fetches_and_normalizes_both_datasets() {
    let addr = spawn_stub().await;
    let source = source_for(addr, BasicCredentials::new(USER, PASSWORD));

    let prices = source.fetch_price_table().await.unwrap();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices[0].product_code, "000123");
    assert_eq!(prices[0].base_price, dec!(100));
    assert_eq!(prices[0].ipi_pct, dec!(10));
    assert_eq!(prices[1].product_code, "000124");
    assert_eq!(prices[1].base_price, dec!(0));
    assert_eq!(prices[1].condition_code, "1");
    assert_eq!(prices[1].ipi_pct, dec!(0));

    let conditions = source.fetch_payment_conditions().await.unwrap();
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].code, "001");
    assert_eq!(conditions[0].interest_pct, dec!(5.5));
}

#[tokio::test]
async fn wrong_credentials_surface_the_http_status() {
    let addr = spawn_stub().await;
    let source = source_for(addr, BasicCredentials::new(USER, "wrong"));

    match source.fetch_price_table().await {
        Err(SourceError::HttpStatus { dataset, status }) => {
            assert_eq!(dataset, Dataset::PriceTable);
            assert_eq!(status, 401);
        }
        other => panic!("expected HTTP 401, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_credentials_send_no_auth_header() {
    let addr = spawn_stub().await;
    let source = source_for(addr, BasicCredentials::default());

    let err = source.fetch_payment_conditions().await.unwrap_err();
    assert!(matches!(err, SourceError::HttpStatus { status: 401, .. }));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let addr = spawn_stub().await;
    let endpoints = SourceEndpoints {
        price_table_url: format!("http://{}/broken", addr),
        conditions_url: format!("http://{}/se4", addr),
    };
    let source =
        ProtheusRestSource::new(endpoints, BasicCredentials::new(USER, PASSWORD)).unwrap();

    let err = source.fetch_price_table().await.unwrap_err();
    assert!(matches!(
        err,
        SourceError::Decode {
            dataset: Dataset::PriceTable,
            ..
        }
    ));
    assert!(err
        .to_string()
        .to_lowercase()
        .contains("price table"));
}

#[tokio::test]
async fn configured_timeout_applies_to_requests() {
    let addr = spawn_stub().await;
    let endpoints = SourceEndpoints {
        price_table_url: format!("http://{}/slow", addr),
        conditions_url: format!("http://{}/se4", addr),
    };
    let source = ProtheusRestSource::with_timeout(
        endpoints,
        BasicCredentials::new(USER, PASSWORD),
        Duration::from_millis(200),
    )
    .unwrap();

    let err = source.fetch_price_table().await.unwrap_err();
    assert!(matches!(
        err,
        SourceError::Timeout {
            dataset: Dataset::PriceTable
        }
    ));
}
