//! The reqwest-backed rate source against a local upstream.

mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use common::{fixture_store, json, router_with};
use led_configurator::config::CurrencyConfig;
use led_configurator::{RateSource, ReqwestRateSource};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn_upstream() -> SocketAddr {
    let upstream = Router::new()
        .route("/daily_json.js", get(|| async { r#"{"Valute":{}}"# }))
        .route("/broken", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }))
        .route("/html", get(|| async { "<html>not json</html>" }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    addr
}

fn source(url: String) -> ReqwestRateSource {
    ReqwestRateSource::new(&CurrencyConfig {
        url,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn relays_upstream_json() {
    let addr = spawn_upstream().await;
    let rates = source(format!("http://{}/daily_json.js", addr));
    let body = rates.fetch().await.unwrap();
    assert_eq!(&body[..], br#"{"Valute":{}}"#);

    let r = router_with(fixture_store(), Arc::new(rates));
    let (status, body) = common::get(r, "/api/currency-proxy-route").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], br#"{"Valute":{}}"#);
}

#[tokio::test]
async fn upstream_errors_become_fixed_500() {
    let addr = spawn_upstream().await;
    for path in ["broken", "html"] {
        let rates = source(format!("http://{}/{}", addr, path));
        assert!(rates.fetch().await.is_err(), "{} should fail", path);
        let r = router_with(fixture_store(), Arc::new(rates));
        let (status, body) = common::get(r, "/api/currency-proxy-route").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(&body)["error"], "Не удалось получить курс валют");
    }
}

#[tokio::test]
async fn unreachable_upstream_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let rates = source(format!("http://{}/daily_json.js", addr));
    assert!(rates.fetch().await.is_err());
}
