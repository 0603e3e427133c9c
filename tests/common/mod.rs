#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use bytes::Bytes;
use led_configurator::model::EntityDef;
use led_configurator::{app, AppConfig, AppError, AppState, FindArgs, MemoryStore, RateSource, Store};
use std::sync::Arc;
use tower::ServiceExt;

/// Rate source returning a fixed body or a fixed failure.
pub struct StubRates(pub Result<&'static str, &'static str>);

#[async_trait]
impl RateSource for StubRates {
    async fn fetch(&self) -> Result<Bytes, AppError> {
        match self.0 {
            Ok(body) => Ok(Bytes::from_static(body.as_bytes())),
            Err(msg) => Err(AppError::Upstream(msg.to_string())),
        }
    }
}

/// Store whose database is unreachable.
pub struct DownStore;

#[async_trait]
impl Store for DownStore {
    async fn find_many(&self, _entity: &EntityDef, _args: &FindArgs) -> Result<Vec<serde_json::Value>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

pub fn fixture_store() -> Arc<MemoryStore> {
    let fixture = serde_json::from_str(include_str!("../fixtures/catalog.json")).unwrap();
    Arc::new(MemoryStore::from_fixture(fixture).unwrap())
}

pub fn router_with(store: Arc<dyn Store>, rates: Arc<dyn RateSource>) -> Router {
    let http = AppConfig::from_lookup(|_| None).unwrap().http;
    app(AppState::new(store, rates), &http).unwrap()
}

pub fn router() -> Router {
    router_with(fixture_store(), Arc::new(StubRates(Ok(r#"{"Valute":{}}"#))))
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Bytes) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn send(router: Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let resp: Response<Body> = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

pub fn json(body: &Bytes) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}
