mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{fixture_store, get, json, router, router_with, send, DownStore, StubRates};
use std::sync::Arc;

#[tokio::test]
async fn healthcheck_is_always_ok() {
    let failing = router_with(fixture_store(), Arc::new(StubRates(Err("down"))));
    let (status, body) = get(failing, "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!({"status": "OK"}));
}

#[tokio::test]
async fn ready_and_version() {
    let (status, body) = get(router(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["database"], "ok");

    let (status, body) = get(router(), "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["name"], "led-configurator");
}

#[tokio::test]
async fn ready_reports_unreachable_database() {
    let r = router_with(Arc::new(DownStore), Arc::new(StubRates(Ok("{}"))));
    let (status, body) = get(r.clone(), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json(&body), serde_json::json!({"status": "degraded", "database": "unavailable"}));

    let (status, _) = get(r, "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn currency_proxy_relays_upstream_body_verbatim() {
    let (status, body) = get(router(), "/api/currency-proxy-route").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], br#"{"Valute":{}}"#);
}

#[tokio::test]
async fn currency_proxy_failure_is_fixed_500() {
    let r = router_with(fixture_store(), Arc::new(StubRates(Err("connection refused"))));
    let (status, body) = get(r, "/api/currency-proxy-route").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json(&body), serde_json::json!({"error": "Не удалось получить курс валют"}));
}

#[tokio::test]
async fn item_price_found_and_absent() {
    let (status, body) = get(router(), "/api/v1/prices/items/PSU-5V40A").await;
    assert_eq!(status, StatusCode::OK);
    let v = json(&body);
    assert_eq!(v["data"]["itemCode"], "PSU-5V40A");
    assert_eq!(v["data"]["price"], 1450.0);

    let (status, body) = get(router(), "/api/v1/prices/items/UNKNOWN").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json(&body)["data"].is_null());
}

#[tokio::test]
async fn inactive_cabinet_price_is_absent() {
    let (status, body) = get(router(), "/api/v1/prices/cabinets/CAB-960").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json(&body)["data"].is_null());

    let (_, body) = get(router(), "/api/v1/prices/modules/P2.5-IN").await;
    assert_eq!(json(&body)["data"]["price"], 2100.0);
}

#[tokio::test]
async fn cabinet_placements_skip_inactive() {
    let (status, body) = get(router(), "/api/v1/cabinets/CAB-500/placements").await;
    assert_eq!(status, StatusCode::OK);
    let v = json(&body);
    assert_eq!(v["meta"]["count"], 2);
    assert_eq!(v["data"][0]["code"], "WALL");
    assert_eq!(v["data"][1]["code"], "FLOOR");
}

#[tokio::test]
async fn placements_for_unlinked_cabinet_issue_one_query() {
    let store = fixture_store();
    let r = router_with(store.clone(), Arc::new(StubRates(Ok("{}"))));
    let (status, body) = get(r, "/api/v1/cabinets/CAB-960/placements").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["meta"]["count"], 0);
    assert_eq!(store.query_count("cabinet_placements"), 1);
    assert_eq!(store.query_count("placements"), 0);
}

#[tokio::test]
async fn cabinet_components_listed() {
    let (_, body) = get(router(), "/api/v1/cabinets/CAB-500/components").await;
    let v = json(&body);
    assert_eq!(v["meta"]["count"], 2);
    assert_eq!(v["data"][0]["itemCode"], "PSU-5V40A");

    let (_, body) = get(router(), "/api/v1/modules/P2.5-IN/components").await;
    assert_eq!(json(&body)["meta"]["count"], 0);
}

#[tokio::test]
async fn video_processors_active_and_sorted_by_price() {
    let (status, body) = get(router(), "/api/v1/video-processors").await;
    assert_eq!(status, StatusCode::OK);
    let v = json(&body);
    let rows = v["data"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r["active"] == true));
    let prices: Vec<f64> = rows.iter().map(|r| r["price"].as_f64().unwrap()).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));

    let (_, body) = get(router(), "/api/v1/video-processors?take=1&skip=1").await;
    let v = json(&body);
    assert_eq!(v["meta"]["count"], 1);
    assert_eq!(v["data"][0]["code"], "VX600");
}

#[tokio::test]
async fn malformed_paging_is_ignored() {
    let (status, body) = get(router(), "/api/v1/video-processors?take=abc&skip=-2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["meta"]["count"], 3);

    let (status, body) = get(router(), "/api/v1/cabinets/CAB-500/components?take=x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["meta"]["count"], 2);
}

#[tokio::test]
async fn graphql_location_and_materials() {
    let query = serde_json::json!({
        "query": r#"{ locations { code cabinets { code ipProtection { code } } } materials { code } }"#
    });
    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(query.to_string()))
        .unwrap();
    let (status, body) = send(router(), req).await;
    assert_eq!(status, StatusCode::OK);
    let v = json(&body);
    assert!(v.get("errors").is_none(), "{}", v);
    let locations = v["data"]["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0]["cabinets"].as_array().unwrap().len(), 1);
    assert_eq!(locations[1]["cabinets"][0]["ipProtection"]["code"], "IP65");
    assert_eq!(v["data"]["materials"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn graphql_cabinet_sizes_and_pricing() {
    let query = serde_json::json!({
        "query": r#"{ cabinet(id: "1") { sizes { cabinetSize { width height } } price { price } placements { code } components { quantity item { name } price { price } } module { pitch } } }"#
    });
    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(query.to_string()))
        .unwrap();
    let (_, body) = send(router(), req).await;
    let v = json(&body);
    assert!(v.get("errors").is_none(), "{}", v);
    let cabinet = &v["data"]["cabinet"];
    assert_eq!(cabinet["sizes"].as_array().unwrap().len(), 2);
    assert_eq!(cabinet["sizes"][1]["cabinetSize"]["height"], 1000);
    assert_eq!(cabinet["price"]["price"], 18500.0);
    assert_eq!(cabinet["placements"].as_array().unwrap().len(), 2);
    assert_eq!(cabinet["components"][1]["price"]["price"], 3900.0);
    assert_eq!(cabinet["module"]["pitch"], 2.5);
}

#[tokio::test]
async fn graphiql_page_served() {
    let (status, body) = get(router(), "/graphql").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("graphiql"));
}
