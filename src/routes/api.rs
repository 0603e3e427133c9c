//! API routes: currency proxy, REST pricing lookups, GraphQL.

use crate::handlers::{
    cabinet_components, cabinet_placements, cabinet_price, currency_proxy, graphiql, graphql, item_price,
    module_components, module_price, video_processors,
};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes mounted at the root: `/api/currency-proxy-route` and `/graphql`.
pub fn edge_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/currency-proxy-route", get(currency_proxy))
        .route("/graphql", get(graphiql).post(graphql))
        .with_state(state)
}

/// REST lookups, nested under `/api/v1`.
pub fn pricing_routes(state: AppState) -> Router {
    Router::new()
        .route("/prices/items/:code", get(item_price))
        .route("/prices/modules/:code", get(module_price))
        .route("/prices/cabinets/:code", get(cabinet_price))
        .route("/cabinets/:code/placements", get(cabinet_placements))
        .route("/cabinets/:code/components", get(cabinet_components))
        .route("/modules/:code/components", get(module_components))
        .route("/video-processors", get(video_processors))
        .with_state(state)
}
