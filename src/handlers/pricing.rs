//! REST lookups for prices, placements, components, and video processors.
//! Missing rows are `data: null` or an empty list, never 404.

use crate::error::AppError;
use crate::query::FindArgs;
use crate::response::{success_many, success_one};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::collections::HashMap;

/// `take`/`skip` from the query string. Unparseable values and unknown keys are ignored.
fn paging(params: &HashMap<String, String>) -> FindArgs {
    let get = |key: &str| params.get(key).and_then(|v| v.trim().parse::<u32>().ok());
    FindArgs {
        take: get("take"),
        skip: get("skip"),
        ..FindArgs::default()
    }
}

pub async fn item_price(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let price = state.services.item_prices.find_by_item_code(&code, FindArgs::new()).await?;
    Ok(success_one(price))
}

pub async fn module_price(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let price = state
        .services
        .module_prices
        .find_by_module_code(&code, FindArgs::new())
        .await?;
    Ok(success_one(price))
}

pub async fn cabinet_price(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let price = state
        .services
        .cabinet_prices
        .find_by_cabinet_code(&code, FindArgs::new())
        .await?;
    Ok(success_one(price))
}

pub async fn cabinet_placements(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.services.placements.find_by_cabinet_code(&code).await?;
    Ok(success_many(rows))
}

pub async fn cabinet_components(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .services
        .components
        .find_by_cabinet_code(&code, paging(&params))
        .await?;
    Ok(success_many(rows))
}

pub async fn module_components(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .services
        .components
        .find_by_module_code(&code, paging(&params))
        .await?;
    Ok(success_many(rows))
}

pub async fn video_processors(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.services.video_processors.find_all(paging(&params)).await?;
    Ok(success_many(rows))
}
