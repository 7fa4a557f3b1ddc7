use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::{
    error::{ApiJson, ApiPath, ApiResult},
    main_lib::AppState,
    models::{AssetEntry, AssetEntryUpdate},
};

fn to_response(entries: Vec<rebalancer_core::AssetEntry>) -> Json<Vec<AssetEntry>> {
    Json(entries.into_iter().map(AssetEntry::from).collect())
}

#[utoipa::path(get, path = "/api/v1/assets", responses((status = 200, body = [AssetEntry])))]
pub async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<AssetEntry>>> {
    let entries = state.rebalance_service.get_entries()?;
    Ok(to_response(entries))
}

/// Appends a blank row.
#[utoipa::path(post, path = "/api/v1/assets", responses((status = 200, body = [AssetEntry])))]
pub async fn add_asset(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<AssetEntry>>> {
    let entries = state.rebalance_service.add_entry().await?;
    Ok(to_response(entries))
}

/// Replaces the whole list with an imported snapshot.
#[utoipa::path(put, path = "/api/v1/assets", request_body = [AssetEntry], responses((status = 200, body = [AssetEntry]), (status = 400, description = "Invalid input")))]
pub async fn replace_assets(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<Vec<AssetEntry>>,
) -> ApiResult<Json<Vec<AssetEntry>>> {
    let entries = state
        .rebalance_service
        .replace_entries(payload.into_iter().map(Into::into).collect())
        .await?;
    Ok(to_response(entries))
}

#[utoipa::path(
    put,
    path = "/api/v1/assets/{index}",
    params(("index" = usize, Path, description = "Zero-based row index")),
    request_body = AssetEntryUpdate,
    responses((status = 200, body = [AssetEntry]), (status = 400, description = "Invalid input"), (status = 404, description = "No entry at this index"))
)]
pub async fn update_asset(
    ApiPath(index): ApiPath<usize>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<AssetEntryUpdate>,
) -> ApiResult<Json<Vec<AssetEntry>>> {
    let entries = state
        .rebalance_service
        .update_entry(index, payload.into())
        .await?;
    Ok(to_response(entries))
}

#[utoipa::path(
    delete,
    path = "/api/v1/assets/{index}",
    params(("index" = usize, Path, description = "Zero-based row index")),
    responses((status = 200, body = [AssetEntry]), (status = 400, description = "Invalid index"), (status = 404, description = "No entry at this index"))
)]
pub async fn delete_asset(
    ApiPath(index): ApiPath<usize>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AssetEntry>>> {
    let entries = state.rebalance_service.delete_entry(index).await?;
    Ok(to_response(entries))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/assets",
            get(list_assets).post(add_asset).put(replace_assets),
        )
        .route("/assets/{index}", put(update_asset).delete(delete_asset))
}
