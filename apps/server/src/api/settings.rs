use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    error::{ApiJson, ApiResult},
    main_lib::AppState,
    models::{Settings, SettingsUpdate},
};

#[utoipa::path(get, path = "/api/v1/settings", responses((status = 200, body = Settings)))]
pub async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Settings>> {
    let s = state.settings_service.get_settings()?;
    Ok(Json(s.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/settings",
    request_body = SettingsUpdate,
    responses((status = 200, body = Settings), (status = 400, description = "Invalid input"))
)]
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<SettingsUpdate>,
) -> ApiResult<Json<Settings>> {
    let s = state.settings_service.update_settings(&payload.into()).await?;
    Ok(Json(s.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}
