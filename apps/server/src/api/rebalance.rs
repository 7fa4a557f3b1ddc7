use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use rebalancer_core::constants::EXPORT_FILE_NAME;
use rebalancer_core::currency::DisplayCurrency;
use serde::Deserialize;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Currency, RebalanceSummary},
};

#[derive(Deserialize)]
pub struct RebalanceQuery {
    currency: Option<String>,
}

/// Computes the table in the requested currency, or the saved one when omitted.
#[utoipa::path(
    get,
    path = "/api/v1/rebalance",
    params(("currency" = Option<String>, Query, description = "Display currency code (USD, EUR, GBP)")),
    responses((status = 200, body = RebalanceSummary), (status = 400, description = "Invalid input"))
)]
pub async fn get_rebalance(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RebalanceQuery>,
) -> ApiResult<Json<RebalanceSummary>> {
    let currency = match query.currency.as_deref() {
        Some(code) => DisplayCurrency::from_code(code).map_err(rebalancer_core::Error::from)?,
        None => state.settings_service.get_display_currency()?,
    };
    let summary = state.rebalance_service.get_rebalance(currency)?;
    Ok(Json(summary.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/rebalance/export",
    responses((status = 200, description = "CSV of the rebalance table", content_type = "text/csv"))
)]
pub async fn export_rebalance(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let csv = state.rebalance_service.export_csv()?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        csv,
    ))
}

#[utoipa::path(get, path = "/api/v1/currencies", responses((status = 200, body = [Currency])))]
pub async fn list_currencies() -> Json<Vec<Currency>> {
    Json(
        DisplayCurrency::all()
            .iter()
            .map(|c| Currency::from(c.info()))
            .collect(),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rebalance", get(get_rebalance))
        .route("/rebalance/export", get(export_rebalance))
        .route("/currencies", get(list_currencies))
}
