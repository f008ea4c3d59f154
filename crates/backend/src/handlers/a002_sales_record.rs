use axum::extract::State;
use axum::Json;
use contracts::dashboards::d400_sales_summary::{RevenueSeries, SalesSummary};
use contracts::domain::a002_sales_record::SalesRecord;

use crate::dashboards::d400_sales_summary::service;
use crate::shared::state::AppState;

/// GET /api/sales
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<SalesRecord>> {
    Json(state.store.list_sales())
}

/// GET /api/sales/summary
pub async fn get_summary(State(state): State<AppState>) -> Json<SalesSummary> {
    Json(service::get_sales_summary(
        &state.store,
        state.low_stock_threshold(),
    ))
}

/// GET /api/sales/revenue-series
pub async fn get_revenue_series(State(state): State<AppState>) -> Json<RevenueSeries> {
    Json(service::get_revenue_series(&state.store))
}
