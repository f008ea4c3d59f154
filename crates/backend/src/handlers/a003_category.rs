use axum::extract::State;
use axum::Json;
use contracts::domain::a003_category::CategoryAggregate;

use crate::shared::state::AppState;

/// GET /api/categories
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<CategoryAggregate>> {
    Json(state.store.list_categories())
}
