use axum::extract::State;
use axum::Json;
use contracts::shared::api::ServerConfigResponse;

use crate::shared::state::AppState;

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// GET /api/config
pub async fn get_server_config(State(state): State<AppState>) -> Json<ServerConfigResponse> {
    Json(ServerConfigResponse::for_port(state.config.server.port))
}
