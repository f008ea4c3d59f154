use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::state::AppState;
use crate::shared::uploads::UPLOADS_URL_PREFIX;
use crate::system::middleware::request_logger::request_logger;

/// Room for the text fields of a product form on top of the image itself
const FORM_FIELDS_ALLOWANCE: usize = 1024 * 1024;

/// Builds the application router with CORS, request logging and static uploads
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let body_limit = state.config.server.max_upload_bytes + FORM_FIELDS_ALLOWANCE;
    let uploads = ServeDir::new(state.uploads_dir.as_ref());

    Router::new()
        .route("/health", get(handlers::system::health))
        .route("/api/config", get(handlers::system::get_server_config))
        // A001 Products
        .route(
            "/api/products",
            get(handlers::a001_product::list_all)
                .post(handlers::a001_product::create)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/api/products/low-stock",
            get(handlers::a001_product::list_low_stock),
        )
        .route(
            "/api/products/out-of-stock",
            get(handlers::a001_product::list_out_of_stock),
        )
        .route(
            "/api/products/:id/stock",
            put(handlers::a001_product::update_stock),
        )
        .route(
            "/api/products/:id/forecast",
            get(handlers::a001_product::get_forecast),
        )
        // A002 Sales
        .route("/api/sales", get(handlers::a002_sales_record::list_all))
        .route(
            "/api/sales/summary",
            get(handlers::a002_sales_record::get_summary),
        )
        .route(
            "/api/sales/revenue-series",
            get(handlers::a002_sales_record::get_revenue_series),
        )
        // A003 Categories
        .route("/api/categories", get(handlers::a003_category::list_all))
        .nest_service(UPLOADS_URL_PREFIX, uploads)
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
