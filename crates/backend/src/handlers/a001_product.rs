use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::{header, StatusCode};
use axum::Json;
use contracts::domain::a001_product::{NewProductDto, Product, UpdateStockDto};

use crate::domain::a001_product::service;
use crate::shared::error::{AppError, AppResult};
use crate::shared::state::AppState;
use crate::shared::uploads::ImageUpload;

/// GET /api/products
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(service::list_all(&state.store))
}

/// POST /api/products
///
/// Accepts a JSON body or a `multipart/form-data` form with an optional `image` file.
pub async fn create(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<(StatusCode, Json<Product>)> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false);

    let (dto, image) = if is_multipart {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| AppError::Upload(e.body_text()))?;
        read_product_form(multipart, state.config.server.max_upload_bytes).await?
    } else {
        let Json(dto) = Json::<NewProductDto>::from_request(request, &state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        (dto, None)
    };

    let image_url = image.as_ref().map(ImageUpload::public_url);
    // validated before the file is written, a rejected form leaves nothing on disk
    let fields = service::validate(dto, image_url)?;
    if let Some(upload) = &image {
        upload.save(&state.uploads_dir).await?;
    }

    let product = service::create(&state.store, fields);
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:id/stock
pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStockDto>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Json(dto) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    service::update_stock(&state.store, &id, dto).map(Json)
}

/// GET /api/products/low-stock
pub async fn list_low_stock(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(service::low_stock(&state.store, state.low_stock_threshold()))
}

/// GET /api/products/out-of-stock
pub async fn list_out_of_stock(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(service::out_of_stock(&state.store))
}

/// GET /api/products/:id/forecast
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    service::forecast(&state.store, &id).map(Json)
}

/// Collects the text fields of a product form into a DTO and keeps the image part in memory.
async fn read_product_form(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> AppResult<(NewProductDto, Option<ImageUpload>)> {
    let mut dto = NewProductDto::default();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Upload(e.body_text()))?;
            // an empty file input is sent as a zero-length part
            if bytes.is_empty() && file_name.as_deref().unwrap_or_default().is_empty() {
                continue;
            }
            image = Some(ImageUpload::accept(
                file_name.as_deref(),
                content_type.as_deref(),
                bytes,
                max_upload_bytes,
            )?);
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::Upload(e.body_text()))?;
        let value = value.trim().to_string();
        match name.as_str() {
            "name" => dto.name = Some(value),
            "category" => dto.category = Some(value),
            "description" => dto.description = Some(value),
            "sku" => dto.sku = Some(value),
            "price" => dto.price = parse_field("price", &value)?,
            "stock" => dto.stock = parse_field("stock", &value)?,
            "lowStockThreshold" => dto.low_stock_threshold = parse_field("lowStockThreshold", &value)?,
            other => tracing::debug!("Ignoring unknown form field '{}'", other),
        }
    }

    Ok((dto, image))
}

/// Empty text counts as a missing field.
fn parse_field<T: std::str::FromStr>(name: &str, value: &str) -> AppResult<Option<T>> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| AppError::Validation(format!("{} must be a number, got '{}'", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field::<i64>("stock", "12").unwrap(), Some(12));
        assert_eq!(parse_field::<i64>("stock", "").unwrap(), None);
        assert_eq!(parse_field::<f64>("price", "19.5").unwrap(), Some(19.5));
        match parse_field::<i64>("stock", "ten") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "stock must be a number, got 'ten'"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
