use contracts::domain::a001_product::{NewProduct, NewProductDto, Product, UpdateStockDto};

use super::inventory;
use crate::shared::data::store::DashboardStore;
use crate::shared::error::{AppError, AppResult};

pub fn list_all(store: &DashboardStore) -> Vec<Product> {
    store.list_products()
}

/// Checks a creation request. `image` is the public path of an accepted upload.
pub fn validate(dto: NewProductDto, image: Option<String>) -> AppResult<NewProduct> {
    dto.validate(image).map_err(AppError::Validation)
}

pub fn create(store: &DashboardStore, fields: NewProduct) -> Product {
    let product = store.add_product(fields);
    tracing::info!(
        "Product {} created: '{}' ({}), stock {}",
        product.id,
        product.name,
        product.category,
        product.stock()
    );
    product
}

/// Sets a new stock level. Negative values are rejected before the store is touched.
pub fn update_stock(store: &DashboardStore, id: &str, dto: UpdateStockDto) -> AppResult<Product> {
    let stock = dto.validate().map_err(AppError::Validation)?;
    let product = store.set_product_stock(id, stock)?;
    tracing::info!(
        "Product {} stock set to {} ({})",
        product.id,
        product.stock(),
        product.status()
    );
    Ok(product)
}

pub fn low_stock(store: &DashboardStore, default_threshold: u32) -> Vec<Product> {
    store.with_snapshot(|products, _| inventory::low_stock_products(products, default_threshold))
}

pub fn out_of_stock(store: &DashboardStore) -> Vec<Product> {
    store.with_snapshot(|products, _| inventory::out_of_stock_products(products))
}

/// There is no forecasting model; known products get `NotImplemented`.
pub fn forecast(store: &DashboardStore, id: &str) -> AppResult<Product> {
    let product = store
        .get_product(id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    Err(AppError::NotImplemented(format!(
        "Stock forecast is not available for product {}",
        product.id
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::random::seeded;
    use crate::usecases::u501_generate_sample_data::generate;
    use chrono::NaiveDate;
    use contracts::domain::a001_product::ProductStatus;

    fn store() -> DashboardStore {
        DashboardStore::new(generate(
            &mut seeded(8),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        ))
    }

    fn dto(stock: i64) -> NewProductDto {
        NewProductDto {
            name: Some("Running Shoes".to_string()),
            category: Some("Sports".to_string()),
            price: Some(89.99),
            stock: Some(stock),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_appends_with_next_id() {
        let store = store();
        let fields = validate(dto(4), Some("/uploads/1-2.png".to_string())).unwrap();
        let product = create(&store, fields);

        assert_eq!(product.id.as_str(), "11");
        assert_eq!(product.status(), ProductStatus::LowStock);
        assert_eq!(product.image.as_deref(), Some("/uploads/1-2.png"));
        assert_eq!(list_all(&store).len(), 11);
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let result = validate(NewProductDto::default(), None);

        match result {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Missing required fields: name, category, price, stock")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let store = store();
        let before = list_all(&store);

        let result = update_stock(&store, "1", UpdateStockDto { stock: -1 });

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(list_all(&store), before);
    }

    #[test]
    fn test_update_stock_moves_product_between_filters() {
        let store = store();
        assert!(out_of_stock(&store).is_empty());

        update_stock(&store, "1", UpdateStockDto { stock: 0 }).unwrap();
        update_stock(&store, "2", UpdateStockDto { stock: 3 }).unwrap();

        let out: Vec<String> = out_of_stock(&store).into_iter().map(|p| p.id.0).collect();
        assert_eq!(out, vec!["1"]);
        let low: Vec<String> = low_stock(&store, 10).into_iter().map(|p| p.id.0).collect();
        // the book (id 3) and the LEGO set (id 8) start low
        assert_eq!(low, vec!["2", "3", "8"]);
    }

    #[test]
    fn test_forecast() {
        let store = store();
        assert!(matches!(forecast(&store, "1"), Err(AppError::NotImplemented(_))));
        assert!(matches!(forecast(&store, "404"), Err(AppError::NotFound(_))));
    }
}
