use contracts::domain::a001_product::Product;

/// Products running low: `0 < stock < threshold`, where the threshold is the
/// product's own `lowStockThreshold` or `default_threshold`.
/// Out-of-stock products are reported by [`out_of_stock_products`] instead.
pub fn low_stock_products(products: &[Product], default_threshold: u32) -> Vec<Product> {
    products
        .iter()
        .filter(|p| {
            let threshold = p.effective_low_stock_threshold(default_threshold);
            p.stock() > 0 && p.stock() < threshold
        })
        .cloned()
        .collect()
}

pub fn out_of_stock_products(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.is_out_of_stock())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::{NewProduct, ProductId, LOW_STOCK_LIMIT};

    fn product(id: u64, stock: u32, threshold: Option<u32>) -> Product {
        Product::new(
            ProductId::from_sequence(id),
            NewProduct {
                name: format!("Item {}", id),
                category: "Books".to_string(),
                description: String::new(),
                price: 10.0,
                stock,
                image: None,
                sku: None,
                low_stock_threshold: threshold,
            },
        )
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_threshold_matches_low_stock_status() {
        let products = vec![product(1, 0, None), product(2, 9, None), product(3, 10, None)];
        assert_eq!(ids(&low_stock_products(&products, LOW_STOCK_LIMIT)), vec!["2"]);
        assert_eq!(ids(&out_of_stock_products(&products)), vec!["1"]);
    }

    #[test]
    fn test_per_product_threshold_overrides_default() {
        let products = vec![product(1, 15, Some(20)), product(2, 15, None), product(3, 3, Some(2))];
        assert_eq!(ids(&low_stock_products(&products, 10)), vec!["1"]);
    }

    #[test]
    fn test_configured_default_threshold() {
        let products = vec![product(1, 12, None), product(2, 30, None)];
        assert_eq!(ids(&low_stock_products(&products, 25)), vec!["1"]);
    }
}
