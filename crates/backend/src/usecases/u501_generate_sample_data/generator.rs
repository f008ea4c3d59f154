use chrono::{Duration, NaiveDate};
use contracts::domain::a001_product::{NewProduct, Product, ProductId};
use contracts::domain::a002_sales_record::SalesRecord;
use contracts::domain::a003_category::CategoryAggregate;

use super::catalog::{CatalogItem, SAMPLE_CATALOG};
use crate::domain::a002_sales_record::metrics;
use crate::shared::random::RandomSource;

/// Days of sales history, today included (six months back plus today).
pub const SALES_HISTORY_DAYS: i64 = 181;

/// Initial snapshot served by the dashboard.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub products: Vec<Product>,
    pub sales: Vec<SalesRecord>,
    pub categories: Vec<CategoryAggregate>,
}

/// Builds the sample catalog, the daily sales history ending at `today`
/// and the per-category figures derived from it.
pub fn generate(rng: &mut dyn RandomSource, today: NaiveDate) -> SampleData {
    let products = build_products(SAMPLE_CATALOG);
    let sales = build_sales_history(rng, today);
    let categories = build_categories(rng, &products, &sales);

    tracing::info!(
        "Generated sample data: {} products, {} sales days, {} categories",
        products.len(),
        sales.len(),
        categories.len()
    );

    SampleData {
        products,
        sales,
        categories,
    }
}

fn build_products(catalog: &[CatalogItem]) -> Vec<Product> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Product::new(
                ProductId::from_sequence(index as u64 + 1),
                NewProduct {
                    name: item.name.to_string(),
                    category: item.category.to_string(),
                    description: item.description.to_string(),
                    price: item.price,
                    stock: item.stock,
                    image: None,
                    sku: None,
                    low_stock_threshold: None,
                },
            )
        })
        .collect()
}

fn build_sales_history(rng: &mut dyn RandomSource, today: NaiveDate) -> Vec<SalesRecord> {
    (0..SALES_HISTORY_DAYS)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back);
            // 10..=49 orders a day
            let orders = rng.uniform(10.0, 50.0).floor() as u32;
            // average order value between 100 and 300
            let revenue = orders as f64 * rng.uniform(100.0, 300.0);
            SalesRecord::new(date, revenue, orders)
        })
        .collect()
}

/// Each category gets an independent 10-30% share of the totals.
/// The shares are not normalized, so they need not add up to the totals.
fn build_categories(
    rng: &mut dyn RandomSource,
    products: &[Product],
    sales: &[SalesRecord],
) -> Vec<CategoryAggregate> {
    let total_revenue = metrics::total_revenue(sales);
    let total_orders = metrics::total_orders(sales);

    let mut names: Vec<&str> = Vec::new();
    for product in products {
        if !names.contains(&product.category.as_str()) {
            names.push(&product.category);
        }
    }

    names
        .into_iter()
        .map(|name| {
            let revenue = total_revenue * rng.uniform(0.1, 0.3);
            let orders = (total_orders as f64 * rng.uniform(0.1, 0.3)).floor() as u32;
            CategoryAggregate {
                name: name.to_string(),
                revenue,
                orders,
            }
        })
        .collect()
}
