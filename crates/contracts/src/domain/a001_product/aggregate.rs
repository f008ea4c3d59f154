use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock level below which a product is reported as "Low Stock".
pub const LOW_STOCK_LIMIT: u32 = 10;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// Sequential ids are the 1-based position in the catalog, as a string.
    pub fn from_sequence(n: u64) -> Self {
        Self(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductStatus::InStock => "In Stock",
            ProductStatus::LowStock => "Low Stock",
            ProductStatus::OutOfStock => "Out of Stock",
        };
        f.write_str(label)
    }
}

/// Stock classification used for dashboard coloring and alerts.
///
/// `0` is out of stock, `1..=9` is low, anything from [`LOW_STOCK_LIMIT`] up is in stock.
pub fn classify_stock(stock: u32) -> ProductStatus {
    if stock == 0 {
        ProductStatus::OutOfStock
    } else if stock < LOW_STOCK_LIMIT {
        ProductStatus::LowStock
    } else {
        ProductStatus::InStock
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Validated product fields, everything except `id` and `status`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image: Option<String>,
    pub sku: Option<String>,
    pub low_stock_threshold: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProductWire")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,

    // stock and status only change together, see `set_stock`
    stock: u32,
    status: ProductStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(
        rename = "lowStockThreshold",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub low_stock_threshold: Option<u32>,

    #[serde(
        rename = "forecastedStock",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub forecasted_stock: Option<u32>,

    #[serde(
        rename = "forecastedDays",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub forecasted_days: Option<u32>,
}

/// Incoming shape of a product. Any `status` on the wire is ignored and
/// recomputed from `stock`.
#[derive(Deserialize)]
struct ProductWire {
    id: ProductId,
    name: String,
    category: String,
    #[serde(default)]
    description: String,
    price: f64,
    stock: u32,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    sku: Option<String>,
    #[serde(rename = "lowStockThreshold", default)]
    low_stock_threshold: Option<u32>,
    #[serde(rename = "forecastedStock", default)]
    forecasted_stock: Option<u32>,
    #[serde(rename = "forecastedDays", default)]
    forecasted_days: Option<u32>,
}

impl From<ProductWire> for Product {
    fn from(wire: ProductWire) -> Self {
        let mut product = Product::new(
            wire.id,
            NewProduct {
                name: wire.name,
                category: wire.category,
                description: wire.description,
                price: wire.price,
                stock: wire.stock,
                image: wire.image,
                sku: wire.sku,
                low_stock_threshold: wire.low_stock_threshold,
            },
        );
        product.forecasted_stock = wire.forecasted_stock;
        product.forecasted_days = wire.forecasted_days;
        product
    }
}

impl Product {
    pub fn new(id: ProductId, fields: NewProduct) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            description: fields.description,
            price: fields.price,
            stock: fields.stock,
            status: classify_stock(fields.stock),
            image: fields.image,
            sku: fields.sku,
            low_stock_threshold: fields.low_stock_threshold,
            forecasted_stock: None,
            forecasted_days: None,
        }
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Writes the new stock level and recomputes the status in one step.
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
        self.status = classify_stock(stock);
    }

    /// Threshold for the low-stock filter: the product's own value, else `default`.
    pub fn effective_low_stock_threshold(&self, default: u32) -> u32 {
        self.low_stock_threshold.unwrap_or(default)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}
