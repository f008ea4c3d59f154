use serde::{Deserialize, Serialize};

/// Headline figures for the dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(rename = "totalOrders")]
    pub total_orders: u64,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
    /// Zero when there are no orders
    #[serde(rename = "averageOrderValue")]
    pub average_order_value: f64,
    #[serde(rename = "productCount")]
    pub product_count: usize,
    #[serde(rename = "lowStockCount")]
    pub low_stock_count: usize,
    #[serde(rename = "outOfStockCount")]
    pub out_of_stock_count: usize,
}

/// Revenue chart data: one label (date) per value, in window order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}
