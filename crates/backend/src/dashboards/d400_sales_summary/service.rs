use contracts::dashboards::d400_sales_summary::{RevenueSeries, SalesSummary};
use contracts::domain::a002_sales_record::SalesRecord;

use crate::domain::a001_product::inventory;
use crate::domain::a002_sales_record::metrics;
use crate::shared::data::store::DashboardStore;

/// Headline figures over the current sales window and product list.
/// Both are read under one lock, so the counts match the same moment.
pub fn get_sales_summary(store: &DashboardStore, low_stock_threshold: u32) -> SalesSummary {
    store.with_snapshot(|products, sales| SalesSummary {
        total_orders: metrics::total_orders(sales),
        total_revenue: metrics::total_revenue(sales),
        average_order_value: metrics::average_order_value(sales),
        product_count: products.len(),
        low_stock_count: inventory::low_stock_products(products, low_stock_threshold).len(),
        out_of_stock_count: inventory::out_of_stock_products(products).len(),
    })
}

pub fn get_revenue_series(store: &DashboardStore) -> RevenueSeries {
    store.with_snapshot(|_, sales| revenue_series(sales))
}

/// Chart labels are ISO dates, values are the daily revenues, both in window order
pub fn revenue_series(sales: &[SalesRecord]) -> RevenueSeries {
    let (labels, values) = sales
        .iter()
        .map(|r| (r.date.format("%Y-%m-%d").to_string(), r.revenue))
        .unzip();
    RevenueSeries { labels, values }
}
