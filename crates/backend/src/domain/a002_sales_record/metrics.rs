use contracts::domain::a002_sales_record::SalesRecord;

pub fn total_orders(sales: &[SalesRecord]) -> u64 {
    sales.iter().map(|r| r.orders as u64).sum()
}

pub fn total_revenue(sales: &[SalesRecord]) -> f64 {
    sales.iter().map(|r| r.revenue).sum()
}

/// Revenue per order; `0.0` when there are no orders at all.
pub fn average_order_value(sales: &[SalesRecord]) -> f64 {
    let orders = total_orders(sales);
    if orders == 0 {
        return 0.0;
    }
    total_revenue(sales) / orders as f64
}
