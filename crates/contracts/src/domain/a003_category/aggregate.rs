use serde::{Deserialize, Serialize};

/// Revenue and orders attributed to a product category.
///
/// Computed once when the sample data is generated; the figures are shares of
/// the grand totals and are not normalized to sum to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub name: String,
    pub revenue: f64,
    pub orders: u32,
}
