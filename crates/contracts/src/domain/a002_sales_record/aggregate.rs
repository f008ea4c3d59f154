use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of sales. Serialized with the date as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub revenue: f64,
    pub orders: u32,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, revenue: f64, orders: u32) -> Self {
        Self {
            date,
            revenue,
            orders,
        }
    }
}
