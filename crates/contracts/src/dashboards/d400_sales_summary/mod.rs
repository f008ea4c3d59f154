pub mod dto;

pub use dto::{RevenueSeries, SalesSummary};
