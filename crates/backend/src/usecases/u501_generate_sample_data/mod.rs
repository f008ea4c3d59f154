pub mod catalog;
pub mod generator;

pub use generator::{generate, SampleData, SALES_HISTORY_DAYS};
