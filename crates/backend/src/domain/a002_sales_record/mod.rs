pub mod feed;
pub mod metrics;
