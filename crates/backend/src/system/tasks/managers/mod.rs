pub mod live_sales_feed;

pub use live_sales_feed::LiveSalesFeedManager;
