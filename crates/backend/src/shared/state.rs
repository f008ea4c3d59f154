use std::path::PathBuf;
use std::sync::Arc;

use super::config::{get_uploads_path, Config};
use super::data::store::DashboardStore;

/// Shared by every handler; cloning only bumps the reference counts.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DashboardStore>,
    pub config: Arc<Config>,
    pub uploads_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(store: Arc<DashboardStore>, config: Config) -> Self {
        let uploads_dir = get_uploads_path(&config);
        Self {
            store,
            config: Arc::new(config),
            uploads_dir: Arc::new(uploads_dir),
        }
    }

    /// Low-stock threshold for products without their own
    pub fn low_stock_threshold(&self) -> u32 {
        self.config.inventory.low_stock_threshold
    }
}
