use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::shared::clock::Clock;
use crate::shared::data::store::DashboardStore;
use crate::shared::format::format_amount;
use crate::shared::random::RandomSource;
use crate::system::tasks::manager::TaskManager;

pub const TASK_TYPE: &str = "live_sales_feed";

/// Appends one simulated sales day per run and keeps the window bounded.
pub struct LiveSalesFeedManager {
    store: Arc<DashboardStore>,
    rng: Mutex<Box<dyn RandomSource>>,
    clock: Arc<dyn Clock>,
    window_size: usize,
}

impl LiveSalesFeedManager {
    pub fn new(
        store: Arc<DashboardStore>,
        rng: Box<dyn RandomSource>,
        clock: Arc<dyn Clock>,
        window_size: usize,
    ) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
            clock,
            window_size,
        }
    }
}

#[async_trait]
impl TaskManager for LiveSalesFeedManager {
    fn task_type(&self) -> &'static str {
        TASK_TYPE
    }

    async fn run(&self, session_id: &str) -> Result<()> {
        let record = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            self.store
                .apply_feed_tick(&mut **rng, self.clock.today(), self.window_size)?
        };
        tracing::info!(
            "[{}] New sales record {}: revenue {}, orders {}",
            session_id,
            record.date,
            format_amount(record.revenue),
            record.orders
        );
        Ok(())
    }
}
