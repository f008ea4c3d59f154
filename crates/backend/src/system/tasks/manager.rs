use anyhow::Result;
use async_trait::async_trait;

/// A background job run by the scheduled worker.
#[async_trait]
pub trait TaskManager: Send + Sync {
    /// Stable name used in logs.
    fn task_type(&self) -> &'static str;

    /// One execution. `session_id` identifies this run in the logs.
    /// An error is logged by the worker and the schedule continues.
    async fn run(&self, session_id: &str) -> Result<()>;
}
