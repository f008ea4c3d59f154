use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use super::manager::TaskManager;

/// Background worker running one task at a fixed interval.
///
/// The first run happens one full interval after start. A failed run is
/// logged and the next one is still scheduled.
pub struct ScheduledTaskWorker {
    manager: Arc<dyn TaskManager>,
    interval: Duration,
}

/// Running worker. Dropping the handle leaves the task running; call [`TaskHandle::stop`].
pub struct TaskHandle {
    task_type: &'static str,
    shutdown: watch::Sender<bool>,
    join: JoinHandle<u64>,
}

impl ScheduledTaskWorker {
    pub fn new(manager: Arc<dyn TaskManager>, interval: Duration) -> Self {
        Self { manager, interval }
    }

    /// Spawns the loop on the current runtime.
    pub fn start(self) -> TaskHandle {
        let (shutdown, shutdown_rx) = watch::channel(false);
        let task_type = self.manager.task_type();
        let join = tokio::spawn(async move { self.run_loop(shutdown_rx).await });
        TaskHandle {
            task_type,
            shutdown,
            join,
        }
    }

    /// Returns the number of runs attempted before shutdown.
    async fn run_loop(&self, mut shutdown: watch::Receiver<bool>) -> u64 {
        let task_type = self.manager.task_type();
        info!(
            "Scheduled task '{}' started with interval {} seconds",
            task_type,
            self.interval.as_secs()
        );

        let mut interval = time::interval_at(time::Instant::now() + self.interval, self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut runs = 0u64;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    runs += 1;
                    let session_id = format!("{}-{}", task_type, runs);
                    if let Err(e) = self.manager.run(&session_id).await {
                        error!("Task '{}' session {} failed: {:?}", task_type, session_id, e);
                    }
                }
                changed = shutdown.changed() => {
                    // a dropped sender also means stop
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Scheduled task '{}' stopped after {} runs", task_type, runs);
        runs
    }
}

impl TaskHandle {
    /// Signals the loop and waits for it to finish. Returns the number of runs.
    pub async fn stop(self) -> Result<u64> {
        info!("Stopping scheduled task '{}'", self.task_type);
        // the loop may already be gone, the join below reports that
        let _ = self.shutdown.send(true);
        Ok(self.join.await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct CountingTask {
        calls: AtomicU64,
        fail: bool,
    }

    impl CountingTask {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicU64::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl TaskManager for CountingTask {
        fn task_type(&self) -> &'static str {
            "counting"
        }

        async fn run(&self, _session_id: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("boom");
            }
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_once_per_interval() {
        let task = CountingTask::new(false);
        let handle = ScheduledTaskWorker::new(task.clone(), Duration::from_secs(60)).start();

        time::sleep(Duration::from_secs(150)).await;

        assert_eq!(handle.stop().await.unwrap(), 2);
        assert_eq!(task.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_run_waits_one_interval() {
        let task = CountingTask::new(false);
        let handle = ScheduledTaskWorker::new(task.clone(), Duration::from_secs(60)).start();

        time::sleep(Duration::from_secs(30)).await;

        assert_eq!(handle.stop().await.unwrap(), 0);
        assert_eq!(task.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_do_not_stop_the_schedule() {
        let task = CountingTask::new(true);
        let handle = ScheduledTaskWorker::new(task.clone(), Duration::from_secs(10)).start();

        time::sleep(Duration::from_secs(35)).await;

        assert_eq!(handle.stop().await.unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_runs_after_stop() {
        let task = CountingTask::new(false);
        let handle = ScheduledTaskWorker::new(task.clone(), Duration::from_secs(10)).start();

        time::sleep(Duration::from_secs(15)).await;
        handle.stop().await.unwrap();
        time::sleep(Duration::from_secs(100)).await;

        assert_eq!(task.calls.load(Ordering::SeqCst), 1);
    }
}
