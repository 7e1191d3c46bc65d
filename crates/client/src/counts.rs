//! Per-status count aggregation
//!
//! The navigation bar shows live counts per status. They are derived from
//! three filtered list calls issued concurrently; there is no atomicity
//! across the three, so the sum may transiently disagree with the total
//! under concurrent mutation. The next refresh converges.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use todo_core::task::TaskStatus;

use crate::client::TodoClient;
use crate::Result;

/// How often the background refresh runs, matching the browser client
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Number of tasks in each status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoCounts {
    pub active: usize,
    pub completed: usize,
    pub deleted: usize,
}

impl TodoCounts {
    pub fn total(&self) -> usize {
        self.active + self.completed + self.deleted
    }
}

/// Last-known counts plus a staleness flag
///
/// `stale` is set when the most recent refresh failed; the counts themselves
/// are then the last ones successfully fetched.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountSnapshot {
    pub counts: TodoCounts,
    pub stale: bool,
}

/// Anything that can report how many tasks are in a given status
#[async_trait]
pub trait CountSource: Send + Sync {
    async fn count_by_status(&self, status: TaskStatus) -> Result<usize>;
}

#[async_trait]
impl CountSource for TodoClient {
    async fn count_by_status(&self, status: TaskStatus) -> Result<usize> {
        TodoClient::count_by_status(self, status).await
    }
}

pub struct CountAggregator {
    source: Arc<dyn CountSource>,
    state: RwLock<CountSnapshot>,
}

impl CountAggregator {
    pub fn new(source: Arc<dyn CountSource>) -> Arc<Self> {
        Arc::new(Self {
            source,
            state: RwLock::new(CountSnapshot::default()),
        })
    }

    /// Re-derive all three counts
    ///
    /// On any sub-call failure the last-known counts are kept and the
    /// snapshot is marked stale. No retry; the next timer tick or manual
    /// refresh tries again.
    pub async fn refresh(&self) {
        let fetched = tokio::try_join!(
            self.source.count_by_status(TaskStatus::Active),
            self.source.count_by_status(TaskStatus::Completed),
            self.source.count_by_status(TaskStatus::Deleted),
        );

        let mut state = self.state.write().await;
        match fetched {
            Ok((active, completed, deleted)) => {
                state.counts = TodoCounts {
                    active,
                    completed,
                    deleted,
                };
                state.stale = false;
            }
            Err(e) => {
                tracing::warn!("Count refresh failed: {}", e);
                state.stale = true;
            }
        }
    }

    /// Current counts and staleness
    pub async fn snapshot(&self) -> CountSnapshot {
        *self.state.read().await
    }

    /// Spawn the periodic refresh; abort the handle to stop it
    pub fn spawn_refresh(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let aggregator = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                aggregator.refresh().await;
            }
        })
    }
}
