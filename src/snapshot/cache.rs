//! Process-lifetime snapshot memoization

use super::{PipelineError, SnapshotPipeline};
use crate::normalize::SnapshotTable;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Memoizes pipeline results by snapshot date
///
/// Entries never expire and are never revalidated; a new process starts
/// with an empty cache. Failed runs are not cached, so the next caller runs
/// the whole pipeline again. Concurrent misses for the same date may each
/// run the pipeline; the first result stored wins.
pub struct SnapshotCache {
    pipeline: SnapshotPipeline,
    tables: RwLock<HashMap<NaiveDate, Arc<SnapshotTable>>>,
}

impl SnapshotCache {
    /// Create an empty cache around a pipeline
    pub fn new(pipeline: SnapshotPipeline) -> Self {
        Self {
            pipeline,
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Cached table for `date`, running the pipeline on a miss
    pub async fn get_or_compute(&self, date: NaiveDate) -> Result<Arc<SnapshotTable>, PipelineError> {
        if let Some(table) = self.get(date).await {
            tracing::debug!(date = %date, "Snapshot cache hit");
            return Ok(table);
        }

        tracing::debug!(date = %date, "Snapshot cache miss");
        let table = Arc::new(self.pipeline.run(date).await?);

        let mut tables = self.tables.write().await;
        Ok(tables.entry(date).or_insert(table).clone())
    }

    /// Cached table for `date`, without running the pipeline
    pub async fn get(&self, date: NaiveDate) -> Option<Arc<SnapshotTable>> {
        self.tables.read().await.get(&date).cloned()
    }

    /// Number of cached dates
    pub async fn len(&self) -> usize {
        self.tables.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tables.read().await.is_empty()
    }
}
