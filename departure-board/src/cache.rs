//! Snapshot store for previously assembled journeys.
//!
//! The board reuses journeys from the last poll instead of refetching them,
//! so the caller has to keep that last result around. This cache holds it
//! per (origin stop, line), bounded in size and age.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{LineId, ResolvedJourney, StopId};

/// Cache key: (origin stop, line).
type SnapshotKey = (StopId, LineId);

/// A stored journey list.
type Snapshot = Arc<Vec<ResolvedJourney>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached snapshots.
    pub ttl: Duration,

    /// Maximum number of cached snapshots.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 256,
        }
    }
}

/// Last assembled journeys for each stop and line.
pub struct JourneyCache {
    snapshots: MokaCache<SnapshotKey, Snapshot>,
}

impl JourneyCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let snapshots = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { snapshots }
    }

    /// The last stored journeys, or an empty list.
    pub async fn get(&self, stop: &StopId, line: &LineId) -> Snapshot {
        self.snapshots
            .get(&(stop.clone(), line.clone()))
            .await
            .unwrap_or_default()
    }

    /// Replace the stored journeys.
    pub async fn store(&self, stop: StopId, line: LineId, journeys: Vec<ResolvedJourney>) {
        self.snapshots.insert((stop, line), Arc::new(journeys)).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.snapshots.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.snapshots.invalidate_all();
    }
}
