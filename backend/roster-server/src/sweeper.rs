use roster_cache::CacheStore;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Periodically delete expired cache entries.
///
/// Reads already ignore expired entries; the sweep only reclaims space.
pub fn spawn_sweeper(store: Arc<dyn CacheStore>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match store.purge_expired().await {
                Ok(0) => debug!("Cache sweep: nothing expired"),
                Ok(purged) => info!("Cache sweep: purged {} expired entries", purged),
                Err(e) => warn!("Cache sweep failed: {}", e),
            }
        }
    })
}
