/**
 * Expiry Sweeper
 *
 * `validate` deletes expired records it runs into, but tokens that are never
 * presented would otherwise stay in memory until restart. The sweeper purges
 * them on a fixed period.
 */

use crate::backend::tokens::store::TokenStore;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Spawn a task that purges expired tokens every `period`
///
/// A zero period is bumped to one second. The task stops if the store lock
/// is poisoned; abort the returned handle to stop it earlier.
pub fn spawn_sweeper(store: TokenStore, period: Duration) -> JoinHandle<()> {
    let period = if period.is_zero() {
        Duration::from_secs(1)
    } else {
        period
    };

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // first tick fires immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            match store.purge_expired() {
                Ok(0) => {}
                Ok(purged) => tracing::info!("[Tokens] Purged {} expired tokens", purged),
                Err(e) => {
                    tracing::error!("[Tokens] Stopping sweeper: {}", e);
                    break;
                }
            }
        }
    })
}
