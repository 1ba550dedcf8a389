use crate::{MoveEngine, ShutdownCoordinator, StatusGateway};

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Periodic board refresh, bounded by the shutdown coordinator.
///
/// The first tick is consumed immediately (the views were just loaded); the
/// loop then refetches on every interval until shutdown fires. Dropping the
/// JoinHandle does not leak the timer — the broadcast still stops it.
pub struct BoardRefresher<G: StatusGateway> {
    engine: Arc<MoveEngine<G>>,
    interval: Duration,
}

impl<G: StatusGateway + 'static> BoardRefresher<G> {
    pub fn new(engine: Arc<MoveEngine<G>>, interval: Duration) -> Self {
        Self { engine, interval }
    }

    pub fn spawn(self, shutdown: &ShutdownCoordinator) -> JoinHandle<()> {
        let mut shutdown_rx = shutdown.subscribe();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        log::debug!("board refresher stopping");
                        break;
                    }
                    _ = ticker.tick() => {
                        if let Err(e) = self.engine.refresh_views().await {
                            log::warn!("board refresh failed: {}", e);
                        }
                    }
                }
            }
        })
    }
}
