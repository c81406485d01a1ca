//! Decay sweeper: periodically applies decay to every pet.
//!
//! Idle pets only decay when something recomputes them. The sweeper runs
//! [`PetCareService::sweep_decay`] on a fixed interval so their stored stats
//! (and therefore anything rendered from storage) keep up with the clock.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ports::{Clock, EventPublisher, PetRepository};
use crate::services::pet_care_service::PetCareService;

/// Handle to a running background sweep loop.
pub struct DecaySweeper {
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl DecaySweeper {
    /// Spawn the sweep loop. The first sweep runs immediately, then one
    /// every `interval`.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn start<R, P, C>(service: Arc<PetCareService<R, P, C>>, interval: Duration) -> Self
    where
        R: PetRepository + Send + Sync + 'static,
        P: EventPublisher + Send + Sync + 'static,
        C: Clock + Send + Sync + 'static,
    {
        let (shutdown, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(run(service, interval, shutdown_rx));
        tracing::info!(interval_secs = interval.as_secs(), "decay sweeper started");
        Self { shutdown, handle }
    }

    /// Signal the loop to stop and wait for it to finish its current sweep.
    pub async fn stop(self) {
        // the receiver is gone only if the task already ended
        let _ = self.shutdown.send(());
        if let Err(err) = self.handle.await {
            tracing::warn!(%err, "decay sweeper task ended abnormally");
        }
        tracing::info!("decay sweeper stopped");
    }
}

async fn run<R, P, C>(
    service: Arc<PetCareService<R, P, C>>,
    interval: Duration,
    mut shutdown: oneshot::Receiver<()>,
) where
    R: PetRepository,
    P: EventPublisher,
    C: Clock,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => match service.sweep_decay().await {
                Ok(updated) => tracing::debug!(updated, "periodic decay sweep done"),
                Err(err) => tracing::warn!(%err, "decay sweep failed, retrying next interval"),
            },
        }
    }
}
