//! In-process care event bus.
//!
//! Every persisted feed, play, and decay is fanned out over a tokio
//! [`broadcast`] channel. A subscriber that falls more than `capacity`
//! events behind loses the oldest ones and sees
//! [`RecvError::Lagged`](broadcast::error::RecvError::Lagged) once; the
//! pets themselves are unaffected because events are sent after the write.

use std::future::Future;

use tokio::sync::broadcast;

use petcare_domain::error::PetCareError;
use petcare_domain::event::CareEvent;

use crate::ports::EventPublisher;

/// Broadcast bus for [`CareEvent`]s within one process.
pub struct InProcessEventBus {
    sender: broadcast::Sender<CareEvent>,
}

impl InProcessEventBus {
    /// Create a bus that buffers up to `capacity` undelivered events per
    /// subscriber.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Receive every care event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CareEvent> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: CareEvent) -> impl Future<Output = Result<(), PetCareError>> + Send {
        // send only fails when nobody is subscribed
        let _ = self.sender.send(event);
        async { Ok(()) }
    }
}
