//! Event bus port: publish/subscribe for care events.

use std::future::Future;

use petcare_domain::error::PetCareError;
use petcare_domain::event::CareEvent;

/// Publishes care events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: CareEvent) -> impl Future<Output = Result<(), PetCareError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: CareEvent) -> impl Future<Output = Result<(), PetCareError>> + Send {
        (**self).publish(event)
    }
}
