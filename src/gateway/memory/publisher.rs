use std::sync::Mutex;
use async_trait::async_trait;
use tracing::warn;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps every published event in publish order.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: Mutex<Vec<DomainEvent>>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.lock()?.push(event.clone());
        Ok(())
    }

    fn published(&self) -> Vec<DomainEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => {
                warn!("memory publisher lock poisoned, reading the events kept so far");
                poisoned.into_inner().clone()
            }
        }
    }
}
