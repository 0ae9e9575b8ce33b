use async_trait::async_trait;
use tracing::warn;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;

    // events kept by the publisher, empty for publishers that forward them
    fn published(&self) -> Vec<DomainEvent> {
        vec![]
    }
}

// Publishes an event for a catalog change that already happened. A failure is
// logged and not returned, the change stands either way.
pub async fn publish_or_warn(publisher: &dyn EventPublisher, event: serde_json::Result<DomainEvent>) {
    let published = match event {
        Ok(event) => publisher.publish(&event).await.map_err(|err| (event.name.clone(), err)),
        Err(err) => Err((String::new(), LibraryError::from(err))),
    };
    if let Err((name, err)) = published {
        warn!(event = %name, %err, "failed to publish catalog event");
    }
}
