use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::catalog::domain::model::SharedCatalog;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::LibraryResult;
use crate::gateway::events::{publish_or_warn, EventPublisher};
use crate::items::dto::ItemDto;

pub(crate) struct CheckoutServiceImpl {
    library_name: String,
    catalog: SharedCatalog,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, catalog: SharedCatalog,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            library_name: config.library_name.to_string(),
            catalog,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("library".to_string(), self.library_name.to_string())])
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn lend(&self, isbn: &str) -> LibraryResult<ItemDto> {
        let lent = self.catalog.write(|catalog| catalog.lend(isbn).map(ItemDto::from))?;
        let item = match lent {
            Ok(item) => item,
            Err(err) => {
                warn!(isbn, "item not available for lending");
                return Err(err);
            }
        };
        info!(isbn, title = %item.title, "item lent");
        publish_or_warn(self.events_publisher.as_ref(), DomainEvent::new(
            DomainEventType::ItemLent, isbn, &self.metadata(), &item)).await;
        Ok(item)
    }

    async fn returned(&self, isbn: &str) -> LibraryResult<usize> {
        let matched = self.catalog.write(|catalog| catalog.return_item(isbn))?;
        info!(isbn, matched, "items returned");
        if matched > 0 {
            publish_or_warn(self.events_publisher.as_ref(), DomainEvent::new(
                DomainEventType::ItemReturned, isbn, &self.metadata(), &isbn)).await;
        }
        Ok(matched)
    }
}
