use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::SharedCatalog;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::LibraryResult;
use crate::core::domain::Identifiable;
use crate::gateway::events::{publish_or_warn, EventPublisher};
use crate::items::domain::model::Item;
use crate::items::dto::ItemDto;

pub(crate) struct CatalogServiceImpl {
    catalog: SharedCatalog,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, catalog: SharedCatalog,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            catalog,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_item(&self, item: &ItemDto) -> LibraryResult<ItemDto> {
        let added = Item::from(item);
        let size = self.catalog.write(|catalog| {
            catalog.add(added);
            catalog.len()
        })?;
        info!(isbn = item.id(), kind = %item.kind, size, "item added");
        publish_or_warn(self.events_publisher.as_ref(), DomainEvent::new(
            DomainEventType::ItemAdded, item.id(), &HashMap::new(), item)).await;
        Ok(item.clone())
    }

    async fn remove_item(&self, isbn: &str) -> LibraryResult<usize> {
        let removed = self.catalog.write(|catalog| catalog.remove(isbn))?;
        info!(isbn, removed, "items removed");
        if removed > 0 {
            let metadata = HashMap::from([("removed".to_string(), removed.to_string())]);
            publish_or_warn(self.events_publisher.as_ref(), DomainEvent::new(
                DomainEventType::ItemRemoved, isbn, &metadata, &isbn)).await;
        }
        Ok(removed)
    }

    async fn available_items(&self) -> LibraryResult<Vec<ItemDto>> {
        let items = self.catalog.read(|catalog| {
            catalog.available_items().map(ItemDto::from).collect::<Vec<_>>()
        })?;
        debug!(count = items.len(), "available items listed");
        Ok(items)
    }

    async fn items_by_author(&self, author: &str) -> LibraryResult<Vec<ItemDto>> {
        let items = self.catalog.read(|catalog| {
            catalog.items_by_author(author).map(ItemDto::from).collect::<Vec<_>>()
        })?;
        debug!(author, count = items.len(), "items by author listed");
        Ok(items)
    }
}
