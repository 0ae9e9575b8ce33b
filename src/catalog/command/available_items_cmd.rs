use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct AvailableItemsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AvailableItemsCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct AvailableItemsCommandRequest {}

impl AvailableItemsCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AvailableItemsCommandResponse {
    pub items: Vec<ItemDto>,
}

impl AvailableItemsCommandResponse {
    pub fn new(items: Vec<ItemDto>) -> Self {
        Self {
            items,
        }
    }
}

#[async_trait]
impl Command<AvailableItemsCommandRequest, AvailableItemsCommandResponse> for AvailableItemsCommand {
    async fn execute(&self, _req: AvailableItemsCommandRequest) -> Result<AvailableItemsCommandResponse, CommandError> {
        self.catalog_service.available_items().await
            .map_err(CommandError::from).map(AvailableItemsCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::available_items_cmd::{AvailableItemsCommand, AvailableItemsCommandRequest};
    use crate::catalog::domain::model::SharedCatalog;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;
    use crate::items::domain::model::{DownloadSize, Item};

    #[tokio::test]
    async fn test_should_run_available_items() {
        let catalog = SharedCatalog::default();
        catalog.write(|c| {
            c.add(Item::physical("1984", "George Orwell", "111"));
            c.add(Item::digital("Dune", "Frank Herbert", "333", DownloadSize::parse("2.5").expect("size")));
            let _ = c.lend("111");
        }).expect("should write");
        let cmd = AvailableItemsCommand::new(factory::create_catalog_service(
            &Configuration::new("test"), catalog, create_publisher(GatewayPublisherVia::Memory)));

        let res = cmd.execute(AvailableItemsCommandRequest::new()).await.expect("should list items");
        assert_eq!(1, res.items.len());
        assert_eq!("333", res.items[0].isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_list_nothing_for_empty_catalog() {
        let cmd = AvailableItemsCommand::new(factory::create_catalog_service(
            &Configuration::new("test"), SharedCatalog::default(), create_publisher(GatewayPublisherVia::Memory)));
        let res = cmd.execute(AvailableItemsCommandRequest::new()).await.expect("should list items");
        assert!(res.items.is_empty());
    }
}
