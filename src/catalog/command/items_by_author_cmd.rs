use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct ItemsByAuthorCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ItemsByAuthorCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsByAuthorCommandRequest {
    pub(crate) author: String,
}

impl ItemsByAuthorCommandRequest {
    pub fn new(author: String) -> Self {
        Self {
            author,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ItemsByAuthorCommandResponse {
    pub author: String,
    pub items: Vec<ItemDto>,
}

impl ItemsByAuthorCommandResponse {
    pub fn new(author: String, items: Vec<ItemDto>) -> Self {
        Self {
            author,
            items,
        }
    }
}

#[async_trait]
impl Command<ItemsByAuthorCommandRequest, ItemsByAuthorCommandResponse> for ItemsByAuthorCommand {
    async fn execute(&self, req: ItemsByAuthorCommandRequest) -> Result<ItemsByAuthorCommandResponse, CommandError> {
        let items = self.catalog_service.items_by_author(req.author.as_str()).await.map_err(CommandError::from)?;
        Ok(ItemsByAuthorCommandResponse::new(req.author, items))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::items_by_author_cmd::{ItemsByAuthorCommand, ItemsByAuthorCommandRequest};
    use crate::catalog::domain::model::SharedCatalog;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;
    use crate::items::domain::model::Item;

    #[tokio::test]
    async fn test_should_run_items_by_author() {
        let catalog = SharedCatalog::default();
        catalog.write(|c| {
            c.add(Item::physical("1984", "George Orwell", "111"));
            c.add(Item::physical("Animal Farm", "george orwell", "112"));
            c.add(Item::physical("Emma", "Jane Austen", "222"));
            let _ = c.lend("112");
        }).expect("should write");
        let cmd = ItemsByAuthorCommand::new(factory::create_catalog_service(
            &Configuration::new("test"), catalog, create_publisher(GatewayPublisherVia::Memory)));

        let res = cmd.execute(ItemsByAuthorCommandRequest::new("George Orwell".to_string()))
            .await.expect("should list items");
        assert_eq!("George Orwell", res.author.as_str());
        assert_eq!(vec!["1984", "Animal Farm"], res.items.iter().map(|i| i.title.as_str()).collect::<Vec<_>>());
        assert!(res.items[1].is_lent);
    }
}
