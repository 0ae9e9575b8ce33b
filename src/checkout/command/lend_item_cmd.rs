use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct LendItemCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl LendItemCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LendItemCommandRequest {
    pub(crate) isbn: String,
}

impl LendItemCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct LendItemCommandResponse {
    pub item: ItemDto,
}

impl LendItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<LendItemCommandRequest, LendItemCommandResponse> for LendItemCommand {
    async fn execute(&self, req: LendItemCommandRequest) -> Result<LendItemCommandResponse, CommandError> {
        self.checkout_service.lend(req.isbn.as_str())
            .await.map_err(CommandError::from).map(LendItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::model::SharedCatalog;
    use crate::checkout::command::lend_item_cmd::{LendItemCommand, LendItemCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;
    use crate::items::domain::model::Item;

    #[tokio::test]
    async fn test_should_run_lend_item() {
        let catalog = SharedCatalog::default();
        catalog.write(|c| c.add(Item::physical("1984", "George Orwell", "111"))).expect("should write");
        let cmd = LendItemCommand::new(create_checkout_service(
            &Configuration::new("test"), catalog, create_publisher(GatewayPublisherVia::Memory)));

        let res = cmd.execute(LendItemCommandRequest::new("111".to_string())).await.expect("should lend item");
        assert_eq!("1984", res.item.title.as_str());
        assert!(res.item.is_lent);

        let err = cmd.execute(LendItemCommandRequest::new("111".to_string())).await.expect_err("should not lend");
        assert_eq!(CommandError::NotAvailable { message: "Book is not available for lending".to_string() }, err);
    }
}
