use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveItemCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveItemCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveItemCommandRequest {
    pub(crate) isbn: String,
}

impl RemoveItemCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RemoveItemCommandResponse {
    pub removed: usize,
}

impl RemoveItemCommandResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveItemCommandRequest, RemoveItemCommandResponse> for RemoveItemCommand {
    async fn execute(&self, req: RemoveItemCommandRequest) -> Result<RemoveItemCommandResponse, CommandError> {
        self.catalog_service.remove_item(req.isbn.as_str()).await
            .map_err(CommandError::from).map(RemoveItemCommandResponse::new)
    }
}
