use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::domain::model::DownloadSize;
use crate::items::dto::ItemDto;

pub(crate) struct AddItemCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddItemCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct AddItemCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    #[serde(default)]
    pub(crate) download_size_mb: Option<DownloadSize>,
}

impl AddItemCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, download_size_mb: Option<DownloadSize>) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            download_size_mb,
        }
    }

    pub fn build_item(&self) -> ItemDto {
        ItemDto::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str(), self.download_size_mb.clone())
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddItemCommandResponse {
    pub item: ItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand {
    async fn execute(&self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        let item = req.build_item();
        self.catalog_service.add_item(&item).await.map_err(CommandError::from).map(AddItemCommandResponse::new)
    }
}
