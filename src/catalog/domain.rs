pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::items::dto::ItemDto;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_item(&self, item: &ItemDto) -> LibraryResult<ItemDto>;
    async fn remove_item(&self, isbn: &str) -> LibraryResult<usize>;
    async fn available_items(&self) -> LibraryResult<Vec<ItemDto>>;
    async fn items_by_author(&self, author: &str) -> LibraryResult<Vec<ItemDto>>;
}
