use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::items::dto::ItemDto;

pub mod service;

#[async_trait]
pub trait CheckoutService: Sync + Send {
    async fn lend(&self, isbn: &str) -> LibraryResult<ItemDto>;
    async fn returned(&self, isbn: &str) -> LibraryResult<usize>;
}
