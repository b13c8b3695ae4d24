pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryResult, PaginatedResult};

#[async_trait]
pub trait CatalogService: Sync + Send {
    // Aggregates every page for the author in the order received. `next_start_index` of
    // the result is set only when the page bound cut the search short.
    async fn fetch_all(&self, author: &str, language: &str) -> LibraryResult<PaginatedResult<BookEntity>>;
}
