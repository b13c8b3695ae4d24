use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryResult, PaginatedResult};

// VolumeQuery holds the caller's search terms, passed through to the catalog API as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeQuery {
    pub author: String,
    pub language: String,
}

impl VolumeQuery {
    pub fn new(author: &str, language: &str) -> Self {
        Self {
            author: author.to_string(),
            language: language.to_string(),
        }
    }
}

#[async_trait]
pub trait VolumeSource: Sync + Send {
    // fetches a single page of epub volumes starting at the zero-based offset
    async fn fetch_page(&self, query: &VolumeQuery,
                        start_index: usize, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>>;
}
