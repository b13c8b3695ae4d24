use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::gateway::volumes::{VolumeQuery, VolumeSource};

pub struct CatalogServiceImpl {
    volume_source: Box<dyn VolumeSource>,
    page_size: usize,
    max_pages: usize,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, volume_source: Box<dyn VolumeSource>) -> Self {
        Self {
            volume_source,
            page_size: config.page_size,
            max_pages: config.max_pages,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn fetch_all(&self, author: &str, language: &str) -> LibraryResult<PaginatedResult<BookEntity>> {
        let query = VolumeQuery::new(author, language);
        let mut records = vec![];
        let mut next_start_index = Some(0);
        let mut pages = 0;

        // each offset depends on the previous page being full, so pages are fetched one by one
        while let Some(start_index) = next_start_index {
            if pages == self.max_pages {
                warn!("stopped catalog search for {:?} after {} pages, {} volumes fetched",
                    author, pages, records.len());
                break;
            }
            let page = self.volume_source.fetch_page(&query, start_index, self.page_size).await?;
            pages += 1;
            info!("fetched {} volumes at startIndex {}", page.records.len(), start_index);
            next_start_index = page.next_start_index;
            records.extend(page.records);
        }

        Ok(PaginatedResult::new(0, self.page_size, next_start_index, records))
    }
}
