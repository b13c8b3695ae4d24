use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::gateway::volumes::{VolumeQuery, VolumeSource};

// Canned answer for one page request; Err carries the HTTP status the upstream returns.
pub(crate) type CannedPage = Result<Vec<BookEntity>, u16>;

// InMemoryVolumeSource answers page requests from canned pages and records each
// (startIndex, maxResults) it was asked for, along with the query.
pub(crate) struct InMemoryVolumeSource {
    pages: Vec<CannedPage>,
    requests: Arc<Mutex<Vec<(usize, usize)>>>,
    queries: Arc<Mutex<Vec<VolumeQuery>>>,
}

impl InMemoryVolumeSource {
    pub(crate) fn new(pages: Vec<CannedPage>) -> Self {
        Self {
            pages,
            requests: Arc::new(Mutex::new(vec![])),
            queries: Arc::new(Mutex::new(vec![])),
        }
    }

    pub(crate) fn requests(&self) -> Arc<Mutex<Vec<(usize, usize)>>> {
        self.requests.clone()
    }

    pub(crate) fn queries(&self) -> Arc<Mutex<Vec<VolumeQuery>>> {
        self.queries.clone()
    }
}

#[async_trait]
impl VolumeSource for InMemoryVolumeSource {
    async fn fetch_page(&self, query: &VolumeQuery,
                        start_index: usize, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        self.queries.lock().expect("queries lock").push(query.clone());
        let call = {
            let mut requests = self.requests.lock().expect("requests lock");
            requests.push((start_index, page_size));
            requests.len() - 1
        };
        match self.pages.get(call) {
            Some(Ok(records)) => Ok(PaginatedResult::page(start_index, page_size, records.clone())),
            Some(Err(status)) => Err(LibraryError::unavailable("canned failure", Some(*status))),
            None => Ok(PaginatedResult::page(start_index, page_size, vec![])),
        }
    }
}

pub(crate) fn books(prefix: &str, count: usize) -> Vec<BookEntity> {
    (0..count).map(|i| BookEntity::new(format!("{}{}", prefix, i).as_str(),
                                       format!("{} {}", prefix, i).as_str(), true)).collect()
}
