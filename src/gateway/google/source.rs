use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};
use crate::books::domain::model::BookEntity;
use crate::books::dto::VolumesPageDto;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::gateway::volumes::{VolumeQuery, VolumeSource};

// Server-side projection, keeps each page down to the fields the report reads.
pub const VOLUME_FIELDS: &str =
    "items(id,accessInfo(epub/isAvailable),volumeInfo(title,subtitle,language,pageCount))";

const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug)]
pub struct GoogleBooksSource {
    client: Client,
    api_url: String,
}

impl GoogleBooksSource {
    pub fn new(client: Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.to_string(),
        }
    }
}

#[async_trait]
impl VolumeSource for GoogleBooksSource {
    async fn fetch_page(&self, query: &VolumeQuery,
                        start_index: usize, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let params = query_params(query, start_index, page_size);
        let resp = self.client.get(self.api_url.as_str()).query(&params).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!("catalog search startIndex={} returned {} ({} bytes)", start_index, status, body.len());
        decode_page(status, body.as_str(), start_index, page_size)
    }
}

pub(crate) fn query_params(query: &VolumeQuery, start_index: usize, page_size: usize) -> Vec<(&'static str, String)> {
    vec![
        ("q", format!("inauthor:{}", query.author)),
        ("startIndex", start_index.to_string()),
        ("maxResults", page_size.to_string()),
        ("langRestrict", query.language.to_string()),
        ("download", "epub".to_string()),
        ("printType", "books".to_string()),
        ("showPreorders", "true".to_string()),
        ("fields", VOLUME_FIELDS.to_string()),
    ]
}

pub(crate) fn decode_page(status: StatusCode, body: &str,
                          start_index: usize, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
    if !status.is_success() {
        let snippet: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        error!("catalog search startIndex={} failed with {}: {}", start_index, status, snippet);
        return Err(LibraryError::unavailable(
            format!("catalog search returned {} for startIndex {}: {}", status, start_index, snippet).as_str(),
            Some(status.as_u16())));
    }
    let page: VolumesPageDto = serde_json::from_str(body)?;
    let records = page.into_items().into_iter()
        .map(BookEntity::try_from)
        .collect::<LibraryResult<Vec<BookEntity>>>()?;
    Ok(PaginatedResult::page(start_index, page_size, records))
}
