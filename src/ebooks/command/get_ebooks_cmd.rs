use std::sync::Arc;
use async_trait::async_trait;
use tracing::warn;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::report::renderer::render;

pub struct GetEbooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetEbooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct GetEbooksCommandRequest {
    pub author: String,
    pub language: String,
}

impl GetEbooksCommandRequest {
    pub fn new(author: &str, language: &str) -> Self {
        Self {
            author: author.to_string(),
            language: language.to_string(),
        }
    }

    // author and language are otherwise sent verbatim, the catalog search decides what they match
    fn validate(&self) -> Result<(), LibraryError> {
        if self.author.is_empty() {
            return Err(LibraryError::validation("author must not be empty", Some("author".to_string())));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct GetEbooksCommandResponse {
    pub report: String,
}

impl GetEbooksCommandResponse {
    pub fn new(report: String) -> Self {
        Self {
            report,
        }
    }
}

#[async_trait]
impl Command<GetEbooksCommandRequest, GetEbooksCommandResponse> for GetEbooksCommand {
    async fn execute(&self, req: GetEbooksCommandRequest) -> Result<GetEbooksCommandResponse, CommandError> {
        req.validate()?;
        let res = self.catalog_service.fetch_all(req.author.as_str(), req.language.as_str()).await?;
        if res.has_more() {
            warn!("rendering a truncated list of {} volumes for {:?}", res.records.len(), req.author);
        }
        let report = render(req.author.as_str(), req.language.as_str(), &res.records);
        Ok(GetEbooksCommandResponse::new(report))
    }
}
