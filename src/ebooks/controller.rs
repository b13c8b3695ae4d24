use axum::{
    extract::{Query, State},
    http::header::{self, HeaderName},
};
use serde::Deserialize;
use tracing::{error, info};
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};
use crate::ebooks::command::get_ebooks_cmd::{GetEbooksCommand, GetEbooksCommandRequest};
use crate::report::renderer::CONTENT_TYPE;

#[derive(Debug, Default, Deserialize)]
pub struct EbooksQuery {
    pub author: Option<String>,
    pub lang: Option<String>,
}

pub type TextResponse = ([(HeaderName, &'static str); 1], String);

pub async fn get_ebooks(
    State(state): State<AppState>,
    Query(query): Query<EbooksQuery>) -> Result<TextResponse, ServerError> {
    let author = query.author.unwrap_or_else(|| state.config.default_author.to_string());
    let language = query.lang.unwrap_or_else(|| state.config.default_lang.to_string());
    info!("listing ebooks for author={:?} lang={:?}", author, language);

    let req = GetEbooksCommandRequest::new(author.as_str(), language.as_str());
    let res = GetEbooksCommand::new(state.catalog.clone()).execute(req).await.map_err(|err| {
        error!("listing ebooks for author={:?} failed: {:?}", author, err);
        ServerError::from(err)
    })?;
    Ok(([(header::CONTENT_TYPE, CONTENT_TYPE)], res.report))
}
