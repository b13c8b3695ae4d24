use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::google::source::GoogleBooksSource;
use crate::gateway::volumes::VolumeSource;
use crate::utils::http::build_http_client;

pub fn create_volume_source(config: &Configuration) -> LibraryResult<Box<dyn VolumeSource>> {
    let client = build_http_client(config)?;
    Ok(Box::new(GoogleBooksSource::new(client, config.api_url.as_str())))
}
