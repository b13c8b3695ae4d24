use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_volume_source;

pub fn create_catalog_service(config: &Configuration) -> LibraryResult<Box<dyn CatalogService>> {
    let source = create_volume_source(config)?;
    Ok(Box::new(CatalogServiceImpl::new(config, source)))
}
