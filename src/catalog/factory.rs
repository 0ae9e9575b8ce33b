use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::SharedCatalog;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;

pub fn create_catalog_service(config: &Configuration, catalog: SharedCatalog,
                              publisher: Arc<dyn EventPublisher>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, catalog, publisher))
}
