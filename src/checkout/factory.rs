use std::sync::Arc;
use crate::catalog::domain::model::SharedCatalog;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;

pub fn create_checkout_service(config: &Configuration, catalog: SharedCatalog,
                               publisher: Arc<dyn EventPublisher>) -> Box<dyn CheckoutService> {
    Box::new(CheckoutServiceImpl::new(config, catalog, publisher))
}
