//! Shared application state for all routes. Nothing in it is mutated after start.

use crate::currency::RateSource;
use crate::graphql::{build_schema, AppSchema};
use crate::service::Services;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub services: Services,
    pub rates: Arc<dyn RateSource>,
    pub schema: AppSchema,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, rates: Arc<dyn RateSource>) -> Self {
        let services = Services::new(Arc::clone(&store));
        let schema = build_schema(services.clone());
        AppState {
            store,
            services,
            rates,
            schema,
        }
    }
}
