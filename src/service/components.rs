//! Component associations: which items (and how many) make up a cabinet or a module.

use super::active_only;
use crate::error::AppError;
use crate::model::{CabinetItem, ModuleItem};
use crate::query::FindArgs;
use crate::repo::Repository;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct ComponentService {
    cabinet_items: Repository<CabinetItem>,
    module_items: Repository<ModuleItem>,
}

impl ComponentService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        ComponentService {
            cabinet_items: Repository::new(Arc::clone(&store)),
            module_items: Repository::new(store),
        }
    }

    pub async fn find_by_cabinet_code(&self, code: &str, args: FindArgs) -> Result<Vec<CabinetItem>, AppError> {
        let defaults = active_only().eq("cabinet_code", code).order_asc("id");
        self.cabinet_items.find_many(args.with_defaults(defaults)).await
    }

    pub async fn find_by_module_code(&self, code: &str, args: FindArgs) -> Result<Vec<ModuleItem>, AppError> {
        let defaults = active_only().eq("module_code", code).order_asc("id");
        self.module_items.find_many(args.with_defaults(defaults)).await
    }
}
