//! Reference data behind the GraphQL types: lookups by id, active listings, relations.

use super::active_only;
use crate::error::AppError;
use crate::model::{Cabinet, CabinetCabinetSize, Item, Module, Record};
use crate::query::FindArgs;
use crate::repo::Repository;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn Store>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        CatalogService { store }
    }

    fn repo<T: Record>(&self) -> Repository<T> {
        Repository::new(Arc::clone(&self.store))
    }

    /// Row by primary key regardless of its active flag.
    pub async fn by_id<T: Record>(&self, id: i32) -> Result<Option<T>, AppError> {
        self.repo::<T>().find_by_id(id).await
    }

    /// Active rows ordered by id; tables without an active flag return everything.
    pub async fn list_active<T: Record>(&self, args: FindArgs) -> Result<Vec<T>, AppError> {
        let defaults = if T::ENTITY.column("active").is_some() {
            active_only()
        } else {
            FindArgs::new()
        };
        let args = args.with_defaults(defaults);
        let args = if args.order_by.is_empty() { args.order_asc("id") } else { args };
        self.repo::<T>().find_many(args).await
    }

    /// Active cabinets whose `column` (a foreign key such as `location_id`) equals `id`.
    pub async fn cabinets_referencing(&self, column: &str, id: i32) -> Result<Vec<Cabinet>, AppError> {
        self.list_active::<Cabinet>(FindArgs::new().eq(column, id)).await
    }

    pub async fn sizes_of_cabinet(&self, cabinet_id: i32) -> Result<Vec<CabinetCabinetSize>, AppError> {
        self.list_active::<CabinetCabinetSize>(FindArgs::new().eq("cabinet_id", cabinet_id))
            .await
    }

    pub async fn item_by_code(&self, code: &str) -> Result<Option<Item>, AppError> {
        self.repo::<Item>().find_unique("code", code, FindArgs::new()).await
    }

    pub async fn module_by_code(&self, code: &str) -> Result<Option<Module>, AppError> {
        self.repo::<Module>().find_unique("code", code, FindArgs::new()).await
    }
}
