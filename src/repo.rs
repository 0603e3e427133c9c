//! Generic repository: one typed read API over any catalog record.

use crate::error::AppError;
use crate::model::Record;
use crate::query::FindArgs;
use crate::store::Store;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

pub struct Repository<T> {
    store: Arc<dyn Store>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Repository {
            store: Arc::clone(&self.store),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Repository<T> {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Repository {
            store,
            _record: PhantomData,
        }
    }

    pub async fn find_many(&self, args: FindArgs) -> Result<Vec<T>, AppError> {
        T::ENTITY.check(&args)?;
        let rows = self.store.find_many(T::ENTITY, &args).await?;
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(AppError::from))
            .collect()
    }

    pub async fn find_first(&self, args: FindArgs) -> Result<Option<T>, AppError> {
        let rows = self.find_many(args.take(1)).await?;
        Ok(rows.into_iter().next())
    }

    /// Lookup on a unique column (or the primary key), narrowed by any extra `args` filters.
    /// Absence is `Ok(None)`.
    pub async fn find_unique(
        &self,
        column: &str,
        value: impl Into<Value>,
        args: FindArgs,
    ) -> Result<Option<T>, AppError> {
        if !T::ENTITY.is_unique(column) {
            return Err(AppError::Validation(format!(
                "'{}' is not a unique column of {}",
                column,
                T::ENTITY.table
            )));
        }
        self.find_first(args.with_defaults(FindArgs::new().eq(column, value)))
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<T>, AppError> {
        self.find_unique(T::ENTITY.primary_key, id, FindArgs::new()).await
    }
}
