//! Row storage behind the repository: PostgreSQL in production, in-memory for tests and fixtures.

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::{connect, ensure_database_exists, PgStore};

use crate::error::AppError;
use crate::model::EntityDef;
use crate::query::FindArgs;
use async_trait::async_trait;
use serde_json::Value;

/// Executes reads against one entity. Rows come back as JSON objects keyed by column name.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_many(&self, entity: &EntityDef, args: &FindArgs) -> Result<Vec<Value>, AppError>;

    /// Cheap liveness probe for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
