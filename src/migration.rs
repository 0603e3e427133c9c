//! Apply the catalog to the database: CREATE SCHEMA, then CREATE TABLE per entity with unique
//! constraints and foreign keys. Idempotent (IF NOT EXISTS throughout).

use crate::error::AppError;
use crate::model::{catalog, EntityDef};
use crate::sql::{qualified_table, quoted};
use sqlx::PgPool;

/// DDL for one entity. Referenced tables are qualified with the same schema.
pub fn create_table_sql(entity: &EntityDef, schema: &str) -> String {
    let mut defs: Vec<String> = Vec::new();
    for c in entity.columns {
        let mut def = format!("{} {}", quoted(c.name), c.pg_type.ddl());
        if c.name == entity.primary_key {
            def.push_str(" PRIMARY KEY");
        } else if !c.nullable {
            def.push_str(" NOT NULL");
        }
        if let Some(d) = c.default {
            def.push_str(" DEFAULT ");
            def.push_str(d);
        }
        defs.push(def);
    }
    for c in entity.columns.iter().filter(|c| c.unique) {
        defs.push(format!("UNIQUE ({})", quoted(c.name)));
    }
    for c in entity.columns {
        if let Some((table, column)) = c.references {
            defs.push(format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                quoted(c.name),
                qualified_table(schema, table),
                quoted(column)
            ));
        }
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        qualified_table(schema, entity.table),
        defs.join(",\n  ")
    )
}

pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
        .execute(pool)
        .await?;
    for entity in catalog::ALL {
        let sql = create_table_sql(entity, schema);
        tracing::debug!(table = entity.table, sql = %sql, "migrate");
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!(schema, tables = catalog::ALL.len(), "catalog schema applied");
    Ok(())
}
