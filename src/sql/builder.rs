//! Builds parameterized SELECT statements from an entity definition and [`FindArgs`].

use crate::model::EntityDef;
use crate::query::{Direction, Filter, FindArgs};
use serde_json::Value;

/// Quote identifier for PostgreSQL (safe: only from the catalog).
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub(crate) fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn select_column_list(entity: &EntityDef) -> String {
    entity
        .columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Placeholder with a cast to the column type so text-encoded and int8 params coerce.
fn placeholder(entity: &EntityDef, column: &str, n: u32) -> String {
    entity
        .column(column)
        .map(|c| format!("${}::{}", n, c.pg_type.cast()))
        .unwrap_or_else(|| format!("${}", n))
}

/// SELECT with AND-ed filters, ordering (primary key when none given), LIMIT and OFFSET.
/// Columns are assumed checked against the entity (see [`EntityDef::check`]).
pub fn select(entity: &EntityDef, args: &FindArgs, schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, entity.table);

    let mut where_parts = Vec::new();
    for filter in &args.filters {
        match filter {
            Filter::Eq { column, value: Value::Null } => {
                where_parts.push(format!("{} IS NULL", quoted(column)));
            }
            Filter::Eq { column, value } => {
                let n = q.push_param(value.clone());
                where_parts.push(format!("{} = {}", quoted(column), placeholder(entity, column, n)));
            }
            Filter::In { values, .. } if values.is_empty() => {
                where_parts.push("1 = 0".to_string());
            }
            Filter::In { column, values } => {
                let placeholders: Vec<String> = values
                    .iter()
                    .map(|v| {
                        let n = q.push_param(v.clone());
                        placeholder(entity, column, n)
                    })
                    .collect();
                where_parts.push(format!("{} IN ({})", quoted(column), placeholders.join(", ")));
            }
        }
    }

    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    let order_parts: Vec<String> = if args.order_by.is_empty() {
        vec![quoted(entity.primary_key)]
    } else {
        args.order_by
            .iter()
            .map(|o| match o.direction {
                Direction::Asc => format!("{} ASC", quoted(&o.column)),
                Direction::Desc => format!("{} DESC", quoted(&o.column)),
            })
            .collect()
    };
    let order_clause = format!(" ORDER BY {}", order_parts.join(", "));
    let limit_clause = args
        .effective_take()
        .map(|n| format!(" LIMIT {}", n))
        .unwrap_or_default();
    let offset_clause = args.skip.map(|n| format!(" OFFSET {}", n)).unwrap_or_default();
    q.sql = format!(
        "SELECT {} FROM {}{}{}{}{}",
        select_column_list(entity),
        table,
        where_clause,
        order_clause,
        limit_clause,
        offset_clause
    );
    q
}
