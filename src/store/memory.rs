//! In-memory [`Store`] over JSON rows. Evaluates [`FindArgs`] the way the SQL builder renders
//! them and keeps a log of queried tables.

use super::Store;
use crate::error::AppError;
use crate::model::EntityDef;
use crate::query::{Direction, Filter, FindArgs};
use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    tables: HashMap<String, Vec<Value>>,
    log: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a fixture object: `{ "table_name": [row, ...], ... }`.
    pub fn from_fixture(fixture: Value) -> Result<Self, AppError> {
        let Value::Object(tables) = fixture else {
            return Err(AppError::BadRequest("fixture must be a JSON object".into()));
        };
        let mut store = Self::new();
        for (table, rows) in tables {
            match rows {
                Value::Array(rows) => {
                    store.tables.insert(table, rows);
                }
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "fixture table '{}' must be an array",
                        table
                    )))
                }
            }
        }
        Ok(store)
    }

    pub fn with_rows(mut self, table: &str, rows: Vec<Value>) -> Self {
        self.tables.entry(table.to_string()).or_default().extend(rows);
        self
    }

    /// Tables queried so far, in call order.
    pub fn queried_tables(&self) -> Vec<String> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn query_count(&self, table: &str) -> usize {
        self.queried_tables().iter().filter(|t| *t == table).count()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_many(&self, entity: &EntityDef, args: &FindArgs) -> Result<Vec<Value>, AppError> {
        if let Ok(mut log) = self.log.lock() {
            log.push(entity.table.to_string());
        }
        tracing::debug!(table = entity.table, args = ?args, "memory query");
        let rows = self.tables.get(entity.table).map(Vec::as_slice).unwrap_or(&[]);
        let mut out: Vec<Value> = rows
            .iter()
            .filter(|row| args.filters.iter().all(|f| matches(row, f)))
            .cloned()
            .collect();

        let pk = entity.primary_key;
        out.sort_by(|a, b| {
            if args.order_by.is_empty() {
                return compare(field(a, pk), field(b, pk));
            }
            for o in &args.order_by {
                let ord = compare(field(a, &o.column), field(b, &o.column));
                let ord = match o.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });

        let skip = args.skip.unwrap_or(0) as usize;
        let take = args.effective_take().map(|n| n as usize).unwrap_or(usize::MAX);
        Ok(out.into_iter().skip(skip).take(take).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

fn field<'a>(row: &'a Value, column: &str) -> &'a Value {
    row.get(column).unwrap_or(&Value::Null)
}

fn matches(row: &Value, filter: &Filter) -> bool {
    match filter {
        Filter::Eq { column, value } => same(field(row, column), value),
        Filter::In { column, values } => values.iter().any(|v| same(field(row, column), v)),
    }
}

fn same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// NULLs sort last, as in PostgreSQL ascending order.
fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
