//! Static table definitions. The only source of SQL identifiers.

use crate::error::AppError;
use crate::query::FindArgs;

/// PostgreSQL column type, used for DDL and for parameter casts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PgType {
    Serial,
    Int4,
    Float8,
    Text,
    Bool,
    Timestamptz,
}

impl PgType {
    /// Type name for `$n::type` parameter casts.
    pub fn cast(self) -> &'static str {
        match self {
            PgType::Serial | PgType::Int4 => "int4",
            PgType::Float8 => "float8",
            PgType::Text => "text",
            PgType::Bool => "bool",
            PgType::Timestamptz => "timestamptz",
        }
    }

    pub fn ddl(self) -> &'static str {
        match self {
            PgType::Serial => "SERIAL",
            PgType::Int4 => "INTEGER",
            PgType::Float8 => "DOUBLE PRECISION",
            PgType::Text => "TEXT",
            PgType::Bool => "BOOLEAN",
            PgType::Timestamptz => "TIMESTAMPTZ",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub pg_type: PgType,
    pub nullable: bool,
    pub unique: bool,
    /// DDL default expression (e.g. `true`, `NOW()`).
    pub default: Option<&'static str>,
    /// Foreign key target: (table, column).
    pub references: Option<(&'static str, &'static str)>,
}

impl ColumnDef {
    pub const fn new(name: &'static str, pg_type: PgType) -> Self {
        ColumnDef {
            name,
            pg_type,
            nullable: false,
            unique: false,
            default: None,
            references: None,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn default(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    pub const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some((table, column));
        self
    }
}

#[derive(Debug)]
pub struct EntityDef {
    /// API type name (e.g. "Location").
    pub name: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
    pub columns: &'static [ColumnDef],
}

impl EntityDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether a lookup on `name` can match at most one row.
    pub fn is_unique(&self, name: &str) -> bool {
        name == self.primary_key || self.column(name).map(|c| c.unique).unwrap_or(false)
    }

    /// Rejects args naming columns this entity does not have.
    pub fn check(&self, args: &FindArgs) -> Result<(), AppError> {
        let filter_cols = args.filters.iter().map(|f| f.column());
        let order_cols = args.order_by.iter().map(|o| o.column.as_str());
        for col in filter_cols.chain(order_cols) {
            if self.column(col).is_none() {
                return Err(AppError::Validation(format!(
                    "unknown column '{}' on {}",
                    col, self.table
                )));
            }
        }
        Ok(())
    }
}
