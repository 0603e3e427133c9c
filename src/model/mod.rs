//! Entity catalog: table definitions and the typed records read from them.

pub mod catalog;
mod entity;
pub mod records;

pub use entity::{ColumnDef, EntityDef, PgType};
pub use records::*;
