//! LED configurator API: catalog and pricing reads over PostgreSQL, exposed as GraphQL and REST,
//! plus a currency-rate proxy.

pub mod config;
pub mod currency;
pub mod dist;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod query;
pub mod repo;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use currency::{RateSource, ReqwestRateSource};
pub use error::{AppError, ConfigError};
pub use graphql::{build_schema, AppSchema};
pub use migration::apply_migrations;
pub use query::FindArgs;
pub use repo::Repository;
pub use routes::app;
pub use service::Services;
pub use state::AppState;
pub use store::{MemoryStore, PgStore, Store};
