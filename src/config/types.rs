//! Settings types and their defaults.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/led_configurator";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 4000);
pub const DEFAULT_CURRENCY_URL: &str = "https://www.cbr-xml-daily.ru/daily_json.js";
pub const DEFAULT_LOG_FILTER: &str = "led_configurator=info,tower_http=info";

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    /// Schema holding the catalog tables.
    pub schema: String,
    pub max_connections: u32,
    /// Create the database and catalog tables on start.
    pub run_migrations: bool,
}

#[derive(Clone, Debug)]
pub struct HttpConfig {
    pub bind_addr: SocketAddr,
    /// Allowed CORS origin for the frontend; `None` disables the CORS layer.
    pub cors_origin: Option<String>,
    pub body_limit_bytes: usize,
}

#[derive(Clone, Debug)]
pub struct CurrencyConfig {
    pub url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub http: HttpConfig,
    pub currency: CurrencyConfig,
    pub log_filter: String,
}
