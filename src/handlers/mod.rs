//! HTTP handlers for the currency proxy, REST pricing lookups, and GraphQL.

pub mod currency;
pub mod graphql;
pub mod pricing;
pub use currency::*;
pub use graphql::*;
pub use pricing::*;
