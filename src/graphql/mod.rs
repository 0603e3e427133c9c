//! GraphQL schema over the catalog services.

mod node;
mod query;
mod types;

pub use node::{decode_global_id, encode_global_id, parse_id};
pub use query::QueryRoot;
pub use types::Node;

use crate::service::Services;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(services: Services) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(services)
        .limit_depth(12)
        .finish()
}
