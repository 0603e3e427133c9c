//! Query-shaping arguments shared by the repository, the SQL builder and the in-memory store.

use serde_json::Value;

/// Upper bound on rows returned by a single query.
pub const MAX_TAKE: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    Eq { column: String, value: Value },
    In { column: String, values: Vec<Value> },
}

impl Filter {
    pub fn column(&self) -> &str {
        match self {
            Filter::Eq { column, .. } | Filter::In { column, .. } => column,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

/// Filters (AND-ed), ordering, and paging for a read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindArgs {
    pub filters: Vec<Filter>,
    pub order_by: Vec<OrderBy>,
    pub take: Option<u32>,
    pub skip: Option<u32>,
}

impl FindArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq {
            column: column.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn is_in<V: Into<Value>>(mut self, column: &str, values: impl IntoIterator<Item = V>) -> Self {
        self.filters.push(Filter::In {
            column: column.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order_by.push(OrderBy {
            column: column.to_string(),
            direction: Direction::Asc,
        });
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order_by.push(OrderBy {
            column: column.to_string(),
            direction: Direction::Desc,
        });
        self
    }

    pub fn take(mut self, n: u32) -> Self {
        self.take = Some(n);
        self
    }

    pub fn skip(mut self, n: u32) -> Self {
        self.skip = Some(n);
        self
    }

    /// Merges caller args with defaults. Defaults win: a default filter replaces any caller
    /// filter on the same column, a non-empty default ordering replaces the caller's, and
    /// default paging replaces caller paging.
    pub fn with_defaults(mut self, defaults: FindArgs) -> FindArgs {
        self.filters
            .retain(|f| !defaults.filters.iter().any(|d| d.column() == f.column()));
        self.filters.extend(defaults.filters);
        if !defaults.order_by.is_empty() {
            self.order_by = defaults.order_by;
        }
        self.take = defaults.take.or(self.take);
        self.skip = defaults.skip.or(self.skip);
        self
    }

    /// `take` clamped to [`MAX_TAKE`].
    pub fn effective_take(&self) -> Option<u32> {
        self.take.map(|n| n.min(MAX_TAKE))
    }
}
