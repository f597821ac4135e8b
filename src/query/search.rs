//! Search columns.

use serde_json::Value;

use super::{
    Boolean,
    TranslatableQuery,
};

fn like_pattern(search: &str) -> Value {
    Value::String(format!("%{search}%"))
}

/// A searchable column stored in the translation store.
///
/// Matches the search term in any locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableColumn {
    column: String,
}

impl TranslatableColumn {
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self { column: column.into() }
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn apply<Q: TranslatableQuery>(&self, query: &mut Q, search: &str, boolean: Boolean) {
        let operator = query.connection_type().like_operator();

        query.where_translatable(&self.column, like_pattern(search), None, operator, boolean);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchColumn {
    /// A column of the record's own table.
    Column(String),
    Translatable(TranslatableColumn),
}

impl SearchColumn {
    pub fn apply<Q: TranslatableQuery>(&self, query: &mut Q, search: &str, boolean: Boolean) {
        match self {
            Self::Column(column) => {
                let operator = query.connection_type().like_operator();
                query.where_column(column, operator, like_pattern(search), boolean);
            }
            Self::Translatable(column) => column.apply(query, search, boolean),
        }
    }
}

impl From<&str> for SearchColumn {
    fn from(column: &str) -> Self {
        Self::Column(column.to_string())
    }
}

impl From<String> for SearchColumn {
    fn from(column: String) -> Self {
        Self::Column(column)
    }
}

impl From<TranslatableColumn> for SearchColumn {
    fn from(column: TranslatableColumn) -> Self {
        Self::Translatable(column)
    }
}
