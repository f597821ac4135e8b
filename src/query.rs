//! Translation-aware query construction.
//!
//! Logical column references coming from search, sort and filter requests are
//! rewritten into clauses against the translation store before they reach the
//! host's query builder.

mod adapter;
mod search;

pub use adapter::{
    QueryAdapter,
    TRANSLATIONS_RELATION,
};
pub use search::{
    SearchColumn,
    TranslatableColumn,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::model::TranslatableModel;

/// Database driver family of the query's connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Postgres,
    Mysql,
    Sqlite,
    Sqlsrv,
    Other,
}

impl ConnectionType {
    /// Maps a driver name (`pgsql`, `mysql`, ...) to a connection type.
    #[must_use]
    pub fn from_driver(driver: &str) -> Self {
        match driver.to_ascii_lowercase().as_str() {
            "pgsql" | "postgres" | "postgresql" => Self::Postgres,
            "mysql" | "mariadb" => Self::Mysql,
            "sqlite" => Self::Sqlite,
            "sqlsrv" => Self::Sqlsrv,
            _ => Self::Other,
        }
    }

    /// Pattern matching operator: case-insensitive `ilike` on Postgres,
    /// `like` elsewhere.
    #[must_use]
    pub const fn like_operator(self) -> &'static str {
        match self {
            Self::Postgres => "ilike",
            Self::Mysql | Self::Sqlite | Self::Sqlsrv | Self::Other => "like",
        }
    }
}

/// How a where clause combines with the preceding ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Boolean {
    And,
    Or,
}

impl Boolean {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `asc`/`desc` case-insensitively. Anything else, including an
    /// empty string, yields `None`.
    #[must_use]
    pub fn parse(direction: &str) -> Option<Self> {
        if direction.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if direction.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query builder capabilities consumed by [`QueryAdapter`] and localized
/// field filters.
pub trait TranslatableQuery {
    type Model: TranslatableModel;

    /// The record type being queried.
    fn model(&self) -> &Self::Model;

    fn connection_type(&self) -> ConnectionType;

    fn where_column(&mut self, column: &str, operator: &str, value: Value, boolean: Boolean);

    /// Constrains `attribute` in the translation store. `locale = None`
    /// matches a translation in any locale.
    fn where_translatable(
        &mut self,
        attribute: &str,
        value: Value,
        locale: Option<&str>,
        operator: &str,
        boolean: Boolean,
    );

    /// Groups the clauses added by `build` in parentheses.
    fn where_nested(&mut self, boolean: Boolean, build: &mut dyn FnMut(&mut Self));

    fn order_by(&mut self, column: &str, direction: SortDirection);

    fn order_by_translatable(&mut self, attribute: &str, direction: SortDirection, locale: &str);

    fn has_orders(&self) -> bool;

    /// Eager loads a relation.
    fn with_relation(&mut self, relation: &str);

    /// Removes the global scope that joins translations for the current locale.
    fn without_translations_scope(&mut self);
}
