//! translatable-fields
//!
//! Per-locale field fanout for admin panel resources: one logical attribute
//! becomes one virtual field per locale, whose reads, writes, searches and
//! sorts are routed through a per-record translation store.

pub mod attribute;
pub mod collection;
pub mod config;
pub mod error;
pub mod field;
pub mod fields;
pub mod model;
pub mod query;
pub mod request;
#[cfg(test)]
mod test_utils;
pub mod translator;

pub use collection::FieldCollection;
pub use config::{
    ConfigError,
    LocalizerConfig,
    TranslatableSettings,
};
pub use error::FieldError;
pub use field::localized::{
    LocalizeOptions,
    LocalizedField,
    localize,
};
pub use field::{
    FieldSpec,
    IntoFields,
    Visibility,
};
pub use fields::{
    Fields,
    FieldsResolver,
    localize_fields,
};
pub use model::TranslatableModel;
pub use query::{
    ConnectionType,
    QueryAdapter,
    SortDirection,
    TranslatableQuery,
};
pub use request::Request;
pub use translator::{
    InMemoryTranslator,
    Translator,
};
