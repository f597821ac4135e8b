//! Bootstrap configuration: the settings file, its validation and the
//! immutable [`LocalizerConfig`] threaded through the field factory and the
//! query adapter.

/// Bootstrap from the settings file
mod loader;
/// Runtime configuration built from validated settings
mod localizer;
/// Configuration types and settings
mod types;

pub use loader::SETTINGS_FILE_NAME;
pub use localizer::{
    LocalizerConfig,
    NameLocalizer,
};
pub use types::{
    ConfigError,
    DEFAULT_ATTRIBUTE_LOCALE_SEPARATOR,
    DEFAULT_NAME_TEMPLATE,
    TranslatableSettings,
    ValidationError,
};
