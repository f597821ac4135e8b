use thiserror::Error;

/// Errors raised while localizing field definitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The logical attribute contains the locale separator, so its
    /// localized key could not be decoded back unambiguously
    #[error("Attribute '{attribute}' contains the locale separator '{separator}'")]
    AmbiguousAttribute { attribute: String, separator: String },

    /// The locale contains the separator, so keys built from it would
    /// decode into a different attribute and locale
    #[error("Locale '{locale}' contains the locale separator '{separator}'")]
    AmbiguousLocale { locale: String, separator: String },
}
