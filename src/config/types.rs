use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Template used to render localized field names when nothing else is configured.
pub const DEFAULT_NAME_TEMPLATE: &str = "{name} ({locale})";

/// Separator placed between the logical attribute and the locale.
pub const DEFAULT_ATTRIBUTE_LOCALE_SEPARATOR: &str = "__";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "locales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Application-wide translatable settings, read once at bootstrap.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatableSettings {
    /// Locales every translatable field is fanned out to, in display order.
    pub locales: Vec<String>,

    /// Locale treated as the required, default variant.
    pub fallback_locale: String,

    /// Locale of the running application.
    /// Falls back to `fallback_locale` when unset.
    pub current_locale: Option<String>,

    pub attribute_locale_separator: String,

    /// Display name template. `{name}` and `{locale}` are substituted.
    pub name_template: String,

    /// Keep the base field name instead of rendering `name_template`.
    pub use_original_name: bool,
}

impl TranslatableSettings {
    /// # Errors
    /// - Required field is empty
    /// - Duplicate locale
    /// - Locale containing the attribute separator
    /// - Fallback or current locale missing from `locales`
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.attribute_locale_separator.is_empty() {
            errors.push(ValidationError::new(
                "attributeLocaleSeparator",
                "The separator cannot be empty. Please specify a separator, for example: \"__\"",
            ));
        }

        if self.locales.is_empty() {
            errors.push(ValidationError::new(
                "locales",
                "At least one locale is required. Example: [\"en\", \"fr\"]",
            ));
        }

        let mut seen = HashSet::new();
        for (index, locale) in self.locales.iter().enumerate() {
            if locale.is_empty() {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    "The locale cannot be empty",
                ));
                continue;
            }

            if !seen.insert(locale.as_str()) {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    format!("Duplicate locale '{locale}'"),
                ));
            }

            if !self.attribute_locale_separator.is_empty()
                && locale.contains(&self.attribute_locale_separator)
            {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    format!(
                        "Locale '{locale}' contains the attribute separator '{}'",
                        self.attribute_locale_separator
                    ),
                ));
            }
        }

        if self.fallback_locale.is_empty() {
            errors.push(ValidationError::new(
                "fallbackLocale",
                "The fallback locale cannot be empty. Example: \"en\"",
            ));
        } else if !self.locales.is_empty() && !self.locales.contains(&self.fallback_locale) {
            errors.push(ValidationError::new(
                "fallbackLocale",
                format!("Fallback locale '{}' is not listed in 'locales'", self.fallback_locale),
            ));
        }

        if let Some(current) = &self.current_locale
            && !self.locales.is_empty()
            && !self.locales.contains(current)
        {
            errors.push(ValidationError::new(
                "currentLocale",
                format!("Current locale '{current}' is not listed in 'locales'"),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for TranslatableSettings {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string()],
            fallback_locale: "en".to_string(),
            current_locale: None,
            attribute_locale_separator: DEFAULT_ATTRIBUTE_LOCALE_SEPARATOR.to_string(),
            name_template: DEFAULT_NAME_TEMPLATE.to_string(),
            use_original_name: false,
        }
    }
}
