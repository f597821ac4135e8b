//! Immutable runtime configuration.

use std::fmt;
use std::sync::Arc;

use super::{
    ConfigError,
    TranslatableSettings,
};
use crate::attribute::localize_attribute;

/// `(name, locale) -> display name` customizer.
#[derive(Clone)]
pub struct NameLocalizer(Arc<dyn Fn(&str, &str) -> String + Send + Sync>);

impl NameLocalizer {
    pub fn new(f: impl Fn(&str, &str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[must_use]
    pub fn localize(&self, name: &str, locale: &str) -> String {
        (self.0)(name, locale)
    }
}

impl fmt::Debug for NameLocalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NameLocalizer(..)")
    }
}

/// Process-wide defaults, built once at bootstrap and passed by reference
/// to [`crate::Fields`] and [`crate::QueryAdapter`].
#[derive(Debug, Clone)]
pub struct LocalizerConfig {
    locales: Vec<String>,
    fallback_locale: String,
    current_locale: String,
    separator: String,
    name_template: String,
    use_original_name: bool,
    name_localizer: Option<NameLocalizer>,
}

impl LocalizerConfig {
    /// Builds the runtime configuration from validated settings.
    ///
    /// # Errors
    /// Returns [`ConfigError::ValidationErrors`] when the settings are invalid.
    pub fn from_settings(settings: &TranslatableSettings) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        Ok(Self::from_valid_settings(settings))
    }

    fn from_valid_settings(settings: &TranslatableSettings) -> Self {
        Self {
            locales: settings.locales.clone(),
            fallback_locale: settings.fallback_locale.clone(),
            current_locale: settings
                .current_locale
                .clone()
                .unwrap_or_else(|| settings.fallback_locale.clone()),
            separator: settings.attribute_locale_separator.clone(),
            name_template: settings.name_template.clone(),
            use_original_name: settings.use_original_name,
            name_localizer: None,
        }
    }

    /// Replaces the name template with a custom function.
    #[must_use]
    pub fn localize_name_using(
        mut self,
        f: impl Fn(&str, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.name_localizer = Some(NameLocalizer::new(f));
        self
    }

    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    #[must_use]
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    #[must_use]
    pub fn current_locale(&self) -> &str {
        &self.current_locale
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub const fn use_original_name(&self) -> bool {
        self.use_original_name
    }

    /// Renders the display name of a field for `locale` using the global
    /// customizer, or the name template when none is set.
    #[must_use]
    pub fn localize_name(&self, name: &str, locale: &str) -> String {
        self.name_localizer.as_ref().map_or_else(
            || self.name_template.replace("{name}", name).replace("{locale}", locale),
            |localizer| localizer.localize(name, locale),
        )
    }

    #[must_use]
    pub fn localize_attribute(&self, attribute: &str, locale: &str) -> String {
        localize_attribute(attribute, locale, &self.separator)
    }
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self::from_valid_settings(&TranslatableSettings::default())
    }
}
