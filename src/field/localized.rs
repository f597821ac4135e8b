//! Locale-bound field decorator.
//!
//! A [`LocalizedField`] wraps a [`FieldSpec`] whose attribute has been
//! rewritten to `attribute + separator + locale`. Reads and writes of the
//! field are redirected to the record's translator using the original
//! attribute and the field's locale.

use serde_json::Value;

use super::{
    FieldSpec,
    Visibility,
};
use crate::attribute::{
    is_ambiguous_attribute,
    localize_attribute,
};
use crate::config::{
    LocalizerConfig,
    NameLocalizer,
};
use crate::error::FieldError;
use crate::model::{
    TranslatableModel,
    TranslatorError,
};
use crate::query::{
    Boolean,
    TranslatableQuery,
};
use crate::request::Request;
use crate::translator::{
    Translator,
    is_blank,
};

/// Per-field-set settings applied by [`localize`].
#[derive(Debug, Clone, Copy)]
pub struct LocalizeOptions<'a> {
    config: &'a LocalizerConfig,
    name_localizer: Option<&'a NameLocalizer>,
    original_name: Option<bool>,
    index_locales: Option<&'a [String]>,
    ignore_untouched: bool,
}

impl<'a> LocalizeOptions<'a> {
    #[must_use]
    pub const fn new(config: &'a LocalizerConfig) -> Self {
        Self {
            config,
            name_localizer: None,
            original_name: None,
            index_locales: None,
            ignore_untouched: false,
        }
    }

    /// Name customizer taking precedence over the global one.
    #[must_use]
    pub const fn name_localizer(mut self, name_localizer: Option<&'a NameLocalizer>) -> Self {
        self.name_localizer = name_localizer;
        self
    }

    /// Overrides the global "use original name" toggle.
    #[must_use]
    pub const fn original_name(mut self, original_name: Option<bool>) -> Self {
        self.original_name = original_name;
        self
    }

    /// Locales whose fields may appear on the index view.
    #[must_use]
    pub const fn index_locales(mut self, index_locales: Option<&'a [String]>) -> Self {
        self.index_locales = index_locales;
        self
    }

    #[must_use]
    pub const fn ignore_untouched(mut self, ignore_untouched: bool) -> Self {
        self.ignore_untouched = ignore_untouched;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &'a LocalizerConfig {
        self.config
    }

    fn display_name(&self, name: &str, locale: &str) -> Option<String> {
        if self.original_name.unwrap_or_else(|| self.config.use_original_name()) {
            return None;
        }

        Some(self.name_localizer.map_or_else(
            || self.config.localize_name(name, locale),
            |localizer| localizer.localize(name, locale),
        ))
    }
}

/// Binds `spec` to `locale`.
///
/// The caller hands over its own copy of the spec; fanning one base spec out
/// to several locales requires cloning it per locale.
///
/// # Errors
/// [`FieldError::AmbiguousAttribute`] when the attribute contains the
/// configured separator, [`FieldError::AmbiguousLocale`] when the locale does.
pub fn localize(
    mut spec: FieldSpec,
    locale: &str,
    options: &LocalizeOptions<'_>,
) -> Result<LocalizedField, FieldError> {
    let separator = options.config.separator();

    if is_ambiguous_attribute(&spec.attribute, separator) {
        return Err(FieldError::AmbiguousAttribute {
            attribute: spec.attribute,
            separator: separator.to_string(),
        });
    }

    if is_ambiguous_attribute(locale, separator) {
        return Err(FieldError::AmbiguousLocale {
            locale: locale.to_string(),
            separator: separator.to_string(),
        });
    }

    if let Some(name) = options.display_name(&spec.name, locale) {
        spec.name = name;
    }

    let original_attribute = std::mem::take(&mut spec.attribute);
    spec.attribute = localize_attribute(&original_attribute, locale, separator);

    if let Some(allowed) = options.index_locales {
        let allowed_locale = allowed.iter().any(|l| l == locale);
        let original = std::mem::take(&mut spec.show_on_index);
        spec.show_on_index =
            Visibility::when(move |request| original.is_visible(request) && allowed_locale);
    }

    tracing::trace!(attribute = %spec.attribute, locale, "Localized field");

    Ok(LocalizedField {
        spec,
        locale: locale.to_string(),
        original_attribute,
        ignore_untouched: options.ignore_untouched,
    })
}

/// A field bound to one locale.
#[derive(Debug, Clone)]
pub struct LocalizedField {
    spec: FieldSpec,
    locale: String,
    original_attribute: String,
    ignore_untouched: bool,
}

impl LocalizedField {
    #[must_use]
    pub const fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// The localized attribute, also the request key of the field.
    #[must_use]
    pub fn attribute(&self) -> &str {
        self.spec.attribute()
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn original_attribute(&self) -> &str {
        &self.original_attribute
    }

    #[must_use]
    pub const fn ignores_untouched(&self) -> bool {
        self.ignore_untouched
    }

    #[must_use]
    pub fn is_shown_on_index(&self, request: &Request) -> bool {
        self.spec.is_shown_on_index(request)
    }

    /// Applies `f` to the wrapped spec. The localized attribute is preserved.
    #[must_use]
    pub fn map_spec(mut self, f: impl FnOnce(FieldSpec) -> FieldSpec) -> Self {
        let attribute = std::mem::take(&mut self.spec.attribute);
        self.spec = f(self.spec);
        self.spec.attribute = attribute;
        self
    }

    #[must_use]
    pub fn merge_rules<I, S>(self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.map_spec(|spec| spec.merge_rules(rules))
    }

    /// Reads the translation for this field's locale, or the spec's default
    /// value (`null` if none) when missing.
    pub fn resolve<M: TranslatableModel>(&self, model: &M) -> Result<Value, TranslatorError<M>> {
        let default = self.spec.default_value().cloned().unwrap_or(Value::Null);

        model.translator().get_or(&self.original_attribute, &self.locale, default)
    }

    /// Writes the request value to the translator when [`Self::should_fill`]
    /// allows it. Returns whether a write happened.
    pub fn fill<M: TranslatableModel>(
        &self,
        request: &Request,
        model: &mut M,
    ) -> Result<bool, TranslatorError<M>> {
        if !self.should_fill(request, model)? {
            tracing::trace!(attribute = %self.attribute(), "Skipping fill");
            return Ok(false);
        }

        model.translator_mut().set(
            &self.original_attribute,
            request.value(self.attribute()),
            &self.locale,
        )?;

        Ok(true)
    }

    /// - The request lacks the field's key: no
    /// - The field was touched: yes
    /// - Otherwise: unless untouched fields are ignored
    pub fn should_fill<M: TranslatableModel>(
        &self,
        request: &Request,
        model: &M,
    ) -> Result<bool, TranslatorError<M>> {
        if !request.has(self.attribute()) {
            return Ok(false);
        }

        if self.is_touched(request, model)? {
            return Ok(true);
        }

        Ok(!self.ignore_untouched)
    }

    /// A field is touched when either the submitted value or the stored
    /// translation is non-blank. Clearing a stored value therefore counts as
    /// touched, but submitting blank over blank does not.
    pub fn is_touched<M: TranslatableModel>(
        &self,
        request: &Request,
        model: &M,
    ) -> Result<bool, TranslatorError<M>> {
        if request.get(self.attribute()).is_some_and(|value| !is_blank(value)) {
            return Ok(true);
        }

        let stored = model.translator().get(&self.original_attribute, &self.locale)?;

        Ok(stored.is_some_and(|value| !is_blank(&value)))
    }

    /// Constrains `query` to records whose translation in this field's
    /// locale equals `value`.
    pub fn apply_filter<Q: TranslatableQuery>(&self, query: &mut Q, value: Value) {
        query.where_translatable(
            &self.original_attribute,
            value,
            Some(&self.locale),
            "=",
            Boolean::And,
        );
    }
}
