//! Fields factory: fans a single-locale field resolver out over a locale list.

use std::fmt;

use crate::collection::FieldCollection;
use crate::config::{
    LocalizerConfig,
    NameLocalizer,
};
use crate::error::FieldError;
use crate::field::localized::{
    LocalizeOptions,
    LocalizedField,
    localize,
};
use crate::field::{
    FieldSpec,
    IntoFields,
};

/// Produces the fields of one locale.
pub trait FieldsResolver {
    fn resolve(&mut self, locale: &str) -> Vec<FieldSpec>;
}

impl<F, O> FieldsResolver for F
where
    F: FnMut(&str) -> O,
    O: IntoFields,
{
    fn resolve(&mut self, locale: &str) -> Vec<FieldSpec> {
        self(locale).into_fields()
    }
}

/// Localizes every field the resolver returns for every locale.
///
/// The output is ordered by locale first, then by resolver output.
///
/// # Errors
/// The first [`FieldError`] raised by [`localize`].
pub fn localize_fields<R>(
    locales: &[String],
    resolver: &mut R,
    options: &LocalizeOptions<'_>,
) -> Result<Vec<LocalizedField>, FieldError>
where
    R: FieldsResolver + ?Sized,
{
    let mut fields = Vec::new();

    for locale in locales {
        for spec in resolver.resolve(locale) {
            fields.push(localize(spec, locale, options)?);
        }
    }

    Ok(fields)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum IndexLocales {
    Only(Vec<String>),
    Except(Vec<String>),
}

/// Per-field-set configuration and entry point of the fanout.
///
/// ```
/// use translatable_fields::{FieldSpec, Fields, LocalizerConfig, TranslatableSettings};
///
/// let settings = TranslatableSettings {
///     locales: vec!["en".to_string(), "fr".to_string()],
///     ..TranslatableSettings::default()
/// };
/// let config = LocalizerConfig::from_settings(&settings).unwrap();
///
/// let fields = Fields::for_locale(&config, |_locale: &str| FieldSpec::new("Title"))
///     .only_fallback_locale_on_index()
///     .make()
///     .unwrap();
///
/// let attributes: Vec<&str> = fields.iter().map(|f| f.attribute()).collect();
/// assert_eq!(attributes, ["title__en", "title__fr"]);
/// ```
pub struct Fields<'a, R> {
    config: &'a LocalizerConfig,
    resolver: R,
    locales: Option<Vec<String>>,
    index_locales: Option<IndexLocales>,
    ignore_untouched: bool,
    original_name: Option<bool>,
    name_localizer: Option<NameLocalizer>,
}

impl<'a, R: FieldsResolver> Fields<'a, R> {
    /// Creates a factory using the given fields resolver.
    #[must_use]
    pub const fn for_locale(config: &'a LocalizerConfig, resolver: R) -> Self {
        Self {
            config,
            resolver,
            locales: None,
            index_locales: None,
            ignore_untouched: false,
            original_name: None,
            name_localizer: None,
        }
    }

    /// Uses the given locales instead of the configured ones.
    #[must_use]
    pub fn locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = Some(locales.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn get_locales(&self) -> &[String] {
        self.locales.as_deref().unwrap_or_else(|| self.config.locales())
    }

    /// Locales shown on the index view, `None` when unrestricted.
    #[must_use]
    pub fn get_index_locales(&self) -> Option<Vec<String>> {
        self.index_locales.as_ref().map(|index_locales| match index_locales {
            IndexLocales::Only(locales) => locales.clone(),
            IndexLocales::Except(excluded) => self
                .get_locales()
                .iter()
                .filter(|locale| !excluded.contains(*locale))
                .cloned()
                .collect(),
        })
    }

    #[must_use]
    pub fn only_current_locale_on_index(self) -> Self {
        let current = self.config.current_locale().to_string();
        self.only_locales_on_index([current])
    }

    #[must_use]
    pub fn only_fallback_locale_on_index(self) -> Self {
        let fallback = self.config.fallback_locale().to_string();
        self.only_locales_on_index([fallback])
    }

    #[must_use]
    pub fn only_locales_on_index<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_locales = Some(IndexLocales::Only(locales.into_iter().map(Into::into).collect()));
        self
    }

    /// Shows every locale on the index view except the given ones. The
    /// complement is taken against the final locale list.
    #[must_use]
    pub fn except_locales_on_index<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_locales =
            Some(IndexLocales::Except(locales.into_iter().map(Into::into).collect()));
        self
    }

    #[must_use]
    pub const fn ignore_untouched(mut self, ignore_untouched: bool) -> Self {
        self.ignore_untouched = ignore_untouched;
        self
    }

    /// Keeps (or, with `false`, forces rewriting of) the base field names.
    #[must_use]
    pub const fn original_name(mut self, original_name: bool) -> Self {
        self.original_name = Some(original_name);
        self
    }

    #[must_use]
    pub fn localize_name_using(
        mut self,
        f: impl Fn(&str, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.name_localizer = Some(NameLocalizer::new(f));
        self
    }

    /// Makes the fields for all locales.
    ///
    /// # Errors
    /// [`FieldError::AmbiguousAttribute`] when a resolved field's attribute
    /// contains the locale separator, [`FieldError::AmbiguousLocale`] when an
    /// overriding locale does.
    pub fn make(mut self) -> Result<FieldCollection, FieldError> {
        let locales = self.get_locales().to_vec();
        let index_locales = self.get_index_locales();

        let options = LocalizeOptions::new(self.config)
            .name_localizer(self.name_localizer.as_ref())
            .original_name(self.original_name)
            .index_locales(index_locales.as_deref())
            .ignore_untouched(self.ignore_untouched);

        let fields = localize_fields(&locales, &mut self.resolver, &options)?;

        tracing::debug!(?locales, fields = fields.len(), "Made translatable fields");

        Ok(FieldCollection::new(fields, self.config.fallback_locale()))
    }
}

impl<R> fmt::Debug for Fields<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fields")
            .field("locales", &self.locales)
            .field("index_locales", &self.index_locales)
            .field("ignore_untouched", &self.ignore_untouched)
            .field("original_name", &self.original_name)
            .field("name_localizer", &self.name_localizer)
            .finish_non_exhaustive()
    }
}

impl FieldSpec {
    /// Fans this field out over the configured locales, one clone per locale.
    #[must_use]
    pub fn translatable(self, config: &LocalizerConfig) -> Fields<'_, impl FnMut(&str) -> Self> {
        Fields::for_locale(config, move |_locale: &str| self.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::config::TranslatableSettings;
    use crate::request::Request;

    #[fixture]
    fn config() -> LocalizerConfig {
        LocalizerConfig::from_settings(&TranslatableSettings {
            locales: vec!["en".to_string(), "fr".to_string(), "uk".to_string()],
            current_locale: Some("uk".to_string()),
            ..TranslatableSettings::default()
        })
        .unwrap()
    }

    fn attributes(fields: &FieldCollection) -> Vec<&str> {
        fields.iter().map(LocalizedField::attribute).collect()
    }

    fn shown_on_index(fields: &FieldCollection) -> Vec<&str> {
        fields
            .iter()
            .filter(|field| field.is_shown_on_index(&Request::new()))
            .map(LocalizedField::locale)
            .collect()
    }

    #[rstest]
    fn make_fans_out_locale_major(config: LocalizerConfig) {
        let fields = Fields::for_locale(&config, |_locale: &str| {
            vec![FieldSpec::new("Title"), FieldSpec::new("Body")]
        })
        .make()
        .unwrap();

        assert_that!(fields.len(), eq(6));
        assert_eq!(
            attributes(&fields),
            ["title__en", "body__en", "title__fr", "body__fr", "title__uk", "body__uk"]
        );
    }

    #[rstest]
    fn resolver_receives_each_locale(config: LocalizerConfig) {
        let mut seen = Vec::new();

        let fields = Fields::for_locale(&config, |locale: &str| {
            seen.push(locale.to_string());
            FieldSpec::new("Title")
        })
        .make()
        .unwrap();

        assert_that!(fields.len(), eq(3));
        assert_that!(seen, elements_are![eq("en"), eq("fr"), eq("uk")]);
    }

    #[rstest]
    fn resolver_may_skip_locales(config: LocalizerConfig) {
        let fields = Fields::for_locale(&config, |locale: &str| {
            (locale != "fr").then(|| FieldSpec::new("Slug"))
        })
        .make()
        .unwrap();

        assert_eq!(attributes(&fields), ["slug__en", "slug__uk"]);
    }

    #[rstest]
    fn locales_override_configured_list(config: LocalizerConfig) {
        let fields = FieldSpec::new("Title").translatable(&config).locales(["uk", "en"]).make().unwrap();

        assert_eq!(attributes(&fields), ["title__uk", "title__en"]);
    }

    #[rstest]
    fn translatable_clones_base_spec_per_locale(config: LocalizerConfig) {
        let fields = FieldSpec::new("Title")
            .set_rules(["max:255"])
            .translatable(&config)
            .make()
            .unwrap()
            .for_locale("fr", |field| field.merge_rules(["required"]));

        let rules: Vec<usize> = fields.iter().map(|f| f.spec().rules().len()).collect();
        assert_eq!(rules, [1, 2, 1]);
        let names: Vec<&str> = fields.iter().map(LocalizedField::name).collect();
        assert_eq!(names, ["Title (en)", "Title (fr)", "Title (uk)"]);
    }

    #[rstest]
    fn only_locales_on_index(config: LocalizerConfig) {
        let fields =
            FieldSpec::new("Title").translatable(&config).only_locales_on_index(["fr"]).make().unwrap();

        assert_eq!(shown_on_index(&fields), ["fr"]);
    }

    #[rstest]
    fn except_locales_on_index_uses_final_locales(config: LocalizerConfig) {
        let fields = FieldSpec::new("Title")
            .translatable(&config)
            .except_locales_on_index(["fr"])
            .locales(["en", "fr"])
            .make()
            .unwrap();

        assert_eq!(shown_on_index(&fields), ["en"]);
    }

    #[rstest]
    fn only_current_and_fallback_locale_on_index(config: LocalizerConfig) {
        let current =
            FieldSpec::new("Title").translatable(&config).only_current_locale_on_index().make();
        let fallback =
            FieldSpec::new("Title").translatable(&config).only_fallback_locale_on_index().make();

        assert_eq!(shown_on_index(&current.unwrap()), ["uk"]);
        assert_eq!(shown_on_index(&fallback.unwrap()), ["en"]);
    }

    #[rstest]
    fn index_locales_unset_shows_all(config: LocalizerConfig) {
        let factory = FieldSpec::new("Title").translatable(&config);
        assert_that!(factory.get_index_locales(), none());

        let fields = factory.make().unwrap();
        assert_eq!(shown_on_index(&fields), ["en", "fr", "uk"]);
    }

    #[rstest]
    fn ignore_untouched_is_passed_to_fields(config: LocalizerConfig) {
        let fields = FieldSpec::new("Title").translatable(&config).ignore_untouched(true).make();

        assert!(fields.unwrap().iter().all(LocalizedField::ignores_untouched));
    }

    #[rstest]
    fn name_options(config: LocalizerConfig) {
        let original = FieldSpec::new("Title").translatable(&config).original_name(true).make();
        let custom = FieldSpec::new("Title")
            .translatable(&config)
            .localize_name_using(|name, locale| format!("{locale}: {name}"))
            .make();

        assert_that!(original.unwrap().into_vec()[0].name(), eq("Title"));
        assert_that!(custom.unwrap().into_vec()[2].name(), eq("uk: Title"));
    }

    #[rstest]
    fn make_fails_on_ambiguous_attribute(config: LocalizerConfig) {
        let result = Fields::for_locale(&config, |_locale: &str| {
            FieldSpec::with_attribute("Title", "title__en")
        })
        .make();

        assert!(matches!(result, Err(FieldError::AmbiguousAttribute { .. })));
    }

    #[rstest]
    fn make_fails_on_overriding_locale_containing_separator(config: LocalizerConfig) {
        let result = FieldSpec::new("Title").translatable(&config).locales(["en", "en__GB"]).make();

        assert_eq!(
            result.unwrap_err(),
            FieldError::AmbiguousLocale {
                locale: "en__GB".to_string(),
                separator: "__".to_string(),
            }
        );
    }

    #[rstest]
    fn collection_keeps_fallback_locale(config: LocalizerConfig) {
        let fields = FieldSpec::new("Title").translatable(&config).make().unwrap();

        assert_that!(fields.fallback_locale(), eq("en"));
    }
}
