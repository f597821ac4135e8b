//! Ordered set of localized fields with bulk operations.

use serde_json::Value;

use crate::field::FieldSpec;
use crate::field::localized::LocalizedField;
use crate::model::{
    TranslatableModel,
    TranslatorError,
};
use crate::request::Request;

/// Rule merged into the fallback-locale fields by
/// [`FieldCollection::require_only_fallback_locale`].
const REQUIRED_RULE: &str = "required";
/// Rule merged into every other locale's fields.
const NULLABLE_RULE: &str = "nullable";

/// Fields produced by one fanout, in locale-major order.
#[derive(Debug, Clone)]
pub struct FieldCollection {
    fields: Vec<LocalizedField>,
    fallback_locale: String,
}

impl FieldCollection {
    #[must_use]
    pub fn new(fields: Vec<LocalizedField>, fallback_locale: impl Into<String>) -> Self {
        Self { fields, fallback_locale: fallback_locale.into() }
    }

    #[must_use]
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocalizedField> {
        self.fields.iter()
    }

    /// Finds a field by its localized attribute.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&LocalizedField> {
        self.fields.iter().find(|field| field.attribute() == attribute)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<LocalizedField> {
        self.fields
    }

    /// Applies `f` to every field.
    #[must_use]
    pub fn apply_to_all(mut self, f: impl FnMut(LocalizedField) -> LocalizedField) -> Self {
        self.fields = self.fields.into_iter().map(f).collect();
        self
    }

    /// Applies `f` to the fields of `locale` only.
    #[must_use]
    pub fn for_locale(
        self,
        locale: &str,
        mut f: impl FnMut(LocalizedField) -> LocalizedField,
    ) -> Self {
        self.apply_to_all(|field| if field.locale() == locale { f(field) } else { field })
    }

    #[must_use]
    pub fn for_fallback_locale(self, f: impl FnMut(LocalizedField) -> LocalizedField) -> Self {
        let fallback = self.fallback_locale.clone();
        self.for_locale(&fallback, f)
    }

    /// Shows only the fallback-locale fields on the index view.
    #[must_use]
    pub fn restrict_visibility_to_fallback_locale(self) -> Self {
        let fallback = self.fallback_locale.clone();
        self.apply_to_all(|field| {
            let shown = field.locale() == fallback;
            field.map_spec(|spec| spec.show_on_index(shown))
        })
    }

    /// Requires a value for the fallback locale and lets every other locale
    /// stay empty.
    #[must_use]
    pub fn require_only_fallback_locale(self) -> Self {
        let fallback = self.fallback_locale.clone();
        self.apply_to_all(|field| {
            let rule = if field.locale() == fallback { REQUIRED_RULE } else { NULLABLE_RULE };
            field.merge_rules([rule])
        })
    }

    #[must_use]
    pub fn sortable(self) -> Self {
        self.apply_to_all(|field| field.map_spec(FieldSpec::sortable))
    }

    #[must_use]
    pub fn filterable(self) -> Self {
        self.apply_to_all(|field| field.map_spec(FieldSpec::filterable))
    }

    /// Replaces the validation rules of every field.
    #[must_use]
    pub fn rules<I, S>(self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules: Vec<String> = rules.into_iter().map(Into::into).collect();
        self.apply_to_all(|field| field.map_spec(|spec| spec.set_rules(rules.iter().cloned())))
    }

    #[must_use]
    pub fn help(self, text: &str) -> Self {
        self.apply_to_all(|field| field.map_spec(|spec| spec.help(text)))
    }

    #[must_use]
    pub fn hide_from_index(self) -> Self {
        self.apply_to_all(|field| field.map_spec(FieldSpec::hide_from_index))
    }

    #[must_use]
    pub fn hide_from_detail(self) -> Self {
        self.apply_to_all(|field| field.map_spec(FieldSpec::hide_from_detail))
    }

    /// Resolves every field as `(localized attribute, value)` pairs, in order.
    pub fn resolve_all<M: TranslatableModel>(
        &self,
        model: &M,
    ) -> Result<Vec<(String, Value)>, TranslatorError<M>> {
        self.fields
            .iter()
            .map(|field| Ok((field.attribute().to_string(), field.resolve(model)?)))
            .collect()
    }

    /// Fills every field from `request`. Returns the number of writes.
    pub fn fill_all<M: TranslatableModel>(
        &self,
        request: &Request,
        model: &mut M,
    ) -> Result<usize, TranslatorError<M>> {
        let mut written = 0;
        for field in &self.fields {
            if field.fill(request, model)? {
                written += 1;
            }
        }

        tracing::debug!(written, total = self.fields.len(), "Filled localized fields");

        Ok(written)
    }
}

impl IntoIterator for FieldCollection {
    type Item = LocalizedField;
    type IntoIter = std::vec::IntoIter<LocalizedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldCollection {
    type Item = &'a LocalizedField;
    type IntoIter = std::slice::Iter<'a, LocalizedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
