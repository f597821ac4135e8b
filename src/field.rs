//! Field descriptions and their localized variants.

pub mod localized;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::request::Request;

/// Visibility of a field on one view: a fixed flag or a predicate over the
/// current request.
#[derive(Clone)]
pub enum Visibility {
    Always(bool),
    When(Arc<dyn Fn(&Request) -> bool + Send + Sync>),
}

impl Visibility {
    pub fn when(predicate: impl Fn(&Request) -> bool + Send + Sync + 'static) -> Self {
        Self::When(Arc::new(predicate))
    }

    #[must_use]
    pub fn is_visible(&self, request: &Request) -> bool {
        match self {
            Self::Always(visible) => *visible,
            Self::When(predicate) => predicate(request),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Always(true)
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        Self::Always(visible)
    }
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always(visible) => f.debug_tuple("Always").field(visible).finish(),
            Self::When(_) => f.write_str("When(..)"),
        }
    }
}

/// A single-locale field description.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    attribute: String,
    rules: Vec<String>,
    show_on_index: Visibility,
    show_on_detail: Visibility,
    show_on_creation: Visibility,
    show_on_update: Visibility,
    sortable: bool,
    filterable: bool,
    help_text: Option<String>,
    default_value: Option<Value>,
}

impl FieldSpec {
    /// Creates a field whose attribute is derived from the name
    /// (`"Meta Title"` → `meta_title`).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let attribute = name.to_lowercase().replace(' ', "_");
        Self::with_attribute(name, attribute)
    }

    #[must_use]
    pub fn with_attribute(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            rules: Vec::new(),
            show_on_index: Visibility::default(),
            show_on_detail: Visibility::default(),
            show_on_creation: Visibility::default(),
            show_on_update: Visibility::default(),
            sortable: false,
            filterable: false,
            help_text: None,
            default_value: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    #[must_use]
    pub const fn is_sortable(&self) -> bool {
        self.sortable
    }

    #[must_use]
    pub const fn is_filterable(&self) -> bool {
        self.filterable
    }

    #[must_use]
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    #[must_use]
    pub const fn index_visibility(&self) -> &Visibility {
        &self.show_on_index
    }

    #[must_use]
    pub fn is_shown_on_index(&self, request: &Request) -> bool {
        self.show_on_index.is_visible(request)
    }

    #[must_use]
    pub fn is_shown_on_detail(&self, request: &Request) -> bool {
        self.show_on_detail.is_visible(request)
    }

    #[must_use]
    pub fn is_shown_on_creation(&self, request: &Request) -> bool {
        self.show_on_creation.is_visible(request)
    }

    #[must_use]
    pub fn is_shown_on_update(&self, request: &Request) -> bool {
        self.show_on_update.is_visible(request)
    }

    /// Replaces the validation rules.
    #[must_use]
    pub fn set_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = rules.into_iter().map(Into::into).collect();
        self
    }

    /// Appends validation rules to the existing ones.
    #[must_use]
    pub fn merge_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.extend(rules.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Value returned on resolve when no translation exists.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn show_on_index(mut self, visibility: impl Into<Visibility>) -> Self {
        self.show_on_index = visibility.into();
        self
    }

    #[must_use]
    pub fn show_on_detail(mut self, visibility: impl Into<Visibility>) -> Self {
        self.show_on_detail = visibility.into();
        self
    }

    #[must_use]
    pub fn show_on_creation(mut self, visibility: impl Into<Visibility>) -> Self {
        self.show_on_creation = visibility.into();
        self
    }

    #[must_use]
    pub fn show_on_update(mut self, visibility: impl Into<Visibility>) -> Self {
        self.show_on_update = visibility.into();
        self
    }

    #[must_use]
    pub fn hide_from_index(self) -> Self {
        self.show_on_index(false)
    }

    #[must_use]
    pub fn hide_from_detail(self) -> Self {
        self.show_on_detail(false)
    }
}

/// Output of a fields resolver: one field or a sequence of them.
pub trait IntoFields {
    fn into_fields(self) -> Vec<FieldSpec>;
}

impl IntoFields for FieldSpec {
    fn into_fields(self) -> Vec<FieldSpec> {
        vec![self]
    }
}

impl IntoFields for Vec<FieldSpec> {
    fn into_fields(self) -> Vec<FieldSpec> {
        self
    }
}

impl<const N: usize> IntoFields for [FieldSpec; N] {
    fn into_fields(self) -> Vec<FieldSpec> {
        self.into()
    }
}

impl IntoFields for Option<FieldSpec> {
    fn into_fields(self) -> Vec<FieldSpec> {
        self.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("Title", "title")]
    #[case("Meta Title", "meta_title")]
    fn new_derives_attribute_from_name(#[case] name: &str, #[case] attribute: &str) {
        assert_that!(FieldSpec::new(name).attribute(), eq(attribute));
    }

    #[rstest]
    fn merge_rules_appends() {
        let field = FieldSpec::new("Title").set_rules(["string"]).merge_rules(["max:255"]);

        assert_eq!(field.rules(), ["string", "max:255"]);
    }

    #[rstest]
    fn set_rules_replaces() {
        let field = FieldSpec::new("Title").set_rules(["string"]).set_rules(["required"]);

        assert_eq!(field.rules(), ["required"]);
    }

    #[rstest]
    fn visibility_predicate_sees_request() {
        let field = FieldSpec::new("Title")
            .show_on_index(Visibility::when(|request| request.has("viaResource")));

        assert_that!(field.is_shown_on_index(&Request::new()), eq(false));
        assert_that!(
            field.is_shown_on_index(&Request::new().with("viaResource", "posts")),
            eq(true)
        );
    }

    #[rstest]
    fn form_visibility_defaults_to_shown() {
        let field = FieldSpec::new("Title");
        let request = Request::new();

        assert_that!(field.is_shown_on_creation(&request), eq(true));
        assert_that!(field.is_shown_on_update(&request), eq(true));
    }

    #[rstest]
    fn form_visibility_is_set_per_form() {
        let field = FieldSpec::new("Slug")
            .show_on_creation(false)
            .show_on_update(Visibility::when(|request| request.has("resourceId")));

        assert_that!(field.is_shown_on_creation(&Request::new()), eq(false));
        assert_that!(field.is_shown_on_update(&Request::new()), eq(false));
        assert_that!(field.is_shown_on_update(&Request::new().with("resourceId", 7)), eq(true));
        assert_that!(field.is_shown_on_index(&Request::new()), eq(true));
    }

    #[rstest]
    fn into_fields_normalizes_single_field() {
        assert_that!(FieldSpec::new("Title").into_fields(), len(eq(1)));
        assert_that!([FieldSpec::new("A"), FieldSpec::new("B")].into_fields(), len(eq(2)));
        assert_that!(None::<FieldSpec>.into_fields(), is_empty());
    }
}
