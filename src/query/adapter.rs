//! Rewrites search, ordering and eager loading for translatable resources.

use super::{
    Boolean,
    SearchColumn,
    SortDirection,
    TranslatableColumn,
    TranslatableQuery,
};
use crate::attribute::split_localized_attribute;
use crate::config::LocalizerConfig;
use crate::model::TranslatableModel;

/// Relation holding a record's translations.
pub const TRANSLATIONS_RELATION: &str = "translations";

/// Translation-aware hooks of a resource's query pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAdapter {
    separator: String,
    uses_full_text_search: bool,
}

impl QueryAdapter {
    #[must_use]
    pub fn new(config: &LocalizerConfig) -> Self {
        Self { separator: config.separator().to_string(), uses_full_text_search: false }
    }

    /// Marks the resource as searched through an external full-text provider,
    /// whose relevance ordering must be left alone.
    #[must_use]
    pub const fn with_full_text_search(mut self, enabled: bool) -> Self {
        self.uses_full_text_search = enabled;
        self
    }

    /// Drops the default translations scope; localized fields read every
    /// locale, not only the current one.
    pub fn initialize_query<Q: TranslatableQuery>(&self, query: &mut Q) {
        query.without_translations_scope();
    }

    pub fn index_query<Q: TranslatableQuery>(&self, query: &mut Q) {
        query.with_relation(TRANSLATIONS_RELATION);
    }

    pub fn detail_query<Q: TranslatableQuery>(&self, query: &mut Q) {
        query.with_relation(TRANSLATIONS_RELATION);
    }

    pub fn edit_query<Q: TranslatableQuery>(&self, query: &mut Q) {
        query.with_relation(TRANSLATIONS_RELATION);
    }

    pub fn relatable_query<Q: TranslatableQuery>(&self, query: &mut Q) {
        query.with_relation(TRANSLATIONS_RELATION);
    }

    /// Replaces plain columns the model reports as translatable with
    /// [`TranslatableColumn`]s.
    pub fn prepare_search_columns<Q, I>(&self, query: &Q, columns: I) -> Vec<SearchColumn>
    where
        Q: TranslatableQuery,
        I: IntoIterator,
        I::Item: Into<SearchColumn>,
    {
        columns
            .into_iter()
            .map(|column| match column.into() {
                SearchColumn::Column(name) if query.model().is_translatable(&name) => {
                    SearchColumn::Translatable(TranslatableColumn::new(name))
                }
                other => other,
            })
            .collect()
    }

    /// Adds one nested group matching `search` against any of `columns`.
    /// A blank search leaves the query untouched.
    pub fn apply_search<Q, I>(&self, query: &mut Q, search: &str, columns: I)
    where
        Q: TranslatableQuery,
        I: IntoIterator,
        I::Item: Into<SearchColumn>,
    {
        if search.trim().is_empty() {
            return;
        }

        let columns = self.prepare_search_columns(query, columns);
        tracing::debug!(search, columns = columns.len(), "Applying search");

        query.where_nested(Boolean::And, &mut |nested| {
            for column in &columns {
                column.apply(nested, search, Boolean::Or);
            }
        });
    }

    /// Applies the requested orderings. Entries without a direction are
    /// ignored; with none left the query is sorted by primary key, newest
    /// first.
    pub fn apply_orderings<Q, I, K>(&self, query: &mut Q, orderings: I)
    where
        Q: TranslatableQuery,
        I: IntoIterator<Item = (K, Option<SortDirection>)>,
        K: AsRef<str>,
    {
        let orderings: Vec<(K, SortDirection)> = orderings
            .into_iter()
            .filter_map(|(column, direction)| direction.map(|direction| (column, direction)))
            .collect();

        if orderings.is_empty() {
            if !query.has_orders() && !self.uses_full_text_search {
                let key = query.model().qualified_key_name();
                query.order_by(&key, SortDirection::Desc);
            }
            return;
        }

        for (column, direction) in &orderings {
            let column = column.as_ref();

            match self.guess_attribute_and_locale(column) {
                Some((attribute, locale)) if query.model().is_translatable(attribute) => {
                    tracing::debug!(attribute, locale, "Ordering by translation");
                    query.order_by_translatable(attribute, *direction, locale);
                }
                _ => query.order_by(column, *direction),
            }
        }
    }

    /// Splits a localized column into `(attribute, locale)`.
    #[must_use]
    pub fn guess_attribute_and_locale<'c>(&self, column: &'c str) -> Option<(&'c str, &'c str)> {
        split_localized_attribute(column, &self.separator)
    }
}
