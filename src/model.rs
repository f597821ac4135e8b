//! Record-side capabilities required by localized fields and queries.

use crate::translator::Translator;

/// A record whose attributes may be stored per locale.
pub trait TranslatableModel {
    type Translator: Translator;

    fn translator(&self) -> &Self::Translator;

    fn translator_mut(&mut self) -> &mut Self::Translator;

    /// Returns true if `attribute` is stored in the translation store.
    fn is_translatable(&self, attribute: &str) -> bool;

    /// Table-qualified primary key column (e.g. `posts.id`).
    fn qualified_key_name(&self) -> String;
}

/// Error type of the translator owned by `M`.
pub type TranslatorError<M> = <<M as TranslatableModel>::Translator as Translator>::Error;
