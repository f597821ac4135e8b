//! Localized attribute encoding.
//!
//! A localized attribute is the logical attribute followed by the separator
//! and the locale (`title` + `__` + `fr` = `title__fr`). Decoding splits at
//! the last separator, so the encoding is reversible only while the logical
//! attribute itself does not contain the separator.

/// Builds the locale-qualified attribute key.
#[must_use]
pub fn localize_attribute(attribute: &str, locale: &str, separator: &str) -> String {
    format!("{attribute}{separator}{locale}")
}

/// Splits a localized attribute into `(logical_attribute, locale)`.
///
/// Returns `None` when the separator does not occur in `column`.
#[must_use]
pub fn split_localized_attribute<'a>(column: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    if separator.is_empty() {
        return None;
    }

    column.rsplit_once(separator)
}

/// Returns true if decoding `localize_attribute(attribute, _, separator)`
/// would not yield `attribute` back.
#[must_use]
pub fn is_ambiguous_attribute(attribute: &str, separator: &str) -> bool {
    !separator.is_empty() && attribute.contains(separator)
}
