//! Language tag helpers.
//!
//! Tags are `unic-langid` identifiers. Two tags are equal when their
//! canonical forms match; the helpers here add the parent chain used by the
//! plural table and the base-language relation used by the matcher.

use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use super::I18nError;

/// Canonical language identifier used throughout the pipeline.
pub type LanguageTag = LanguageIdentifier;

/// Country or market key grouping a set of registered languages.
pub type CountryCode = String;

/// Parse `raw` into a canonical [`LanguageTag`].
///
/// Surrounding whitespace is ignored. Empty input is rejected rather than
/// being read as the undetermined language.
///
/// ```
/// use parlance_common::parse_tag;
///
/// let tag = parse_tag("en-us").expect("valid tag");
/// assert_eq!(tag.to_string(), "en-US");
/// assert!(parse_tag("").is_err());
/// ```
pub fn parse_tag(raw: &str) -> Result<LanguageTag, I18nError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(I18nError::InvalidTag {
            tag: raw.to_owned(),
            reason: "empty tag".to_owned(),
        });
    }

    LanguageIdentifier::from_str(trimmed).map_err(|error| I18nError::InvalidTag {
        tag: raw.to_owned(),
        reason: error.to_string(),
    })
}

/// Return the tag reduced to its language subtag (`en-US` becomes `en`).
#[must_use]
pub fn base_language(tag: &LanguageTag) -> LanguageTag {
    LanguageIdentifier::from_parts(tag.language, None, None, &[])
}

/// Return the next less specific tag: variants go first, then the region,
/// then the script. The bare language has no parent.
#[must_use]
pub fn parent(tag: &LanguageTag) -> Option<LanguageTag> {
    if tag.variants().next().is_some() {
        let mut reduced = tag.clone();
        reduced.clear_variants();
        return Some(reduced);
    }

    if tag.region.is_some() {
        return Some(LanguageIdentifier::from_parts(
            tag.language,
            tag.script,
            None,
            &[],
        ));
    }

    tag.script
        .map(|_| LanguageIdentifier::from_parts(tag.language, None, None, &[]))
}

/// Iterate over `tag` followed by each of its ancestors.
pub fn lineage(tag: &LanguageTag) -> impl Iterator<Item = LanguageTag> {
    std::iter::successors(Some(tag.clone()), parent)
}
