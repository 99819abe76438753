//! Best-match language selection.
//!
//! A [`LanguageMatcher`] is built from the tags registered for one country.
//! Preferences are tried in rank order; for each preference the candidates
//! are graded from an exact match down to a shared base language, and the
//! first preference with any match decides. Ties within a grade go to the
//! lowest canonical tag, so the result never depends on registration order.
//!
//! Scripts are compared after filling in likely subtags, so `zh-TW`
//! prefers `zh-Hant` over `zh-Hans`.

use std::cmp::Ordering;

use log::{debug, warn};
use unic_langid::subtags::Script;

use super::I18nError;
use super::tag::{LanguageTag, lineage, parse_tag};

/// How closely a registered tag satisfies a preference. Lower is better.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum MatchLevel {
    Exact,
    IgnoringVariants,
    Ancestor,
    SameScript,
    SameLanguage,
}

fn grade(preference: &LanguageTag, candidate: &LanguageTag) -> Option<MatchLevel> {
    if preference == candidate {
        return Some(MatchLevel::Exact);
    }
    if preference.language != candidate.language {
        return None;
    }
    if preference.script == candidate.script && preference.region == candidate.region {
        return Some(MatchLevel::IgnoringVariants);
    }
    if lineage(preference).any(|ancestor| &ancestor == candidate) {
        return Some(MatchLevel::Ancestor);
    }
    match (likely_script(preference), likely_script(candidate)) {
        (Some(wanted), Some(offered)) if wanted == offered => Some(MatchLevel::SameScript),
        _ => Some(MatchLevel::SameLanguage),
    }
}

fn likely_script(tag: &LanguageTag) -> Option<Script> {
    let mut maximized = tag.clone();
    maximized.maximize();
    maximized.script
}

/// Selects the best registered tag for a ranked preference list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageMatcher {
    supported: Vec<LanguageTag>,
}

impl LanguageMatcher {
    /// Build a matcher over `supported`.
    #[must_use]
    pub fn new(supported: &[LanguageTag]) -> Self {
        Self {
            supported: supported.to_vec(),
        }
    }

    /// Tags this matcher chooses from, in registration order.
    #[must_use]
    pub fn supported(&self) -> &[LanguageTag] {
        &self.supported
    }

    /// Best supported tag for `preferences`, if any preference matches.
    #[must_use]
    pub fn find(&self, preferences: &[LanguageTag]) -> Option<&LanguageTag> {
        preferences.iter().find_map(|preference| {
            self.supported
                .iter()
                .filter_map(|candidate| grade(preference, candidate).map(|level| (level, candidate)))
                .min_by(|(left_level, left), (right_level, right)| {
                    left_level
                        .cmp(right_level)
                        .then_with(|| compare_canonical(left, right))
                })
                .map(|(_, candidate)| candidate)
        })
    }

    /// Best supported tag for `preferences`, falling back to `default`.
    ///
    /// The default is only returned when it is itself supported; otherwise
    /// the failure is reported as [`I18nError::NoMatch`] for `country`.
    pub fn best_match(
        &self,
        preferences: &[LanguageTag],
        default: &LanguageTag,
        country: &str,
    ) -> Result<LanguageTag, I18nError> {
        if let Some(found) = self.find(preferences) {
            debug!(target: "parlance::matcher", "matched `{found}` for country `{country}`");
            return Ok(found.clone());
        }

        if self.supported.contains(default) {
            debug!(
                target: "parlance::matcher",
                "no preference matched for country `{country}`; using default `{default}`",
            );
            return Ok(default.clone());
        }

        Err(I18nError::NoMatch {
            country: country.to_owned(),
        })
    }
}

fn compare_canonical(left: &LanguageTag, right: &LanguageTag) -> Ordering {
    left.to_string().cmp(&right.to_string())
}

/// Parse an `Accept-Language` style preference list.
///
/// Entries are ordered by descending quality, keeping the written order for
/// equal weights. Wildcards, zero-weighted entries and unparsable tags are
/// dropped.
///
/// ```
/// use parlance_common::parse_accept_language;
///
/// let tags = parse_accept_language("fr-CH, fr;q=0.9, en;q=0.8, *;q=0.5");
/// let rendered: Vec<String> = tags.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["fr-CH", "fr", "en"]);
/// ```
#[must_use]
pub fn parse_accept_language(header: &str) -> Vec<LanguageTag> {
    let mut weighted: Vec<(u16, LanguageTag)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let raw_tag = parts.next()?.trim();
            if raw_tag.is_empty() || raw_tag == "*" {
                return None;
            }

            let quality = parts
                .filter_map(|parameter| parameter.trim().strip_prefix("q="))
                .next()
                .map_or(Some(1000), parse_quality);
            let Some(quality) = quality else {
                warn!(target: "parlance::matcher", "skipping `{entry}`: malformed quality");
                return None;
            };
            if quality == 0 {
                return None;
            }

            match parse_tag(raw_tag) {
                Ok(tag) => Some((quality, tag)),
                Err(error) => {
                    warn!(target: "parlance::matcher", "skipping preference: {error}");
                    None
                }
            }
        })
        .collect();

    weighted.sort_by(|(left, _), (right, _)| right.cmp(left));
    weighted.into_iter().map(|(_, tag)| tag).collect()
}

/// Parse a quality value into thousandths (`0.5` becomes `500`).
fn parse_quality(raw: &str) -> Option<u16> {
    let (whole, fraction) = raw.trim().split_once('.').unwrap_or((raw.trim(), ""));
    if fraction.len() > 3 || !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let padded = format!("{fraction:0<3}");
    let thousandths: u16 = padded.parse().ok()?;
    match whole {
        "0" => Some(thousandths),
        "1" if thousandths == 0 => Some(1000),
        _ => None,
    }
}
