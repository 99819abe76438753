//! Plural categories, rules and the per-language rule table.
//!
//! [`PluralRules`] maps language tags to CLDR plural rules. Lookups walk
//! from the exact tag towards its base language so `pt-BR` resolves the
//! Portuguese rule, and return `None` rather than inventing a default.

use std::collections::HashMap;
use std::fmt;

use super::tag::{LanguageTag, lineage};

mod operands;
mod rules;

pub use operands::Operands;
pub use rules::cldr;

/// CLDR plural categories.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Every category, in CLDR order.
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// Lowercase CLDR keyword for the category.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.keyword())
    }
}

/// A named plural rule mapping operands to a category.
#[derive(Clone, Copy)]
pub struct PluralRule {
    name: &'static str,
    select: fn(&Operands) -> PluralCategory,
}

impl PluralRule {
    /// Wrap `select` as a rule identified by `name` in logs.
    #[must_use]
    pub const fn new(name: &'static str, select: fn(&Operands) -> PluralCategory) -> Self {
        Self { name, select }
    }

    /// Identifier of the rule family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Select the category for `operands`.
    #[must_use]
    pub fn category(&self, operands: &Operands) -> PluralCategory {
        (self.select)(operands)
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PluralRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for PluralRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Registry of plural rules keyed by language tag.
#[derive(Clone, Debug, Default)]
pub struct PluralRules {
    rules: HashMap<LanguageTag, PluralRule>,
}

impl PluralRules {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table seeded with the CLDR rules for common languages.
    ///
    /// ```
    /// use parlance_common::{PluralCategory, PluralRules, parse_tag};
    ///
    /// let rules = PluralRules::default_rules();
    /// let english = rules.rule(&parse_tag("en-GB").expect("tag")).expect("rule");
    /// assert_eq!(english.category(&1.into()), PluralCategory::One);
    /// assert_eq!(english.category(&2.into()), PluralCategory::Other);
    /// ```
    #[must_use]
    pub fn default_rules() -> Self {
        Self {
            rules: rules::DEFAULT_RULES.clone(),
        }
    }

    /// Register `rule` for `tag`, replacing any previous entry.
    pub fn register(&mut self, tag: LanguageTag, rule: PluralRule) {
        self.rules.insert(tag, rule);
    }

    /// Return the rule for the most specific entry matching `tag`.
    #[must_use]
    pub fn rule(&self, tag: &LanguageTag) -> Option<PluralRule> {
        lineage(tag).find_map(|candidate| self.rules.get(&candidate).copied())
    }

    /// Whether any entry matches `tag`.
    #[must_use]
    pub fn supports(&self, tag: &LanguageTag) -> bool {
        self.rule(tag).is_some()
    }
}
