//! Message template store.
//!
//! A [`Bundle`] owns every compiled template, grouped by country code and
//! language tag, alongside the plural rules and one [`LanguageMatcher`] per
//! country. It is populated once through `&mut self` and then shared
//! read-only; the borrow checker keeps writers and readers from
//! interleaving.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::file::{MessageFile, UnmarshalFn, parse_message_file};
use super::matcher::LanguageMatcher;
use super::message::{Message, MessageTemplate};
use super::plural::{PluralRule, PluralRules};
use super::tag::{CountryCode, LanguageTag, parse_tag};
use super::I18nError;

/// Constructed-language tag that borrows the English plural rule.
pub const ARTIFICIAL_LANGUAGE: &str = "art";

type TemplateKey = (CountryCode, LanguageTag);

/// Store of message templates and plural rules.
///
/// Most applications need a single bundle built during startup.
pub struct Bundle {
    default_country: CountryCode,
    default_language: LanguageTag,
    plural_rules: PluralRules,
    templates: HashMap<TemplateKey, HashMap<String, MessageTemplate>>,
    country_tags: HashMap<CountryCode, Vec<LanguageTag>>,
    matchers: HashMap<CountryCode, LanguageMatcher>,
    unmarshal_fns: HashMap<String, UnmarshalFn>,
}

impl Bundle {
    /// Create a bundle with the default plural rules.
    ///
    /// `default_country` is the country a [`Localizer`] uses when none is
    /// bound, and `default_language` is the fallback language tried when a
    /// preference list matches nothing. No tag is registered until messages
    /// are added for it.
    ///
    /// [`Localizer`]: super::Localizer
    #[must_use]
    pub fn new(default_country: impl Into<CountryCode>, default_language: LanguageTag) -> Self {
        let mut plural_rules = PluralRules::default_rules();
        if let (Ok(artificial), Ok(english)) = (parse_tag(ARTIFICIAL_LANGUAGE), parse_tag("en")) {
            if let Some(rule) = plural_rules.rule(&english) {
                plural_rules.register(artificial, rule);
            }
        }

        Self {
            default_country: default_country.into(),
            default_language,
            plural_rules,
            templates: HashMap::new(),
            country_tags: HashMap::new(),
            matchers: HashMap::new(),
            unmarshal_fns: HashMap::new(),
        }
    }

    /// Country used when a localizer has no explicit binding.
    #[must_use]
    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// Language used when no preference matches.
    #[must_use]
    pub fn default_language(&self) -> &LanguageTag {
        &self.default_language
    }

    /// Plural rules consulted by this bundle.
    #[must_use]
    pub fn plural_rules(&self) -> &PluralRules {
        &self.plural_rules
    }

    /// Register or replace the plural rule for `tag`.
    pub fn register_plural_rule(&mut self, tag: LanguageTag, rule: PluralRule) {
        debug!(target: "parlance::bundle", "registering plural rule `{}` for `{tag}`", rule.name());
        self.plural_rules.register(tag, rule);
    }

    /// Register `unmarshal` as the decoder for files ending in `.format`.
    pub fn register_unmarshal_fn(&mut self, format: impl Into<String>, unmarshal: UnmarshalFn) {
        self.unmarshal_fns.insert(format.into(), unmarshal);
    }

    /// Formats with a registered decoder.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.unmarshal_fns.keys().map(String::as_str)
    }

    /// Decode `buf` using the format and language named by `path`, then add
    /// its messages for `country`.
    ///
    /// The format is everything after the last `.`; the language tag is
    /// the dotted segment before it (`lang/active.en-US.toml` yields
    /// `en-US`).
    pub fn parse_message_file_bytes(
        &mut self,
        buf: &[u8],
        path: &str,
        country: &str,
    ) -> Result<MessageFile, I18nError> {
        let file = parse_message_file(buf, path, &self.unmarshal_fns)?;
        self.add_messages(country, &file.tag, &file.messages)?;
        Ok(file)
    }

    /// Panicking variant of [`Self::parse_message_file_bytes`].
    ///
    /// # Panics
    ///
    /// Panics when the file cannot be parsed or its messages added.
    pub fn must_parse_message_file_bytes(&mut self, buf: &[u8], path: &str, country: &str) {
        if let Err(error) = self.parse_message_file_bytes(buf, path, country) {
            panic!("failed to load message file `{path}`: {error}");
        }
    }

    /// Add `messages` for the (`country`, `tag`) pair.
    ///
    /// All messages are compiled before anything is stored, so a failure
    /// leaves the bundle unchanged. Re-adding an identifier replaces the
    /// earlier template. The pair is registered, and the country's matcher
    /// rebuilt, when its first message arrives.
    ///
    /// ```
    /// use parlance_common::{Bundle, I18nError, Message, parse_tag};
    ///
    /// let mut bundle = Bundle::new("tr", parse_tag("tr").expect("tag"));
    /// bundle
    ///     .add_messages("tr", &parse_tag("en").expect("tag"), &[Message::new("Hi", "Hi")])
    ///     .expect("english has a plural rule");
    /// assert_eq!(bundle.language_tags("tr").len(), 1);
    ///
    /// let klingon = parse_tag("tlh").expect("tag");
    /// let outcome = bundle.add_messages("tr", &klingon, &[Message::new("Hi", "nuqneH")]);
    /// assert!(matches!(outcome, Err(I18nError::NoPluralRule { .. })));
    /// ```
    pub fn add_messages(
        &mut self,
        country: &str,
        tag: &LanguageTag,
        messages: &[Message],
    ) -> Result<(), I18nError> {
        if self.plural_rules.rule(tag).is_none() {
            return Err(I18nError::NoPluralRule {
                tag: tag.to_string(),
            });
        }

        let compiled = messages
            .iter()
            .map(MessageTemplate::new)
            .collect::<Result<Vec<_>, _>>()?;
        if compiled.is_empty() {
            return Ok(());
        }

        debug!(
            target: "parlance::bundle",
            "adding {} message(s) for `{tag}` in country `{country}`",
            compiled.len(),
        );

        let templates = self
            .templates
            .entry((country.to_owned(), tag.clone()))
            .or_default();
        for template in compiled {
            templates.insert(template.id().to_owned(), template);
        }
        self.register_tag(country, tag);
        Ok(())
    }

    /// Panicking variant of [`Self::add_messages`].
    ///
    /// # Panics
    ///
    /// Panics when the messages cannot be added.
    pub fn must_add_messages(&mut self, country: &str, tag: &LanguageTag, messages: &[Message]) {
        if let Err(error) = self.add_messages(country, tag, messages) {
            panic!("failed to add messages for `{tag}` in `{country}`: {error}");
        }
    }

    /// Tags registered for `country`, in registration order.
    #[must_use]
    pub fn language_tags(&self, country: &str) -> &[LanguageTag] {
        self.country_tags.get(country).map_or(&[], Vec::as_slice)
    }

    /// Country codes with at least one registered tag.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.country_tags.keys().map(String::as_str)
    }

    /// Matcher for `country`, if any tag is registered there.
    #[must_use]
    pub fn matcher(&self, country: &str) -> Option<&LanguageMatcher> {
        self.matchers.get(country)
    }

    /// Template for `id` in the (`country`, `tag`) pair.
    #[must_use]
    pub fn message_template(
        &self,
        country: &str,
        tag: &LanguageTag,
        id: &str,
    ) -> Option<&MessageTemplate> {
        self.templates
            .get(&(country.to_owned(), tag.clone()))?
            .get(id)
    }

    fn register_tag(&mut self, country: &str, tag: &LanguageTag) {
        let tags = self.country_tags.entry(country.to_owned()).or_default();
        if tags.contains(tag) {
            return;
        }

        tags.push(tag.clone());
        self.matchers
            .insert(country.to_owned(), LanguageMatcher::new(tags));
        debug!(target: "parlance::bundle", "registered `{tag}` for country `{country}`");
    }
}

impl fmt::Debug for Bundle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Bundle")
            .field("default_country", &self.default_country)
            .field("default_language", &self.default_language)
            .field("country_tags", &self.country_tags)
            .field("formats", &self.unmarshal_fns.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
