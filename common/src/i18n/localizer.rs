//! Per-call message resolution.
//!
//! A [`Localizer`] borrows a built [`Bundle`] together with the caller's
//! ranked language preferences. Each [`Localizer::localize`] call picks the
//! best registered language for the effective country, finds the message
//! template (falling back to the bundle's default language and then to the
//! caller's default message), selects the plural form and interpolates.
//!
//! The effective country is the per-call [`LocalizeConfig::country_code`]
//! when set, otherwise the country bound with
//! [`Localizer::with_country_code`], otherwise the bundle's default
//! country. Per-call overrides never change the localizer.

use std::fmt;

use log::{debug, warn};

use super::I18nError;
use super::bundle::Bundle;
use super::matcher::parse_accept_language;
use super::message::{Message, MessageTemplate};
use super::plural::{Operands, PluralCategory};
use super::tag::{CountryCode, LanguageTag};
use super::template::{NoData, TemplateData};

/// Template data key injected with the plural count when no data is given.
pub const PLURAL_COUNT_KEY: &str = "PluralCount";

/// Options for one [`Localizer::localize`] call.
#[derive(Clone, Default)]
pub struct LocalizeConfig<'a> {
    /// Identifier of the message to render. May be empty when
    /// `default_message` is set, in which case its identifier is used.
    pub message_id: &'a str,
    /// Message rendered when no template is registered for the id.
    pub default_message: Option<&'a Message>,
    /// Count selecting the plural form.
    pub plural_count: Option<Operands>,
    /// Values for the template placeholders.
    pub template_data: Option<&'a dyn TemplateData>,
    /// Country used for this call only.
    pub country_code: Option<&'a str>,
}

impl<'a> LocalizeConfig<'a> {
    /// Options rendering `message_id` with no data.
    #[must_use]
    pub fn new(message_id: &'a str) -> Self {
        Self {
            message_id,
            ..Self::default()
        }
    }

    /// Render `message` when the bundle has no template for the id.
    #[must_use]
    pub const fn with_default_message(mut self, message: &'a Message) -> Self {
        self.default_message = Some(message);
        self
    }

    /// Select the plural form for `count`.
    #[must_use]
    pub fn with_plural_count(mut self, count: impl Into<Operands>) -> Self {
        self.plural_count = Some(count.into());
        self
    }

    /// Interpolate placeholders from `data`.
    #[must_use]
    pub fn with_template_data(mut self, data: &'a dyn TemplateData) -> Self {
        self.template_data = Some(data);
        self
    }

    /// Resolve against `country` for this call only.
    #[must_use]
    pub const fn with_country_code(mut self, country: &'a str) -> Self {
        self.country_code = Some(country);
        self
    }

    fn resolved_id(&self) -> Result<&'a str, I18nError> {
        match self.default_message {
            Some(default) if self.message_id.is_empty() => Ok(default.id.as_str()),
            Some(default) if default.id != self.message_id => Err(I18nError::MessageIdMismatch {
                id: self.message_id.to_owned(),
                default_id: default.id.clone(),
            }),
            None if self.message_id.is_empty() => Err(I18nError::InvalidMessage {
                id: String::new(),
                reason: "no message id was requested".to_owned(),
            }),
            _ => Ok(self.message_id),
        }
    }
}

impl fmt::Debug for LocalizeConfig<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LocalizeConfig")
            .field("message_id", &self.message_id)
            .field("default_message", &self.default_message)
            .field("plural_count", &self.plural_count)
            .field("has_template_data", &self.template_data.is_some())
            .field("country_code", &self.country_code)
            .finish()
    }
}

/// Resolves and renders messages from a [`Bundle`] for one set of
/// language preferences.
#[derive(Clone, Debug)]
pub struct Localizer<'a> {
    bundle: &'a Bundle,
    preferences: Vec<LanguageTag>,
    country: Option<CountryCode>,
}

impl<'a> Localizer<'a> {
    /// Create a localizer for `preferences`.
    ///
    /// Each entry is read as an `Accept-Language` list, so both `"tr"` and
    /// `"fr-CH, fr;q=0.9"` are accepted; entries are concatenated in order.
    ///
    /// ```
    /// use parlance_common::{Bundle, LocalizeConfig, Localizer, Message, parse_tag};
    ///
    /// let english = parse_tag("en").expect("tag");
    /// let mut bundle = Bundle::new("gb", english.clone());
    /// bundle
    ///     .add_messages("gb", &english, &[Message::new("HelloPerson", "Hello {{.Name}}")])
    ///     .expect("messages compile");
    ///
    /// let localizer = Localizer::new(&bundle, &["en-GB"]);
    /// let data = [("Name", "Bob")];
    /// let config = LocalizeConfig::new("HelloPerson").with_template_data(&data);
    /// assert_eq!(localizer.localize(&config).expect("renders"), "Hello Bob");
    /// ```
    #[must_use]
    pub fn new(bundle: &'a Bundle, preferences: &[&str]) -> Self {
        let preferences = preferences
            .iter()
            .flat_map(|entry| parse_accept_language(entry))
            .collect();
        Self {
            bundle,
            preferences,
            country: None,
        }
    }

    /// Bind the localizer to `country` instead of the bundle's default.
    #[must_use]
    pub fn with_country_code(mut self, country: impl Into<CountryCode>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Parsed preferences in rank order.
    #[must_use]
    pub fn preferences(&self) -> &[LanguageTag] {
        &self.preferences
    }

    /// Country used when a call does not override it.
    #[must_use]
    pub fn country_code(&self) -> &str {
        self.country
            .as_deref()
            .unwrap_or_else(|| self.bundle.default_country())
    }

    /// Render the message described by `config`.
    pub fn localize(&self, config: &LocalizeConfig<'_>) -> Result<String, I18nError> {
        self.localize_with_tag(config).map(|(text, _)| text)
    }

    /// Render the message described by `config`, also returning the
    /// language of the template that produced it.
    pub fn localize_with_tag(
        &self,
        config: &LocalizeConfig<'_>,
    ) -> Result<(String, LanguageTag), I18nError> {
        let country = config.country_code.unwrap_or_else(|| self.country_code());
        let message_id = config.resolved_id()?;
        let best = self.best_tag(country, config)?;

        let ephemeral;
        let (template, tag) = match self.registered_template(country, &best, message_id) {
            Some(found) => found,
            None => {
                let Some(default) = config.default_message else {
                    return Err(I18nError::MessageNotFound {
                        id: message_id.to_owned(),
                        tag: best.to_string(),
                    });
                };
                warn!(
                    target: "parlance::localizer",
                    "message `{message_id}` is not registered for `{best}` in country \
                     `{country}`; rendering the default message",
                );
                ephemeral = MessageTemplate::new(default)?;
                (&ephemeral, best)
            }
        };

        let category = self.category(template, &tag, config.plural_count.as_ref())?;
        let count_data;
        let data: &dyn TemplateData = match (config.template_data, &config.plural_count) {
            (Some(data), _) => data,
            (None, Some(count)) => {
                count_data = [(PLURAL_COUNT_KEY, count.as_str())];
                &count_data
            }
            (None, None) => &NoData,
        };

        let text = template.execute(category, data)?;
        Ok((text, tag))
    }

    /// Panicking variant of [`Self::localize`].
    ///
    /// # Panics
    ///
    /// Panics when the message cannot be resolved or rendered.
    #[must_use]
    pub fn must_localize(&self, config: &LocalizeConfig<'_>) -> String {
        match self.localize(config) {
            Ok(text) => text,
            Err(error) => panic!("failed to localize `{}`: {error}", config.message_id),
        }
    }

    /// Best registered tag for `country`.
    ///
    /// A country with no registered language can still render a default
    /// message; it is rendered as the bundle's default language.
    fn best_tag(
        &self,
        country: &str,
        config: &LocalizeConfig<'_>,
    ) -> Result<LanguageTag, I18nError> {
        match self.bundle.matcher(country) {
            Some(matcher) => {
                matcher.best_match(&self.preferences, self.bundle.default_language(), country)
            }
            None if config.default_message.is_some() => {
                debug!(
                    target: "parlance::localizer",
                    "country `{country}` has no registered languages",
                );
                Ok(self.bundle.default_language().clone())
            }
            None => Err(I18nError::NoMatch {
                country: country.to_owned(),
            }),
        }
    }

    fn registered_template(
        &self,
        country: &str,
        best: &LanguageTag,
        id: &str,
    ) -> Option<(&'a MessageTemplate, LanguageTag)> {
        if let Some(template) = self.bundle.message_template(country, best, id) {
            return Some((template, best.clone()));
        }

        let default = self.bundle.default_language();
        if default == best {
            return None;
        }
        let template = self.bundle.message_template(country, default, id)?;
        debug!(
            target: "parlance::localizer",
            "message `{id}` is missing for `{best}`; using default language `{default}`",
        );
        Some((template, default.clone()))
    }

    fn category(
        &self,
        template: &MessageTemplate,
        tag: &LanguageTag,
        count: Option<&Operands>,
    ) -> Result<PluralCategory, I18nError> {
        let Some(count) = count else {
            return Ok(PluralCategory::Other);
        };
        if !template.has_plural_forms() {
            return Ok(PluralCategory::Other);
        }

        let rule = self
            .bundle
            .plural_rules()
            .rule(tag)
            .ok_or_else(|| I18nError::NoPluralRule {
                tag: tag.to_string(),
            })?;
        Ok(rule.category(count))
    }
}
