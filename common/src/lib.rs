//! Message resolution pipeline for Parlance: plural rules, message
//! templates keyed by country and language, language matching and
//! rendering.

pub mod i18n;

pub use i18n::{
    Bundle, CountryCode, I18nError, LanguageMatcher, LanguageTag, LocalizeConfig, Localizer,
    Message, MessageFile, MessageTemplate, Operands, PluralCategory, PluralRule, PluralRules,
    Template, TemplateData, TemplateError, UnmarshalError, UnmarshalFn, parse_accept_language,
    parse_tag,
};
