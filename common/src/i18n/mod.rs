//! Message resolution pipeline.
//!
//! Messages are registered in a [`Bundle`] under a country code and a
//! language tag. A [`Localizer`] picks the best registered language for a
//! caller's preferences with a per-country [`LanguageMatcher`], looks the
//! message up (falling back to the bundle's default language and then to a
//! caller-supplied default message), selects the plural form from the
//! language's [`PluralRule`] and interpolates the template data.
//!
//! Message files are decoded by [`UnmarshalFn`]s registered per format on
//! the bundle; see [`parse_path`] for the file naming convention and
//! [`messages_from_value`] for the accepted tree layout.

mod bundle;
mod error;
mod file;
mod localizer;
mod matcher;
mod message;
pub mod plural;
mod tag;
mod template;
pub mod testing;

pub use bundle::{ARTIFICIAL_LANGUAGE, Bundle};
pub use error::I18nError;
pub use file::{
    MessageFile, UnmarshalError, UnmarshalFn, messages_from_value, parse_message_file, parse_path,
};
pub use localizer::{LocalizeConfig, Localizer, PLURAL_COUNT_KEY};
pub use matcher::{LanguageMatcher, parse_accept_language};
pub use message::{Message, MessageTemplate};
pub use plural::{Operands, PluralCategory, PluralRule, PluralRules};
pub use tag::{CountryCode, LanguageTag, base_language, lineage, parent, parse_tag};
pub use template::{
    DEFAULT_LEFT_DELIM, DEFAULT_RIGHT_DELIM, Template, TemplateData, TemplateError,
};

#[cfg(test)]
mod tests;
