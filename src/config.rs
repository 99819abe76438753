//! Bundle configuration read from TOML.
//!
//! A configuration names the default country and language, where message
//! files live and which languages each country serves. [`crate::build_bundle`]
//! turns it into a populated [`Bundle`](parlance_common::Bundle).
//!
//! ```toml
//! default_language = "tr"
//! default_country = "TR"
//! locales_dir = "lang"
//! file_pattern = "active.{lang}.toml"
//!
//! [countries]
//! TR = ["tr", "en"]
//! GB = ["tr", "en"]
//! ```

use std::collections::BTreeMap;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use parlance_common::{I18nError, LanguageTag, parse_tag};
use serde::Deserialize;

use crate::loader::LoadError;

/// Placeholder replaced by the language tag in [`BundleConfig::file_pattern`].
pub const LANGUAGE_PLACEHOLDER: &str = "{lang}";

/// Configuration describing how to assemble a bundle.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    /// Language rendered when no preference matches.
    pub default_language: String,
    /// Country used by localizers without an explicit country.
    pub default_country: String,
    /// Directory holding one sub-directory per country, relative to the
    /// configuration root.
    pub locales_dir: Utf8PathBuf,
    /// File name template; `{lang}` is replaced by the language tag.
    pub file_pattern: String,
    /// Languages served by each country, in load order.
    pub countries: BTreeMap<String, Vec<String>>,
}

impl BundleConfig {
    /// Parse a configuration from TOML source.
    ///
    /// # Examples
    ///
    /// ```
    /// use parlance::BundleConfig;
    ///
    /// let config = BundleConfig::from_toml_str("[countries]\nGB = [\"en\"]\n")
    ///     .expect("valid configuration");
    /// assert_eq!(config.default_language, "en");
    /// assert_eq!(config.countries["GB"], ["en"]);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Utf8Path) -> Result<Self, LoadError> {
        let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source).map_err(|error| LoadError::Config {
            path: path.to_path_buf(),
            source: Box::new(error),
        })
    }

    /// The default language as a parsed tag.
    pub fn default_language(&self) -> Result<LanguageTag, I18nError> {
        parse_tag(&self.default_language)
    }

    /// Path of the message file for `language` in `country`.
    ///
    /// Country directories are lower case, so `TR` reads from `lang/tr/`.
    #[must_use]
    pub fn file_path(&self, root: &Utf8Path, country: &str, language: &str) -> Utf8PathBuf {
        root.join(&self.locales_dir)
            .join(country.to_ascii_lowercase())
            .join(self.file_pattern.replace(LANGUAGE_PLACEHOLDER, language))
    }
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_owned(),
            default_country: "default".to_owned(),
            locales_dir: Utf8PathBuf::from("locales"),
            file_pattern: format!("active.{LANGUAGE_PLACEHOLDER}.toml"),
            countries: BTreeMap::new(),
        }
    }
}
