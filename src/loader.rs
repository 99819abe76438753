//! Loading message files from disk.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use parlance_common::{Bundle, I18nError, MessageFile};
use thiserror::Error;

use crate::config::BundleConfig;
use crate::formats::register_default_formats;

/// Errors raised while reading configuration or message files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has unknown fields.
    #[error("invalid configuration in {path}: {source}")]
    Config {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Parser error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// A message file was read but could not be added to the bundle.
    #[error("failed to load messages from {path}: {source}")]
    Messages {
        /// Path of the message file.
        path: Utf8PathBuf,
        /// Pipeline error describing the failure.
        #[source]
        source: I18nError,
    },

    /// The configuration holds a value the pipeline rejects.
    #[error(transparent)]
    Pipeline(#[from] I18nError),
}

/// Read the message file at `path` and add its messages for `country`.
///
/// The file name selects the language and format, as described by
/// [`parlance_common::i18n::parse_path`].
pub fn load_message_file(
    bundle: &mut Bundle,
    path: &Utf8Path,
    country: &str,
) -> Result<MessageFile, LoadError> {
    let buf = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = bundle
        .parse_message_file_bytes(&buf, path.as_str(), country)
        .map_err(|source| LoadError::Messages {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        target: "parlance::loader",
        "loaded {} message(s) for `{}` in country `{country}` from {path}",
        file.messages.len(),
        file.tag,
    );
    Ok(file)
}

/// Panicking variant of [`load_message_file`].
///
/// # Panics
///
/// Panics when the file cannot be read or its messages added.
pub fn must_load_message_file(bundle: &mut Bundle, path: &Utf8Path, country: &str) {
    if let Err(error) = load_message_file(bundle, path, country) {
        panic!("{error}");
    }
}

/// Build a bundle from `config`, resolving message files under `root`.
///
/// The JSON and TOML decoders are registered before any file is read.
/// Countries are loaded in key order and each country's languages in the
/// order they are listed.
pub fn build_bundle(config: &BundleConfig, root: &Utf8Path) -> Result<Bundle, LoadError> {
    let mut bundle = Bundle::new(config.default_country.clone(), config.default_language()?);
    register_default_formats(&mut bundle);

    for (country, languages) in &config.countries {
        for language in languages {
            let path = config.file_path(root, country, language);
            load_message_file(&mut bundle, &path, country)?;
        }
    }

    debug!(
        target: "parlance::loader",
        "built bundle for {} country(ies)",
        config.countries.len(),
    );
    Ok(bundle)
}
