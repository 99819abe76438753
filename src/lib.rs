//! Parlance assembles country-aware message bundles from configuration and
//! message files on disk.
//!
//! The resolution pipeline itself lives in [`parlance_common`]; this crate
//! adds the TOML configuration layer, the JSON and TOML file decoders and
//! file loading.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use parlance::{BundleConfig, LocalizeConfig, Localizer, build_bundle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BundleConfig::load(Utf8Path::new("parlance.toml"))?;
//! let bundle = build_bundle(&config, Utf8Path::new("."))?;
//! let localizer = Localizer::new(&bundle, &["tr-TR, en;q=0.8"]);
//! let data = [("Name", "Bob")];
//! let greeting = localizer.localize(&LocalizeConfig::new("HelloPerson").with_template_data(&data))?;
//! # let _ = greeting;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod formats;
pub mod loader;

pub use config::BundleConfig;
pub use formats::register_default_formats;
pub use loader::{LoadError, build_bundle, load_message_file, must_load_message_file};
pub use parlance_common::{
    Bundle, I18nError, LocalizeConfig, Localizer, Message, MessageFile, Operands, PluralCategory,
    TemplateData, parse_accept_language, parse_tag,
};
