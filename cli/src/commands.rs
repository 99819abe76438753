//! Command execution for the Parlance CLI.
//!
//! Each command loads the bundle described by the configuration file and
//! writes its results to the supplied writer.

use std::collections::BTreeMap;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use parlance::{
    Bundle, BundleConfig, LocalizeConfig, Localizer, Message, Operands, TemplateData, build_bundle,
};

use crate::cli::{Cli, Command, RenderArgs, TagsArgs};
use crate::error::{CliError, Result};

/// Run the parsed command line, writing results to `stdout`.
pub fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let bundle = load_bundle(&cli.config)?;
    match &cli.command {
        Command::Render(args) => render(&bundle, args, stdout),
        Command::Tags(args) => tags(&bundle, args, stdout),
    }
}

/// Load the bundle described by the configuration file at `config`.
///
/// Message files resolve relative to the configuration file's directory.
pub fn load_bundle(config: &Utf8Path) -> Result<Bundle> {
    let bundle_config = BundleConfig::load(config)?;
    let root = config_root(config);
    debug!(target: "parlance::cli", "loading bundle from {config} rooted at {root}");
    Ok(build_bundle(&bundle_config, &root)?)
}

fn config_root(config: &Utf8Path) -> Utf8PathBuf {
    match config.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    }
}

fn render(bundle: &Bundle, args: &RenderArgs, stdout: &mut dyn Write) -> Result<()> {
    let preferences: Vec<&str> = args.langs.iter().map(String::as_str).collect();
    let mut localizer = Localizer::new(bundle, &preferences);
    if let Some(country) = &args.country {
        localizer = localizer.with_country_code(country.as_str());
    }

    let plural_count = args
        .count
        .as_deref()
        .map(str::parse::<Operands>)
        .transpose()
        .map_err(|source| CliError::InvalidCount { source })?;
    let data: BTreeMap<&str, &str> = args
        .data
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    let default_message = args
        .default_text
        .as_deref()
        .map(|text| Message::new(args.id.as_str(), text));

    let config = LocalizeConfig {
        message_id: &args.id,
        default_message: default_message.as_ref(),
        plural_count,
        template_data: (!data.is_empty()).then_some(&data as &dyn TemplateData),
        country_code: None,
    };
    let rendered = localizer
        .localize(&config)
        .map_err(|source| CliError::Render {
            id: args.id.clone(),
            source,
        })?;

    writeln!(stdout, "{rendered}")?;
    Ok(())
}

fn tags(bundle: &Bundle, args: &TagsArgs, stdout: &mut dyn Write) -> Result<()> {
    let countries: Vec<&str> = match &args.country {
        Some(country) if bundle.language_tags(country).is_empty() => {
            return Err(CliError::UnknownCountry {
                country: country.clone(),
            });
        }
        Some(country) => vec![country.as_str()],
        None => {
            let mut all: Vec<&str> = bundle.countries().collect();
            all.sort_unstable();
            all
        }
    };

    for country in countries {
        let tags: Vec<String> = bundle
            .language_tags(country)
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(stdout, "{country}: {}", tags.join(", "))?;
    }
    Ok(())
}
