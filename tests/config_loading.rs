//! Behaviour-driven tests for bundle configuration loading.

use std::cell::RefCell;
use std::convert::Infallible;
use std::fs;
use std::str::FromStr;

use camino::Utf8PathBuf;
use parlance::{Bundle, BundleConfig, LocalizeConfig, Localizer, build_bundle};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Message file queued for writing: country, language and greeting.
type QueuedFile = (String, String, String);

#[fixture]
fn config_source() -> RefCell<Option<String>> {
    RefCell::new(None)
}

#[fixture]
fn message_files() -> RefCell<Vec<QueuedFile>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn load_result() -> RefCell<Option<Result<BundleConfig, String>>> {
    RefCell::new(None)
}

#[fixture]
fn built_bundle() -> RefCell<Option<Result<Bundle, String>>> {
    RefCell::new(None)
}

#[derive(Debug)]
struct Quoted(String);

impl FromStr for Quoted {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''));

        Ok(Self(trimmed.to_owned()))
    }
}

impl Quoted {
    fn into_inner(self) -> String {
        self.0
    }
}

fn parse_config(config_source: &RefCell<Option<String>>) -> Result<BundleConfig, String> {
    config_source
        .borrow()
        .as_deref()
        .map_or_else(
            || Ok(BundleConfig::default()),
            |source| BundleConfig::from_toml_str(source).map_err(|error| error.to_string()),
        )
}

fn loaded_config(load_result: &RefCell<Option<Result<BundleConfig, String>>>) -> BundleConfig {
    match load_result.borrow().as_ref() {
        Some(Ok(config)) => config.clone(),
        Some(Err(error)) => panic!("expected configuration loading to succeed: {error}"),
        None => panic!("configuration should be loaded"),
    }
}

#[given("no configuration source is provided")]
fn no_source(config_source: &RefCell<Option<String>>) {
    config_source.borrow_mut().take();
}

#[given("the configuration serves {first} and {second} in country {country}")]
fn serves_two_languages(
    config_source: &RefCell<Option<String>>,
    first: String,
    second: String,
    country: String,
) {
    config_source.borrow_mut().replace(format!(
        concat!(
            "default_language = \"{first}\"\n",
            "default_country = \"{country}\"\n",
            "locales_dir = \"lang\"\n",
            "[countries]\n",
            "{country} = [\"{first}\", \"{second}\"]\n",
        ),
        first = first,
        second = second,
        country = country,
    ));
}

#[given("the configuration includes unknown fields")]
fn unknown_fields(config_source: &RefCell<Option<String>>) {
    config_source.borrow_mut().replace(
        concat!(
            "default_language = \"en\"\n",
            "fallback_language = \"fr\"\n",
        )
        .to_owned(),
    );
}

#[given("the message file for {language} in country {country} greets with {greeting}")]
fn queue_message_file(
    message_files: &RefCell<Vec<QueuedFile>>,
    language: String,
    country: String,
    greeting: Quoted,
) {
    message_files
        .borrow_mut()
        .push((country, language, greeting.into_inner()));
}

#[when("the bundle configuration is loaded")]
fn load_config(
    config_source: &RefCell<Option<String>>,
    load_result: &RefCell<Option<Result<BundleConfig, String>>>,
) {
    load_result.borrow_mut().replace(parse_config(config_source));
}

#[when("the bundle is built")]
fn build(
    config_source: &RefCell<Option<String>>,
    message_files: &RefCell<Vec<QueuedFile>>,
    built_bundle: &RefCell<Option<Result<Bundle, String>>>,
) {
    let config = parse_config(config_source)
        .unwrap_or_else(|error| panic!("configuration should parse: {error}"));
    let dir = tempfile::tempdir().unwrap_or_else(|error| panic!("temp dir: {error}"));
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temp dir is not UTF-8: {}", path.display()));

    for (country, language, greeting) in message_files.borrow().iter() {
        let path = config.file_path(&root, country, language);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|error| panic!("create {parent}: {error}"));
        }
        fs::write(&path, format!("HelloPerson = \"{greeting} {{{{.Name}}}}\"\n"))
            .unwrap_or_else(|error| panic!("write {path}: {error}"));
    }

    let outcome = build_bundle(&config, &root).map_err(|error| error.to_string());
    built_bundle.borrow_mut().replace(outcome);
}

#[then("the default language is {expected}")]
fn assert_default_language(
    load_result: &RefCell<Option<Result<BundleConfig, String>>>,
    expected: String,
) {
    assert_eq!(loaded_config(load_result).default_language, expected);
}

#[then("the default country is {expected}")]
fn assert_default_country(
    load_result: &RefCell<Option<Result<BundleConfig, String>>>,
    expected: String,
) {
    assert_eq!(loaded_config(load_result).default_country, expected);
}

#[then("country {country} serves {count} languages")]
fn assert_language_count(
    load_result: &RefCell<Option<Result<BundleConfig, String>>>,
    country: String,
    count: usize,
) {
    let config = loaded_config(load_result);
    assert_eq!(config.countries.get(&country).map(Vec::len), Some(count));
}

#[then("a configuration error mentioning {snippet} is reported")]
fn assert_error_with_snippet(
    load_result: &RefCell<Option<Result<BundleConfig, String>>>,
    snippet: Quoted,
) {
    let snippet_value = snippet.into_inner();
    let borrow = load_result.borrow();
    match borrow.as_ref() {
        Some(Err(error)) => {
            assert!(
                error.contains(snippet_value.as_str()),
                "expected error '{error}' to mention '{snippet_value}'",
            );
        }
        Some(Ok(config)) => {
            panic!("expected configuration loading to fail but succeeded with {config:?}")
        }
        None => panic!("configuration should be loaded"),
    }
}

#[then("greeting {name} with preference {header} yields {expected}")]
fn assert_greeting(
    built_bundle: &RefCell<Option<Result<Bundle, String>>>,
    name: String,
    header: Quoted,
    expected: Quoted,
) {
    let borrow = built_bundle.borrow();
    let bundle = match borrow.as_ref() {
        Some(Ok(bundle)) => bundle,
        Some(Err(error)) => panic!("expected the bundle to build: {error}"),
        None => panic!("the bundle should be built"),
    };
    let header = header.into_inner();
    let localizer = Localizer::new(bundle, &[header.as_str()]);
    let data = [("Name", name.as_str())];

    let greeting = localizer
        .localize(&LocalizeConfig::new("HelloPerson").with_template_data(&data))
        .unwrap_or_else(|error| panic!("greeting should render: {error}"));

    assert_eq!(greeting, expected.into_inner());
}

#[scenario("tests/features/config_loading.feature", index = 0)]
fn scenario_defaults(
    config_source: RefCell<Option<String>>,
    load_result: RefCell<Option<Result<BundleConfig, String>>>,
) {
    let _ = (config_source, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 1)]
fn scenario_country_tables(
    config_source: RefCell<Option<String>>,
    load_result: RefCell<Option<Result<BundleConfig, String>>>,
) {
    let _ = (config_source, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 2)]
fn scenario_unknown_fields(
    config_source: RefCell<Option<String>>,
    load_result: RefCell<Option<Result<BundleConfig, String>>>,
) {
    let _ = (config_source, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 3)]
fn scenario_bundle_from_disk(
    config_source: RefCell<Option<String>>,
    message_files: RefCell<Vec<QueuedFile>>,
    built_bundle: RefCell<Option<Result<Bundle, String>>>,
) {
    let _ = (config_source, message_files, built_bundle);
}
