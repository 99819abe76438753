//! Tests for CLI parsing and default behaviours.

use super::*;
use rstest::rstest;

fn render_args(cli: Cli) -> RenderArgs {
    match cli.command {
        Command::Render(args) => args,
        Command::Tags(_) => panic!("expected the render command"),
    }
}

#[test]
fn cli_parses_render_defaults() {
    let cli = Cli::parse_from(["parlance", "render", "HelloPerson"]);
    assert_eq!(cli.config, Utf8PathBuf::from(DEFAULT_CONFIG));

    let args = render_args(cli);
    assert_eq!(args.id, "HelloPerson");
    assert!(args.country.is_none());
    assert!(args.langs.is_empty());
    assert!(args.count.is_none());
    assert!(args.data.is_empty());
    assert!(args.default_text.is_none());
}

#[test]
fn cli_parses_render_options() {
    let cli = Cli::parse_from([
        "parlance",
        "render",
        "PersonCats",
        "--config",
        "lang/parlance.toml",
        "-C",
        "TR",
        "--lang",
        "tr-TR, en;q=0.8",
        "-l",
        "de",
        "-n",
        "2.50",
        "-d",
        "Name=Bob",
        "--data",
        "Count=2.50",
        "--default",
        "{{.Name}} has cats",
    ]);
    assert_eq!(cli.config, Utf8PathBuf::from("lang/parlance.toml"));

    let args = render_args(cli);
    assert_eq!(args.country.as_deref(), Some("TR"));
    assert_eq!(args.langs, ["tr-TR, en;q=0.8", "de"]);
    assert_eq!(args.count.as_deref(), Some("2.50"));
    assert_eq!(
        args.data,
        [
            ("Name".to_owned(), "Bob".to_owned()),
            ("Count".to_owned(), "2.50".to_owned()),
        ]
    );
    assert_eq!(args.default_text.as_deref(), Some("{{.Name}} has cats"));
}

#[test]
fn cli_accepts_the_config_after_the_subcommand() {
    let cli = Cli::parse_from(["parlance", "tags", "-c", "other.toml", "-C", "GB"]);

    assert_eq!(cli.config, Utf8PathBuf::from("other.toml"));
    match cli.command {
        Command::Tags(args) => assert_eq!(args.country.as_deref(), Some("GB")),
        Command::Render(_) => panic!("expected the tags command"),
    }
}

#[rstest]
#[case("Name=Bob", Some(("Name", "Bob")))]
#[case("Equation=a=b", Some(("Equation", "a=b")))]
#[case("Empty=", Some(("Empty", "")))]
#[case("=Bob", None)]
#[case("Name", None)]
fn data_entries_split_on_the_first_equals(
    #[case] raw: &str,
    #[case] expected: Option<(&str, &str)>,
) {
    let parsed = parse_key_value(raw).ok();
    assert_eq!(
        parsed.as_ref().map(|(key, value)| (key.as_str(), value.as_str())),
        expected
    );
}

#[test]
fn cli_rejects_malformed_data() {
    let outcome = Cli::try_parse_from(["parlance", "render", "Hello", "--data", "Name"]);
    assert!(outcome.is_err());
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["parlance"]).is_err());
}
