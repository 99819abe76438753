use std::collections::HashMap;
use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::json;

use super::testing::tag;
use super::{
    Bundle, I18nError, LocalizeConfig, Localizer, Message, UnmarshalError, UnmarshalFn,
    messages_from_value,
};

const ENGLISH: &str = r#"{
    "HelloPerson": "Hello {{.Name}}",
    "PersonUnreadEmails": {
        "description": "The number of unread emails a person has",
        "one": "{{.Name}} has {{.UnreadEmailCount}} unread email.",
        "other": "{{.Name}} has {{.UnreadEmailCount}} unread emails."
    },
    "menu": { "open": "Open" }
}"#;

const TURKISH: &str = r#"{
    "HelloPerson": "Merhaba {{.Name}}",
    "PersonUnreadEmails": {
        "one": "{{.Name}} {{.UnreadEmailCount}} okunmamış e-postaya sahip.",
        "other": "{{.Name}} {{.UnreadEmailCount}} okunmamış e-postaya sahip."
    }
}"#;

#[fixture]
fn bundle() -> Bundle {
    let json: UnmarshalFn = Arc::new(|buf: &[u8]| -> Result<Vec<Message>, UnmarshalError> {
        let value: serde_json::Value = serde_json::from_slice(buf)?;
        Ok(messages_from_value(&value)?)
    });

    let mut bundle = Bundle::new("TR", tag("tr"));
    bundle.register_unmarshal_fn("json", json);
    for country in ["TR", "GB"] {
        bundle.must_parse_message_file_bytes(TURKISH.as_bytes(), "lang/active.tr.json", country);
        bundle.must_parse_message_file_bytes(ENGLISH.as_bytes(), "lang/active.en.json", country);
    }
    bundle
}

#[rstest]
#[case("en-GB,en;q=0.9", "TR", "Hello Bob")]
#[case("tr-TR", "GB", "Merhaba Bob")]
#[case("ja, de;q=0.8", "GB", "Merhaba Bob")]
#[case("", "TR", "Merhaba Bob")]
fn resolves_accept_language_headers(
    bundle: Bundle,
    #[case] header: &str,
    #[case] country: &str,
    #[case] expected: &str,
) {
    let localizer = Localizer::new(&bundle, &[header]).with_country_code(country);
    let data = HashMap::from([("Name", "Bob")]);
    let config = LocalizeConfig::new("HelloPerson").with_template_data(&data);

    assert_eq!(localizer.localize(&config), Ok(expected.to_owned()));
}

#[rstest]
#[case(1, "Bob has 1 unread email.")]
#[case(2, "Bob has 2 unread emails.")]
fn pluralises_with_json_template_data(bundle: Bundle, #[case] count: u32, #[case] expected: &str) {
    let localizer = Localizer::new(&bundle, &["en"]);
    let data = json!({ "Name": "Bob", "UnreadEmailCount": count });
    let config = LocalizeConfig::new("PersonUnreadEmails")
        .with_plural_count(count)
        .with_template_data(&data);

    assert_eq!(localizer.localize(&config), Ok(expected.to_owned()));
}

#[rstest]
fn renders_non_ascii_translations(bundle: Bundle) {
    let localizer = Localizer::new(&bundle, &["tr"]);
    let data = json!({ "Name": "Bob", "UnreadEmailCount": 3 });
    let config = LocalizeConfig::new("PersonUnreadEmails")
        .with_plural_count(3_u32)
        .with_template_data(&data);

    assert_eq!(
        localizer.localize(&config),
        Ok("Bob 3 okunmamış e-postaya sahip.".to_owned())
    );
}

#[rstest]
fn nested_ids_are_dot_joined(bundle: Bundle) {
    let localizer = Localizer::new(&bundle, &["en"]);

    assert_eq!(
        localizer.localize(&LocalizeConfig::new("menu.open")),
        Ok("Open".to_owned())
    );
}

#[rstest]
fn default_messages_cover_unlisted_ids(bundle: Bundle) {
    let localizer = Localizer::new(&bundle, &["tr"]);
    let default = Message::new("Farewell", "Goodbye {{.Name}}");
    let data = [("Name", "Bob")];
    let config = LocalizeConfig::new("Farewell")
        .with_default_message(&default)
        .with_template_data(&data);

    let (text, used) = localizer
        .localize_with_tag(&config)
        .unwrap_or_else(|error| panic!("default message should render: {error}"));

    assert_eq!(text, "Goodbye Bob");
    assert_eq!(used, tag("tr"));
}

#[rstest]
fn unregistered_countries_do_not_match(bundle: Bundle) {
    let localizer = Localizer::new(&bundle, &["en"]).with_country_code("US");

    assert_eq!(
        localizer.localize(&LocalizeConfig::new("HelloPerson")),
        Err(I18nError::NoMatch {
            country: "US".to_owned()
        })
    );
}
