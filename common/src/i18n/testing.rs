//! Fixtures shared by unit and behaviour tests.
//!
//! These helpers panic on invalid input; they are intended for tests and
//! examples where a failure is a bug in the fixture itself.

use super::bundle::Bundle;
use super::message::Message;
use super::plural::PluralCategory;
use super::tag::{LanguageTag, parse_tag};

/// Parse `raw`, panicking when it is not a valid tag.
#[must_use]
pub fn tag(raw: &str) -> LanguageTag {
    parse_tag(raw).unwrap_or_else(|error| panic!("fixture tag `{raw}` should parse: {error}"))
}

/// A bundle with English, Turkish and German messages across three
/// countries.
///
/// - `gb` (the default country) has English only, including plural
///   messages and one referencing a `Missing` placeholder;
/// - `tr` has Turkish plus an English message absent from Turkish;
/// - `de` has German only, so the English default never matches there.
#[must_use]
pub fn greeting_bundle() -> Bundle {
    let english = tag("en");
    let mut bundle = Bundle::new("gb", english.clone());

    bundle.must_add_messages(
        "gb",
        &english,
        &[
            Message::new("HelloPerson", "Hello {{.Name}}"),
            Message::new("Items", "{{Count}} items").with_form(PluralCategory::One, "{{Count}} item"),
            Message::new("Cats", "{{.PluralCount}} cats")
                .with_form(PluralCategory::One, "{{.PluralCount}} cat"),
            Message::new("NeedsMissing", "Hello {{Missing}}"),
        ],
    );
    bundle.must_add_messages(
        "tr",
        &tag("tr"),
        &[Message::new("HelloPerson", "Merhaba {{.Name}}")],
    );
    bundle.must_add_messages(
        "tr",
        &english,
        &[Message::new("EnglishOnly", "Only in English, {{.Name}}")],
    );
    bundle.must_add_messages(
        "de",
        &tag("de"),
        &[Message::new("HelloPerson", "Hallo {{.Name}}")],
    );
    bundle
}
