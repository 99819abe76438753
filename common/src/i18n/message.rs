//! Source messages and their compiled templates.

use std::collections::BTreeMap;

use super::I18nError;
use super::plural::PluralCategory;
use super::template::{DEFAULT_LEFT_DELIM, DEFAULT_RIGHT_DELIM, Template, TemplateData, TemplateError};

/// A translatable message with one text per plural category.
///
/// `other` is required; the remaining categories override it only when the
/// active plural rule selects them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    /// Identifier unique within a language.
    pub id: String,
    /// Hash of the source message this translation was made from.
    pub hash: Option<String>,
    /// Note for translators.
    pub description: Option<String>,
    /// Left placeholder delimiter, `{{` when unset.
    pub left_delim: Option<String>,
    /// Right placeholder delimiter, `}}` when unset.
    pub right_delim: Option<String>,
    /// Text for the `zero` category.
    pub zero: Option<String>,
    /// Text for the `one` category.
    pub one: Option<String>,
    /// Text for the `two` category.
    pub two: Option<String>,
    /// Text for the `few` category.
    pub few: Option<String>,
    /// Text for the `many` category.
    pub many: Option<String>,
    /// Text for the `other` category, used when no other form applies.
    pub other: String,
}

impl Message {
    /// Create a message with only the `other` form.
    ///
    /// ```
    /// use parlance_common::{Message, PluralCategory};
    ///
    /// let message = Message::new("HelloPerson", "Hello {{.Name}}")
    ///     .with_form(PluralCategory::One, "Hello you");
    /// assert_eq!(message.text(PluralCategory::One), Some("Hello you"));
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            other: other.into(),
            ..Self::default()
        }
    }

    /// Set the text for `category`.
    #[must_use]
    pub fn with_form(mut self, category: PluralCategory, text: impl Into<String>) -> Self {
        let text = text.into();
        match category {
            PluralCategory::Zero => self.zero = Some(text),
            PluralCategory::One => self.one = Some(text),
            PluralCategory::Two => self.two = Some(text),
            PluralCategory::Few => self.few = Some(text),
            PluralCategory::Many => self.many = Some(text),
            PluralCategory::Other => self.other = text,
        }
        self
    }

    /// Override the placeholder delimiters.
    #[must_use]
    pub fn with_delims(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_delim = Some(left.into());
        self.right_delim = Some(right.into());
        self
    }

    /// Text for `category`, if one was provided.
    #[must_use]
    pub fn text(&self, category: PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => Some(self.other.as_str()),
        }
    }

    fn delims(&self) -> (&str, &str) {
        (
            self.left_delim.as_deref().unwrap_or(DEFAULT_LEFT_DELIM),
            self.right_delim.as_deref().unwrap_or(DEFAULT_RIGHT_DELIM),
        )
    }

    fn has_any_text(&self) -> bool {
        PluralCategory::ALL
            .iter()
            .filter_map(|category| self.text(*category))
            .any(|text| !text.is_empty())
    }
}

/// Compiled, immutable form of a [`Message`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageTemplate {
    id: String,
    other: Template,
    variants: BTreeMap<PluralCategory, Template>,
}

impl MessageTemplate {
    /// Compile every plural form of `message`.
    ///
    /// Fails with [`I18nError::TemplateCompile`] when any form is malformed
    /// and with [`I18nError::InvalidMessage`] when the message has no text
    /// or no identifier.
    pub fn new(message: &Message) -> Result<Self, I18nError> {
        if message.id.is_empty() {
            return Err(I18nError::InvalidMessage {
                id: String::new(),
                reason: "message id is empty".to_owned(),
            });
        }
        if !message.has_any_text() {
            return Err(I18nError::InvalidMessage {
                id: message.id.clone(),
                reason: "message has no text for any plural form".to_owned(),
            });
        }

        let (left, right) = message.delims();
        let compile = |source: &str| {
            Template::parse_with_delims(source, left, right).map_err(|error| {
                I18nError::TemplateCompile {
                    id: message.id.clone(),
                    reason: error.to_string(),
                }
            })
        };

        let other = compile(&message.other)?;
        let mut variants = BTreeMap::new();
        for category in PluralCategory::ALL {
            if category == PluralCategory::Other {
                continue;
            }
            if let Some(text) = message.text(category) {
                variants.insert(category, compile(text)?);
            }
        }

        Ok(Self {
            id: message.id.clone(),
            other,
            variants,
        })
    }

    /// Message identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the message distinguishes any category besides `Other`.
    #[must_use]
    pub fn has_plural_forms(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Template for `category`, falling back to `Other` when the message
    /// does not override that category.
    #[must_use]
    pub fn template(&self, category: PluralCategory) -> &Template {
        self.variants.get(&category).unwrap_or(&self.other)
    }

    /// Render the form for `category` with `data`.
    pub fn execute(
        &self,
        category: PluralCategory,
        data: &dyn TemplateData,
    ) -> Result<String, I18nError> {
        self.template(category)
            .render(data)
            .map_err(|error| match error {
                TemplateError::MissingData { name } => I18nError::MissingTemplateData {
                    id: self.id.clone(),
                    name,
                },
                other => I18nError::TemplateCompile {
                    id: self.id.clone(),
                    reason: other.to_string(),
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn items() -> Message {
        Message::new("Items", "{{Count}} items").with_form(PluralCategory::One, "{{Count}} item")
    }

    fn compiled(message: &Message) -> MessageTemplate {
        MessageTemplate::new(message).unwrap_or_else(|error| panic!("should compile: {error}"))
    }

    #[rstest]
    #[case(PluralCategory::One, "1 item")]
    #[case(PluralCategory::Other, "1 items")]
    #[case(PluralCategory::Few, "1 items")]
    fn selects_forms_with_other_fallback(#[case] category: PluralCategory, #[case] expected: &str) {
        let template = compiled(&items());

        assert_eq!(template.execute(category, &[("Count", 1)]), Ok(expected.to_owned()));
    }

    #[rstest]
    fn reports_plural_variants() {
        assert!(compiled(&items()).has_plural_forms());
        assert!(!compiled(&Message::new("Plain", "text")).has_plural_forms());
    }

    #[rstest]
    fn compile_errors_name_the_message() {
        let broken = Message::new("Broken", "ok").with_form(PluralCategory::Few, "{{oops");

        assert!(matches!(
            MessageTemplate::new(&broken),
            Err(I18nError::TemplateCompile { id, .. }) if id == "Broken"
        ));
    }

    #[rstest]
    #[case(Message::new("", "text"))]
    #[case(Message::new("Empty", ""))]
    fn rejects_unusable_messages(#[case] message: Message) {
        assert!(matches!(
            MessageTemplate::new(&message),
            Err(I18nError::InvalidMessage { .. })
        ));
    }

    #[rstest]
    fn accepts_messages_with_only_plural_forms() {
        let message = Message::new("Only", "").with_form(PluralCategory::One, "one thing");
        let template = compiled(&message);

        assert_eq!(
            template.execute(PluralCategory::One, &[("x", "y")]),
            Ok("one thing".to_owned())
        );
    }

    #[rstest]
    fn honours_custom_delimiters() {
        let message = Message::new("Custom", "<<Name>> {{kept}}").with_delims("<<", ">>");

        assert_eq!(
            compiled(&message).execute(PluralCategory::Other, &[("Name", "Ada")]),
            Ok("Ada {{kept}}".to_owned())
        );
    }

    #[rstest]
    fn maps_missing_data_to_pipeline_error() {
        let template = compiled(&Message::new("Hello", "Hello {{Missing}}"));

        assert_eq!(
            template.execute(PluralCategory::Other, &[("Name", "Bob")]),
            Err(I18nError::MissingTemplateData {
                id: "Hello".to_owned(),
                name: "Missing".to_owned()
            })
        );
    }
}
