//! Message files and the decoders that read them.
//!
//! A message file is named `<anything>.<tag>.<format>`, for example
//! `locales/tr/active.en-US.toml`. The format selects an [`UnmarshalFn`]
//! registered on the bundle; the decoder returns [`Message`] records,
//! usually by reading its input into a [`serde_json::Value`] tree and
//! passing it to [`messages_from_value`].

use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::I18nError;
use super::message::Message;
use super::tag::{LanguageTag, parse_tag};

/// Failure reported by an [`UnmarshalFn`].
pub type UnmarshalError = Box<dyn Error + Send + Sync>;

/// Decoder turning the raw bytes of a message file into messages.
pub type UnmarshalFn = Arc<dyn Fn(&[u8]) -> Result<Vec<Message>, UnmarshalError> + Send + Sync>;

/// Keys that mark a table as a single message rather than a namespace.
const RESERVED_KEYS: [&str; 11] = [
    "id",
    "description",
    "hash",
    "leftdelim",
    "rightdelim",
    "zero",
    "one",
    "two",
    "few",
    "many",
    "other",
];

/// Messages decoded from one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageFile {
    /// Path the file was read from, as given by the caller.
    pub path: String,
    /// Language named by the path.
    pub tag: LanguageTag,
    /// Format named by the path extension.
    pub format: String,
    /// Decoded messages, in decoder order.
    pub messages: Vec<Message>,
}

/// Split `path` into the language tag and format it names.
///
/// ```
/// use parlance_common::i18n::parse_path;
///
/// let (tag, format) = parse_path("locales/tr/active.en-US.toml").expect("valid path");
/// assert_eq!((tag.to_string().as_str(), format.as_str()), ("en-US", "toml"));
///
/// let (tag, _) = parse_path("tr.json").expect("valid path");
/// assert_eq!(tag.to_string(), "tr");
/// ```
pub fn parse_path(path: &str) -> Result<(LanguageTag, String), I18nError> {
    let invalid = || I18nError::InvalidPath {
        path: path.to_owned(),
    };

    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let (stem, format) = file_name.rsplit_once('.').ok_or_else(invalid)?;
    let raw_tag = stem.rsplit_once('.').map_or(stem, |(_, tag)| tag);
    if format.is_empty() || raw_tag.is_empty() {
        return Err(invalid());
    }

    Ok((parse_tag(raw_tag)?, format.to_owned()))
}

/// Decode `buf` with the decoder registered for the format `path` names.
///
/// An empty buffer yields a file with no messages without invoking the
/// decoder.
pub fn parse_message_file(
    buf: &[u8],
    path: &str,
    unmarshal_fns: &HashMap<String, UnmarshalFn>,
) -> Result<MessageFile, I18nError> {
    let (tag, format) = parse_path(path)?;
    let unmarshal = unmarshal_fns
        .get(&format)
        .ok_or_else(|| I18nError::NoUnmarshalFunc {
            format: format.clone(),
            path: path.to_owned(),
        })?;

    let messages = if buf.is_empty() {
        Vec::new()
    } else {
        unmarshal(buf).map_err(|error| match error.downcast::<I18nError>() {
            Ok(pipeline) => *pipeline,
            Err(other) => I18nError::Unmarshal {
                path: path.to_owned(),
                reason: other.to_string(),
            },
        })?
    };

    Ok(MessageFile {
        path: path.to_owned(),
        tag,
        format,
        messages,
    })
}

/// Convert a decoded tree into messages.
///
/// - a string value is a message with only the `other` form, identified
///   by its key;
/// - a table holding any reserved key (`id`, `description`, `hash`,
///   `leftDelim`, `rightDelim` or a plural keyword, in any case) is one
///   message;
/// - any other table is a namespace whose entries get `.`-joined ids;
/// - a top-level array holds message tables that carry their own `id`.
///
/// ```
/// use parlance_common::i18n::messages_from_value;
/// use serde_json::json;
///
/// let messages = messages_from_value(&json!({
///     "greeting": { "hello": "Hello {{.Name}}" },
///     "Cats": { "one": "{{.PluralCount}} cat", "other": "{{.PluralCount}} cats" },
/// }))
/// .expect("valid tree");
/// let ids: Vec<&str> = messages.iter().map(|message| message.id.as_str()).collect();
/// assert_eq!(ids, ["Cats", "greeting.hello"]);
/// ```
pub fn messages_from_value(value: &Value) -> Result<Vec<Message>, I18nError> {
    let mut messages = Vec::new();
    match value {
        Value::Null => {}
        Value::Object(map) => collect_namespace(map, None, &mut messages)?,
        Value::Array(items) => {
            for item in items {
                let Value::Object(map) = item else {
                    return Err(I18nError::InvalidMessage {
                        id: String::new(),
                        reason: format!("expected a message table, found {}", kind(item)),
                    });
                };
                messages.push(message_from_table(None, map)?);
            }
        }
        other => {
            return Err(I18nError::InvalidMessage {
                id: String::new(),
                reason: format!("expected a table of messages, found {}", kind(other)),
            });
        }
    }
    Ok(messages)
}

fn collect_namespace(
    map: &Map<String, Value>,
    prefix: Option<&str>,
    messages: &mut Vec<Message>,
) -> Result<(), I18nError> {
    for (key, value) in map {
        let id = prefix.map_or_else(|| key.clone(), |namespace| format!("{namespace}.{key}"));
        match value {
            Value::String(text) => messages.push(Message::new(id, text.clone())),
            Value::Object(table) if is_message_table(table) => {
                messages.push(message_from_table(Some(id), table)?);
            }
            Value::Object(table) => collect_namespace(table, Some(&id), messages)?,
            other => {
                return Err(I18nError::InvalidMessage {
                    reason: format!("unsupported {} value", kind(other)),
                    id,
                });
            }
        }
    }
    Ok(())
}

fn is_message_table(table: &Map<String, Value>) -> bool {
    table
        .keys()
        .any(|key| RESERVED_KEYS.contains(&key.to_ascii_lowercase().as_str()))
}

fn message_from_table(
    path_id: Option<String>,
    table: &Map<String, Value>,
) -> Result<Message, I18nError> {
    let mut message = Message::default();
    let mut explicit_id = None;

    for (key, value) in table {
        let field = key.to_ascii_lowercase();
        if !RESERVED_KEYS.contains(&field.as_str()) {
            continue;
        }

        let Value::String(text) = value else {
            return Err(I18nError::InvalidMessage {
                id: path_id.clone().unwrap_or_default(),
                reason: format!("`{key}` must be a string, found {}", kind(value)),
            });
        };
        let text = text.clone();
        match field.as_str() {
            "id" => explicit_id = Some(text),
            "description" => message.description = Some(text),
            "hash" => message.hash = Some(text),
            "leftdelim" => message.left_delim = Some(text),
            "rightdelim" => message.right_delim = Some(text),
            "zero" => message.zero = Some(text),
            "one" => message.one = Some(text),
            "two" => message.two = Some(text),
            "few" => message.few = Some(text),
            "many" => message.many = Some(text),
            _ => message.other = text,
        }
    }

    message.id = explicit_id
        .or(path_id)
        .ok_or_else(|| I18nError::InvalidMessage {
            id: String::new(),
            reason: "message table has no `id`".to_owned(),
        })?;
    Ok(message)
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::plural::PluralCategory;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn json_fns() -> HashMap<String, UnmarshalFn> {
        let json: UnmarshalFn = Arc::new(|buf: &[u8]| -> Result<Vec<Message>, UnmarshalError> {
            let value: Value = serde_json::from_slice(buf)?;
            Ok(messages_from_value(&value)?)
        });
        HashMap::from([("json".to_owned(), json)])
    }

    #[rstest]
    #[case("active.en-US.toml", "en-US", "toml")]
    #[case("locales/tr/active.tr.json", "tr", "json")]
    #[case("en.json", "en", "json")]
    #[case(r"lang\gb\messages.pt-BR.yaml", "pt-BR", "yaml")]
    #[case("dir.with.dots/active.fr.toml", "fr", "toml")]
    fn parses_paths(#[case] path: &str, #[case] tag: &str, #[case] format: &str) {
        let (parsed_tag, parsed_format) =
            parse_path(path).unwrap_or_else(|error| panic!("`{path}` should parse: {error}"));

        assert_eq!(parsed_tag.to_string(), tag);
        assert_eq!(parsed_format, format);
    }

    #[rstest]
    #[case("no_extension")]
    #[case("trailing.")]
    #[case("locales/.toml")]
    fn rejects_paths_without_tag_or_format(#[case] path: &str) {
        assert_eq!(
            parse_path(path),
            Err(I18nError::InvalidPath {
                path: path.to_owned()
            })
        );
    }

    #[rstest]
    fn rejects_unparsable_tags() {
        assert!(matches!(
            parse_path("active.@@.toml"),
            Err(I18nError::InvalidTag { .. })
        ));
    }

    #[rstest]
    fn reports_unregistered_formats(json_fns: HashMap<String, UnmarshalFn>) {
        assert_eq!(
            parse_message_file(b"x", "active.en.yaml", &json_fns),
            Err(I18nError::NoUnmarshalFunc {
                format: "yaml".to_owned(),
                path: "active.en.yaml".to_owned()
            })
        );
    }

    #[rstest]
    fn decodes_registered_formats(json_fns: HashMap<String, UnmarshalFn>) {
        let file = parse_message_file(br#"{"Hello": "Merhaba"}"#, "lang/active.tr.json", &json_fns)
            .unwrap_or_else(|error| panic!("file should parse: {error}"));

        assert_eq!(file.tag.to_string(), "tr");
        assert_eq!(file.format, "json");
        assert_eq!(file.messages, [Message::new("Hello", "Merhaba")]);
    }

    #[rstest]
    fn empty_files_hold_no_messages(json_fns: HashMap<String, UnmarshalFn>) {
        let file = parse_message_file(b"", "active.en.json", &json_fns)
            .unwrap_or_else(|error| panic!("empty file should parse: {error}"));

        assert!(file.messages.is_empty());
    }

    #[rstest]
    fn wraps_decoder_failures(json_fns: HashMap<String, UnmarshalFn>) {
        let outcome = parse_message_file(b"{ nope", "active.en.json", &json_fns);

        assert!(matches!(
            outcome,
            Err(I18nError::Unmarshal { path, .. }) if path == "active.en.json"
        ));
    }

    #[rstest]
    fn passes_through_message_errors(json_fns: HashMap<String, UnmarshalFn>) {
        let outcome = parse_message_file(br#"{"Count": 3}"#, "active.en.json", &json_fns);

        assert!(matches!(
            outcome,
            Err(I18nError::InvalidMessage { id, .. }) if id == "Count"
        ));
    }

    #[rstest]
    fn reads_message_tables_case_insensitively() {
        let messages = messages_from_value(&json!({
            "PersonCats": {
                "Description": "cats owned by a person",
                "LeftDelim": "<<",
                "RightDelim": ">>",
                "One": "<<.Name>> has <<.Count>> cat",
                "other": "<<.Name>> has <<.Count>> cats",
            }
        }))
        .unwrap_or_else(|error| panic!("tree should decode: {error}"));

        let expected = Message::new("PersonCats", "<<.Name>> has <<.Count>> cats")
            .with_form(PluralCategory::One, "<<.Name>> has <<.Count>> cat")
            .with_delims("<<", ">>");
        assert_eq!(
            messages,
            [Message {
                description: Some("cats owned by a person".to_owned()),
                ..expected
            }]
        );
    }

    #[rstest]
    fn flattens_nested_namespaces() {
        let messages = messages_from_value(&json!({
            "menu": { "file": { "open": "Open", "close": { "other": "Close" } } }
        }))
        .unwrap_or_else(|error| panic!("tree should decode: {error}"));

        let ids: Vec<&str> = messages.iter().map(|message| message.id.as_str()).collect();
        assert_eq!(ids, ["menu.file.close", "menu.file.open"]);
    }

    #[rstest]
    fn explicit_ids_override_the_key() {
        let messages = messages_from_value(&json!({ "key": { "id": "Real", "other": "x" } }))
            .unwrap_or_else(|error| panic!("tree should decode: {error}"));

        assert_eq!(messages, [Message::new("Real", "x")]);
    }

    #[rstest]
    fn reads_arrays_of_message_tables() {
        let messages = messages_from_value(&json!([
            { "id": "One", "other": "first" },
            { "id": "Two", "other": "second" },
        ]))
        .unwrap_or_else(|error| panic!("array should decode: {error}"));

        assert_eq!(
            messages,
            [Message::new("One", "first"), Message::new("Two", "second")]
        );
    }

    #[rstest]
    #[case(json!([{ "other": "no id" }]))]
    #[case(json!(["bare string"]))]
    #[case(json!("top-level string"))]
    #[case(json!({ "Flag": true }))]
    #[case(json!({ "Bad": { "other": 3 } }))]
    fn rejects_malformed_trees(#[case] value: Value) {
        assert!(matches!(
            messages_from_value(&value),
            Err(I18nError::InvalidMessage { .. })
        ));
    }
}
