//! Interpolation templates.
//!
//! A template is literal text interleaved with named placeholders written
//! between a left and right delimiter (`{{` and `}}` unless a message
//! overrides them). A placeholder may carry a leading dot, so `{{.Name}}`
//! and `{{ Name }}` both read the `Name` entry of the template data.

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use thiserror::Error;

/// Default left delimiter for placeholders.
pub const DEFAULT_LEFT_DELIM: &str = "{{";

/// Default right delimiter for placeholders.
pub const DEFAULT_RIGHT_DELIM: &str = "}}";

/// Failure while parsing or rendering a [`Template`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A delimiter was configured as the empty string.
    #[error("template delimiters must not be empty")]
    EmptyDelimiter,

    /// An opening delimiter has no closing partner.
    #[error("unterminated placeholder starting at byte {offset}")]
    Unterminated { offset: usize },

    /// The text between the delimiters is not a valid name.
    #[error("invalid placeholder `{name}` at byte {offset}")]
    InvalidPlaceholder { offset: usize, name: String },

    /// Rendering referenced a name absent from the template data.
    #[error("no template data for `{name}`")]
    MissingData { name: String },
}

/// Source of values substituted into placeholders.
///
/// Implemented for string-keyed maps and slices of pairs whose values
/// implement [`Display`], and for JSON objects.
pub trait TemplateData {
    /// Return the rendered value for `name`, if present.
    fn value(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T: TemplateData + ?Sized> TemplateData for &T {
    fn value(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).value(name)
    }
}

impl<K, V, S> TemplateData for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: Display,
    S: BuildHasher,
{
    fn value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Owned(value.to_string()))
    }
}

impl<K, V> TemplateData for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Display,
{
    fn value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Owned(value.to_string()))
    }
}

impl<K, V> TemplateData for [(K, V)]
where
    K: AsRef<str>,
    V: Display,
{
    fn value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| Cow::Owned(value.to_string()))
    }
}

impl<K, V, const N: usize> TemplateData for [(K, V); N]
where
    K: AsRef<str>,
    V: Display,
{
    fn value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_slice().value(name)
    }
}

impl TemplateData for serde_json::Value {
    fn value(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(Cow::Borrowed(text.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed interpolation template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source` using the default `{{`/`}}` delimiters.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        Self::parse_with_delims(source, DEFAULT_LEFT_DELIM, DEFAULT_RIGHT_DELIM)
    }

    /// Parse `source` using custom delimiters.
    ///
    /// ```
    /// use parlance_common::Template;
    ///
    /// let template = Template::parse_with_delims("Hi <<.Name>>", "<<", ">>").expect("parses");
    /// assert_eq!(template.placeholders().collect::<Vec<_>>(), ["Name"]);
    /// ```
    pub fn parse_with_delims(source: &str, left: &str, right: &str) -> Result<Self, TemplateError> {
        if left.is_empty() || right.is_empty() {
            return Err(TemplateError::EmptyDelimiter);
        }

        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(left) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_owned()));
            }

            let inner_start = start + left.len();
            let after_open = &rest[inner_start..];
            let end = after_open.find(right).ok_or(TemplateError::Unterminated {
                offset: offset + start,
            })?;

            let raw_name = after_open[..end].trim();
            let name = raw_name.strip_prefix('.').unwrap_or(raw_name);
            if !is_identifier(name) {
                return Err(TemplateError::InvalidPlaceholder {
                    offset: offset + start,
                    name: raw_name.to_owned(),
                });
            }
            segments.push(Segment::Placeholder(name.to_owned()));

            let consumed = inner_start + end + right.len();
            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }

        Ok(Self {
            source: source.to_owned(),
            segments,
        })
    }

    /// The text the template was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names referenced by the template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder with its value from `data`.
    ///
    /// A placeholder without a value is an error; nothing is rendered in
    /// its place.
    pub fn render(&self, data: &dyn TemplateData) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    let value = data.value(name).ok_or_else(|| TemplateError::MissingData {
                        name: name.clone(),
                    })?;
                    output.push_str(&value);
                }
            }
        }
        Ok(output)
    }
}

/// Empty data source used when a caller supplies none.
pub(crate) struct NoData;

impl TemplateData for NoData {
    fn value(&self, _name: &str) -> Option<Cow<'_, str>> {
        None
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|rest| rest.is_ascii_alphanumeric() || rest == '_')
}
