use thiserror::Error;

/// Error raised when the message pipeline cannot satisfy a caller request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when messages are added for a language with no plural rule.
    #[error("no plural rule registered for `{tag}`")]
    NoPluralRule { tag: String },

    /// Raised when no registered language satisfies the caller's preferences
    /// and the default language is not registered for the country.
    #[error("no registered language matches the preferences for country `{country}`")]
    NoMatch { country: String },

    /// Raised when the message is absent for the resolved language and no
    /// default message was supplied.
    #[error("message `{id}` not found for language `{tag}`")]
    MessageNotFound { id: String, tag: String },

    /// Raised when a message's interpolation syntax is malformed.
    #[error("message `{id}` failed to compile: {reason}")]
    TemplateCompile { id: String, reason: String },

    /// Raised when a placeholder has no corresponding template data entry.
    #[error("message `{id}` references `{name}` but no data was supplied for it")]
    MissingTemplateData { id: String, name: String },

    /// Raised when a message file declares a format with no unmarshal function.
    #[error("no unmarshal function registered for format `{format}` (file `{path}`)")]
    NoUnmarshalFunc { format: String, path: String },

    /// Raised when a message file's content cannot be decoded.
    #[error("failed to unmarshal `{path}`: {reason}")]
    Unmarshal { path: String, reason: String },

    /// Raised when a message file path does not follow the naming convention.
    #[error("message file path `{path}` does not name a language and format")]
    InvalidPath { path: String },

    /// Raised when a language tag cannot be parsed.
    #[error("invalid language tag `{tag}`: {reason}")]
    InvalidTag { tag: String, reason: String },

    /// Raised when a decoded message record is not usable.
    #[error("invalid message `{id}`: {reason}")]
    InvalidMessage { id: String, reason: String },

    /// Raised when the requested ID disagrees with the default message's ID.
    #[error("message id `{id}` does not match default message id `{default_id}`")]
    MessageIdMismatch { id: String, default_id: String },

    /// Raised when a plural count cannot be interpreted as a number.
    #[error("invalid plural count `{count}`: {reason}")]
    InvalidPluralCount { count: String, reason: String },
}
