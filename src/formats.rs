//! Decoders for the message file formats Parlance reads out of the box.
//!
//! Both formats decode into a [`serde_json::Value`] tree and share the
//! layout rules of [`messages_from_value`].

use std::str;
use std::sync::Arc;

use parlance_common::i18n::messages_from_value;
use parlance_common::{Bundle, Message, UnmarshalError, UnmarshalFn};
use serde_json::Value;

/// Format name for JSON message files.
pub const JSON: &str = "json";

/// Format name for TOML message files.
pub const TOML: &str = "toml";

/// Decoder for JSON message files.
#[must_use]
pub fn json_unmarshal() -> UnmarshalFn {
    Arc::new(|buf: &[u8]| -> Result<Vec<Message>, UnmarshalError> {
        let value: Value = serde_json::from_slice(buf)?;
        Ok(messages_from_value(&value)?)
    })
}

/// Decoder for TOML message files.
#[must_use]
pub fn toml_unmarshal() -> UnmarshalFn {
    Arc::new(|buf: &[u8]| -> Result<Vec<Message>, UnmarshalError> {
        let value: Value = toml::from_str(str::from_utf8(buf)?)?;
        Ok(messages_from_value(&value)?)
    })
}

/// Register the JSON and TOML decoders on `bundle`.
pub fn register_default_formats(bundle: &mut Bundle) {
    bundle.register_unmarshal_fn(JSON, json_unmarshal());
    bundle.register_unmarshal_fn(TOML, toml_unmarshal());
}
