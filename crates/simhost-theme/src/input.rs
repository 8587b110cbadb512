//! Theme input handling.
//!
//! A theme can arrive as a path to a JSON file, as inline JSON text, or as an
//! already-parsed JSON value. The kind is decided once, at the boundary, and
//! bad input of any kind degrades to "no theme" with a warning.

use std::path::{Path, PathBuf};

use serde_json::Value;
use simhost_common::{PropertyMap, StateMap, ThemeProperties};
use tracing::warn;

use crate::hash::content_hash;

const INVALID_THEME: &str = "Specified theme was not a valid filename or JSON data";

/// Where a theme override comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ThemeInput {
    /// Defaults only.
    #[default]
    None,
    /// A JSON file on disk.
    FilePath(PathBuf),
    /// Inline JSON text.
    RawJson(String),
    /// An already-parsed value.
    Structured(Value),
}

impl ThemeInput {
    /// Classify a user-supplied string: an existing file is read, anything
    /// else is treated as JSON text.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::None,
            Some(arg) if Path::new(arg).is_file() => Self::FilePath(PathBuf::from(arg)),
            Some(arg) => Self::RawJson(arg.to_string()),
        }
    }

    /// Classify a JSON value: strings are paths or JSON text, `null` is no
    /// theme, everything else is taken as the override itself.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::None,
            Value::String(text) => Self::from_arg(Some(&text)),
            other => Self::Structured(other),
        }
    }

    /// Read and parse the input. Never fails; unusable input yields `None`.
    pub async fn load(self) -> Option<ThemeOverride> {
        match self {
            Self::None => None,
            Self::FilePath(path) => match tokio::fs::read_to_string(&path).await {
                Ok(text) => parse_json(&text),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "{INVALID_THEME}");
                    None
                }
            },
            Self::RawJson(text) => parse_json(&text),
            Self::Structured(value) => ThemeOverride::from_value(value),
        }
    }
}

fn parse_json(text: &str) -> Option<ThemeOverride> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => ThemeOverride::from_value(value),
        Err(e) => {
            warn!(error = %e, "{INVALID_THEME}");
            None
        }
    }
}

/// A parsed, possibly sparse theme override.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOverride {
    value: Value,
    properties: ThemeProperties,
}

impl ThemeOverride {
    /// Wrap a JSON object. Other JSON kinds are rejected with a warning.
    ///
    /// Branches that are not objects are ignored; numeric and boolean
    /// property values are kept in their JSON text form.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            warn!(kind = json_kind(&value), "{INVALID_THEME}");
            return None;
        }

        let properties = extract_properties(&value);
        Some(Self { value, properties })
    }

    pub fn properties(&self) -> &ThemeProperties {
        &self.properties
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Content hash of the override as given.
    pub fn hash(&self) -> String {
        content_hash(&self.value)
    }
}

fn extract_properties(value: &Value) -> ThemeProperties {
    let Some(elements) = value.as_object() else {
        return ThemeProperties::new();
    };

    elements
        .iter()
        .filter_map(|(element, states)| {
            let states: StateMap = states
                .as_object()?
                .iter()
                .filter_map(|(state, props)| {
                    let props: PropertyMap = props
                        .as_object()?
                        .iter()
                        .filter_map(|(name, value)| leaf_text(value).map(|v| (name.clone(), v)))
                        .collect();
                    Some((state.clone(), props))
                })
                .collect();
            Some((element.clone(), states))
        })
        .collect()
}

fn leaf_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
