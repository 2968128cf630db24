use crate::level::Severity;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;

/// One structured event, rendered identically (modulo color and year width)
/// by every sink.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub logger_name: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub message: String,
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogRecord {
    /// Record stamped with the current local time and no caller or fields.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            logger_name: None,
            file: None,
            line: None,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.fields.extend(fields.into_iter().map(|f| (f.key, f.value)));
        self
    }
}

/// A key/value pair attached to a record by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: serde_json::Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Field whose value is serialized with `serde`; unserializable values
    /// become `null`.
    pub fn serialize<T: Serialize>(key: impl Into<String>, value: &T) -> Self {
        Self {
            key: key.into(),
            value: serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
        }
    }
}
