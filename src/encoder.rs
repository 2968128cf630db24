use crate::level::{color_for, COLOR_RESET};
use crate::record::LogRecord;

/// Timestamp layout on the console (two-digit year).
pub const CONSOLE_TIME_FORMAT: &str = "%d-%m-%y %H:%M:%S";

/// Timestamp layout in log files (four-digit year).
pub const FILE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Renders a [`LogRecord`] into a single tab-separated line.
///
/// Columns, in order: timestamp, level, logger name, caller, message,
/// fields. Logger name and caller are skipped when absent, fields when
/// empty. Fields are written as one compact JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordEncoder {
    pub time_format: &'static str,
    pub colored: bool,
}

impl RecordEncoder {
    /// Encoder used for stdout.
    pub fn console() -> Self {
        Self {
            time_format: CONSOLE_TIME_FORMAT,
            colored: true,
        }
    }

    /// Encoder used for the log file.
    pub fn file() -> Self {
        Self {
            time_format: FILE_TIME_FORMAT,
            colored: false,
        }
    }

    /// Render `record` including the trailing newline.
    pub fn encode(&self, record: &LogRecord) -> String {
        let mut line = record.timestamp.format(self.time_format).to_string();

        line.push('\t');
        if self.colored {
            line.push_str(color_for(record.severity));
            line.push_str(record.severity.as_str());
            line.push_str(COLOR_RESET);
        } else {
            line.push_str(record.severity.as_str());
        }

        if let Some(name) = record.logger_name.as_deref().filter(|n| !n.is_empty()) {
            line.push('\t');
            line.push_str(name);
        }

        if let Some(file) = record.file.as_deref() {
            line.push('\t');
            line.push_str(&short_caller(file, record.line));
        }

        line.push('\t');
        line.push_str(&record.message);

        if !record.fields.is_empty() {
            let fields =
                serde_json::to_string(&record.fields).unwrap_or_else(|_| "{}".to_string());
            line.push('\t');
            line.push_str(&fields);
        }

        line.push('\n');
        line
    }
}

/// Trim a source path to `<parent-dir>/<file>[:<line>]`.
pub fn short_caller(file: &str, line: Option<u32>) -> String {
    let normalized = file.replace('\\', "/");
    let mut parts = normalized.rsplitn(3, '/');
    let name = parts.next().unwrap_or_default();
    let short = match parts.next() {
        Some(parent) => format!("{}/{}", parent, name),
        None => name.to_string(),
    };
    match line {
        Some(line) => format!("{}:{}", short, line),
        None => short,
    }
}
