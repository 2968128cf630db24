use crate::console::ConsoleSink;
use crate::fanout::FanOut;
use crate::file::FileSink;
use crate::level::Severity;
use crate::logger::Logger;
use crate::retention::{log_file_path, prune_oldest};
use crate::sink::LogSink;
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// Create a logger writing to stdout and to a fresh timestamped file in
/// `directory`.
///
/// **Parameters**
/// - `directory`: where log files live. It does not need to exist; it is
///   created on the first write.
/// - `retention_count`: how many existing entries may stay in `directory`
///   before the oldest one is deleted.
/// - `min_level`: records below this severity reach neither sink.
///
/// **Behavior**
///
/// If `directory` already holds more than `retention_count` entries, the
/// one whose name sorts first is deleted (at most one per call). This never
/// fails; an unwritable directory only shows up as write errors on stderr
/// while the console keeps working.
pub fn create_logger(
    directory: impl AsRef<Path>,
    retention_count: usize,
    min_level: Severity,
) -> Logger {
    create_logger_with_console(directory, retention_count, min_level, io::stdout())
}

/// Same as [`create_logger`] but with the console sink writing to `console`
/// instead of stdout.
pub fn create_logger_with_console<W>(
    directory: impl AsRef<Path>,
    retention_count: usize,
    min_level: Severity,
    console: W,
) -> Logger
where
    W: Write + Send + 'static,
{
    build(
        directory.as_ref(),
        retention_count,
        min_level,
        Some(Arc::new(ConsoleSink::new(console))),
        Local::now(),
    )
}

/// Logger with only the file sink.
pub fn create_file_logger(
    directory: impl AsRef<Path>,
    retention_count: usize,
    min_level: Severity,
) -> Logger {
    build(directory.as_ref(), retention_count, min_level, None, Local::now())
}

pub(crate) fn build(
    directory: &Path,
    retention_count: usize,
    min_level: Severity,
    console: Option<Arc<dyn LogSink>>,
    now: DateTime<Local>,
) -> Logger {
    let file = Arc::new(FileSink::new(log_file_path(directory, &now)));

    let mut sinks = FanOut::default();
    if let Some(console) = console {
        sinks.push(console);
    }
    sinks.push(file.clone());

    prune_oldest(directory, retention_count);

    Logger::new(min_level, Arc::new(sinks), file)
}
