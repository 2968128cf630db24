use crate::file::FileSink;
use crate::level::Severity;
use crate::record::{Field, LogRecord};
use crate::sink::LogSink;
use std::io;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

/// Error type returned by [`Logger`] and the global-subscriber helpers.
#[derive(thiserror::Error, Debug)]
pub enum LoggerError {
    #[error("failed to sync log sinks: {0}")]
    Sync(#[from] io::Error),

    #[error("global tracing subscriber already installed: {0}")]
    GlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

struct Inner {
    min_level: Severity,
    sink: Arc<dyn LogSink>,
    file: Arc<FileSink>,
}

/// Handle returned by [`create_logger`](crate::factory::create_logger).
///
/// Cloning is cheap and every clone feeds the same sinks, so a logger can
/// be handed to as many threads as needed.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
    name: Option<Arc<str>>,
}

impl Logger {
    /// Assemble a logger from an already combined sink and the file sink
    /// that is part of it.
    pub fn new(min_level: Severity, sink: Arc<dyn LogSink>, file: Arc<FileSink>) -> Self {
        Self {
            inner: Arc::new(Inner {
                min_level,
                sink,
                file,
            }),
            name: None,
        }
    }

    /// Child logger that fills the logger-name column. Nested names are
    /// joined with `.`.
    pub fn named(&self, name: &str) -> Logger {
        let name: Arc<str> = match &self.name {
            Some(parent) if !name.is_empty() => format!("{}.{}", parent, name).into(),
            Some(parent) => parent.clone(),
            None => name.into(),
        };
        Logger {
            inner: Arc::clone(&self.inner),
            name: Some(name),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Path of the file this logger writes to.
    pub fn path(&self) -> &Path {
        self.inner.file.path()
    }

    pub fn min_level(&self) -> Severity {
        self.inner.min_level
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.inner.min_level
    }

    /// Write a fully built record to every sink if it passes the level
    /// filter. The logger name is filled in when the record has none.
    ///
    /// Sink failures are reported on stderr and never returned.
    pub fn dispatch(&self, mut record: LogRecord) {
        if !self.enabled(record.severity) {
            return;
        }
        if record.logger_name.is_none() {
            record.logger_name = self.name.as_deref().map(str::to_string);
        }
        if let Err(e) = self.inner.sink.write(&record) {
            eprintln!("log sink write failed: {}", e);
        }
    }

    /// Emit `message` at `severity`, recording the caller's location.
    #[track_caller]
    pub fn log<I>(&self, severity: Severity, message: &str, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        if !self.enabled(severity) {
            return;
        }
        let caller = Location::caller();
        let mut record = LogRecord::new(severity, message).with_fields(fields);
        record.file = Some(caller.file().to_string());
        record.line = Some(caller.line());
        self.dispatch(record);
    }

    #[track_caller]
    pub fn debug<I: IntoIterator<Item = Field>>(&self, message: &str, fields: I) {
        self.log(Severity::Debug, message, fields)
    }

    #[track_caller]
    pub fn info<I: IntoIterator<Item = Field>>(&self, message: &str, fields: I) {
        self.log(Severity::Info, message, fields)
    }

    #[track_caller]
    pub fn warn<I: IntoIterator<Item = Field>>(&self, message: &str, fields: I) {
        self.log(Severity::Warn, message, fields)
    }

    #[track_caller]
    pub fn error<I: IntoIterator<Item = Field>>(&self, message: &str, fields: I) {
        self.log(Severity::Error, message, fields)
    }

    #[track_caller]
    pub fn critical<I: IntoIterator<Item = Field>>(&self, message: &str, fields: I) {
        self.log(Severity::Critical, message, fields)
    }

    /// Log at [`Severity::Fatal`] and sync both sinks. The process keeps
    /// running; terminating is left to the caller.
    #[track_caller]
    pub fn fatal<I: IntoIterator<Item = Field>>(&self, message: &str, fields: I) {
        self.log(Severity::Fatal, message, fields);
        if let Err(e) = self.sync() {
            eprintln!("{}", e);
        }
    }

    /// Block until buffered bytes of both sinks reach their destination.
    pub fn sync(&self) -> Result<(), LoggerError> {
        self.inner.sink.sync()?;
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path())
            .field("min_level", &self.inner.min_level)
            .field("name", &self.name)
            .finish()
    }
}
