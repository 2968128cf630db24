use crate::record::LogRecord;
use std::io;

/// Synchronous destination for [`LogRecord`]s accepted by a
/// [`Logger`](crate::logger::Logger).
///
/// Implementations render and persist (or display) records. They are
/// shared between threads, so each call to `write` must emit the whole
/// rendered record in one piece.
pub trait LogSink: Send + Sync {
    /// Render and write a single record.
    ///
    /// **Returns**
    /// - `Ok(())` if the rendered bytes were handed to the underlying writer.
    /// - `Err(..)` if the writer could not be opened or rejected the bytes.
    fn write(&self, record: &LogRecord) -> io::Result<()>;

    /// Block until everything written so far has reached its destination.
    ///
    /// Default implementation is a no-op.
    fn sync(&self) -> io::Result<()> {
        Ok(())
    }
}
