use crate::encoder::RecordEncoder;
use crate::record::LogRecord;
use crate::sink::LogSink;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

/// Human-readable sink with colorized level tags.
///
/// Writes go through a mutex so concurrent callers never interleave
/// partial lines.
pub struct ConsoleSink<W> {
    encoder: RecordEncoder,
    writer: Mutex<W>,
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_encoder(writer, RecordEncoder::console())
    }

    pub fn with_encoder(writer: W, encoder: RecordEncoder) -> Self {
        Self {
            encoder,
            writer: Mutex::new(writer),
        }
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> LogSink for ConsoleSink<W> {
    fn write(&self, record: &LogRecord) -> io::Result<()> {
        let line = self.encoder.encode(record);
        self.lock().write_all(line.as_bytes())
    }

    fn sync(&self) -> io::Result<()> {
        self.lock().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{Severity, COLOR_GREEN, COLOR_RESET};

    #[test]
    fn writes_colored_line() {
        let sink = ConsoleSink::new(Vec::new());
        sink.write(&LogRecord::new(Severity::Info, "up")).unwrap();
        sink.sync().unwrap();

        let out = String::from_utf8(sink.lock().clone()).unwrap();
        assert!(out.contains(&format!("{}INFO{}", COLOR_GREEN, COLOR_RESET)));
        assert!(out.ends_with("\tup\n"));
    }
}
