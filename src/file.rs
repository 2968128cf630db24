use crate::encoder::RecordEncoder;
use crate::record::LogRecord;
use crate::sink::LogSink;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Append-only file sink bound to a single path.
///
/// The file is not touched until the first record arrives: the parent
/// directory is created if needed and the file is opened in append mode.
/// If opening fails the error is returned from that `write` and the open
/// is attempted again on the next one.
pub struct FileSink {
    path: PathBuf,
    encoder: RecordEncoder,
    file: Mutex<Option<File>>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoder: RecordEncoder::file(),
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the underlying file has been opened yet.
    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn open(&self) -> io::Result<File> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}

impl LogSink for FileSink {
    fn write(&self, record: &LogRecord) -> io::Result<()> {
        let line = self.encoder.encode(record);
        let mut guard = self.lock();
        if guard.is_none() {
            *guard = Some(self.open()?);
        }
        match guard.as_mut() {
            Some(file) => file.write_all(line.as_bytes()),
            None => Ok(()),
        }
    }

    fn sync(&self) -> io::Result<()> {
        match self.lock().as_mut() {
            Some(file) => {
                file.flush()?;
                file.sync_all()
            }
            None => Ok(()),
        }
    }
}
