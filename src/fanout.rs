use crate::record::LogRecord;
use crate::sink::LogSink;
use std::io;
use std::sync::Arc;

/// Forwards every record to each child sink.
///
/// Children are driven independently: a failing sink does not prevent the
/// remaining ones from receiving the record. The first error is returned.
#[derive(Clone, Default)]
pub struct FanOut {
    sinks: Vec<Arc<dyn LogSink>>,
}

impl FanOut {
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: Arc<dyn LogSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn each<F>(&self, mut op: F) -> io::Result<()>
    where
        F: FnMut(&dyn LogSink) -> io::Result<()>,
    {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = op(sink.as_ref()) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl LogSink for FanOut {
    fn write(&self, record: &LogRecord) -> io::Result<()> {
        self.each(|sink| sink.write(record))
    }

    fn sync(&self) -> io::Result<()> {
        self.each(|sink| sink.sync())
    }
}
