use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tracing_retention_log::level::{color_for, COLOR_CYAN, COLOR_RED, COLOR_RESET};
use tracing_retention_log::{create_logger_with_console, Field, Severity};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn strip_colors(line: &str) -> String {
    let mut out = line.to_string();
    for code in Severity::ALL.iter().map(|s| color_for(*s)).chain([COLOR_RESET]) {
        out = out.replace(code, "");
    }
    out
}

#[test]
fn both_sinks_see_the_same_records() {
    let dir = TempDir::new().unwrap();
    let console = SharedBuf::default();
    let logger = create_logger_with_console(dir.path(), 5, Severity::Debug, console.clone());

    logger.debug("cache warm", [Field::new("entries", 128)]);
    logger
        .named("api")
        .error("upstream timeout", [Field::new("upstream", "auth"), Field::new("ms", 3000)]);
    logger.sync().unwrap();

    let console_out = console.contents();
    let file_out = fs::read_to_string(logger.path()).unwrap();
    let console_lines: Vec<&str> = console_out.lines().collect();
    let file_lines: Vec<&str> = file_out.lines().collect();
    assert_eq!(console_lines.len(), 2);
    assert_eq!(file_lines.len(), 2);

    assert!(console_lines[0].contains(&format!("{}DEBUG{}", COLOR_CYAN, COLOR_RESET)));
    assert!(console_lines[1].contains(&format!("{}ERROR{}", COLOR_RED, COLOR_RESET)));
    assert!(!file_out.contains('\x1b'));

    for (c, f) in console_lines.iter().zip(&file_lines) {
        let (c_time, c_rest) = c.split_once('\t').unwrap();
        let (f_time, f_rest) = f.split_once('\t').unwrap();

        // "DD-MM-YY HH:MM:SS" vs "DD-MM-YYYY HH:MM:SS"
        assert_eq!(c_time.len() + 2, f_time.len());
        assert_eq!(&c_time[..6], &f_time[..6]);
        assert_eq!(&c_time[6..], &f_time[8..]);
        assert_eq!(strip_colors(c_rest), f_rest);
    }

    assert!(file_lines[1].contains("\tapi\t"));
    assert!(file_lines[1].ends_with("\tupstream timeout\t{\"ms\":3000,\"upstream\":\"auth\"}"));
}

#[test]
fn records_below_min_level_reach_neither_sink() {
    let dir = TempDir::new().unwrap();
    let console = SharedBuf::default();
    let logger = create_logger_with_console(dir.path(), 5, Severity::Warn, console.clone());

    logger.debug("hidden", []);
    logger.info("hidden", []);
    logger.sync().unwrap();

    assert!(console.contents().is_empty());
    assert!(!logger.path().exists());

    logger.warn("shown", []);
    logger.sync().unwrap();
    assert_eq!(console.contents().lines().count(), 1);
    assert_eq!(fs::read_to_string(logger.path()).unwrap().lines().count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_do_not_interleave() {
    let dir = TempDir::new().unwrap();
    let console = SharedBuf::default();
    let logger = create_logger_with_console(dir.path(), 5, Severity::Info, console.clone());

    let tasks = 8;
    let per_task = 50;
    let mut handles = Vec::new();
    for task in 0..tasks {
        let logger = logger.clone();
        handles.push(tokio::spawn(async move {
            for seq in 0..per_task {
                logger.info(
                    "concurrent write",
                    [Field::new("task", task), Field::new("seq", seq)],
                );
                tokio::task::yield_now().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    logger.sync().unwrap();

    for out in [console.contents(), fs::read_to_string(logger.path()).unwrap()] {
        let mut seen = BTreeSet::new();
        for line in out.lines() {
            let fields = line.rsplit('\t').next().unwrap();
            let value: serde_json::Value = serde_json::from_str(fields).unwrap();
            seen.insert((value["task"].as_i64().unwrap(), value["seq"].as_i64().unwrap()));
        }
        assert_eq!(out.lines().count(), (tasks * per_task) as usize);
        assert_eq!(seen.len(), (tasks * per_task) as usize);
    }
}
