use std::fs;
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::Duration;

use tempfile::TempDir;
use tracing_retention_log::{create_file_logger, Field, Severity};

fn entries(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    paths.sort();
    paths
}

// Five runs one second apart against retention 3: every call prunes at most
// one entry, so only the first run's file is gone afterwards.
#[test]
fn five_runs_keep_retention_plus_one() {
    let dir = TempDir::new().unwrap();
    let retention = 3;
    let mut created = Vec::new();

    for i in 0..5 {
        let logger = create_file_logger(dir.path(), retention, Severity::Debug);
        logger.info("This is a test log message", [Field::new("iteration", i)]);
        logger.sync().unwrap();
        created.push(logger.path().to_path_buf());

        assert!(entries(dir.path()).len() <= retention + 1);
        sleep(Duration::from_millis(1100));
    }

    let remaining = entries(dir.path());
    assert_eq!(remaining.len(), retention + 1);
    assert!(!created[0].exists());
    assert_eq!(remaining, created[1..].to_vec());

    for path in &remaining {
        let meta = fs::metadata(path).unwrap();
        assert!(meta.is_file());
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("logs_") && name.ends_with(".log"), "{}", name);
    }
}

#[test]
fn names_from_different_seconds_sort_in_call_order() {
    let dir = TempDir::new().unwrap();

    let first = create_file_logger(dir.path(), 10, Severity::Info);
    sleep(Duration::from_millis(1100));
    let second = create_file_logger(dir.path(), 10, Severity::Info);

    assert_ne!(first.path(), second.path());
    assert!(first.path() < second.path());
}

#[test]
fn pruning_ignores_naming_pattern() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("0-notes.txt"), b"mine").unwrap();
    fs::write(dir.path().join("logs_01-01-24_00-00-00.log"), b"old").unwrap();

    let _logger = create_file_logger(dir.path(), 1, Severity::Info);

    let remaining = entries(dir.path());
    assert_eq!(remaining, vec![dir.path().join("logs_01-01-24_00-00-00.log")]);
}
