use std::time::Instant;

use tracing_retention_log::config::{env_or, LoggerConfig, RETENTION_LOG_DIR_ENV};
use tracing_retention_log::{Field, Severity};

fn main() {
    let mut config = LoggerConfig::from_env().expect("valid RETENTION_LOG_* variables");
    config.directory = env_or(RETENTION_LOG_DIR_ENV, "./load-logs").into();
    config.retention_count = 2;
    config.min_level = Severity::Warn;

    let logger = config.build().named("load");

    let n: u64 = 100_000;
    let start = Instant::now();

    for i in 0..n {
        // Half of these sit below the minimum level and are dropped.
        if i % 2 == 0 {
            logger.info("custom load test info", [Field::new("iteration", i)]);
        } else {
            logger.warn("custom load test warning", [Field::new("iteration", i)]);
        }
    }

    logger.sync().expect("sync sinks");

    let elapsed = start.elapsed();
    println!("custom config: offered {} events in {:?} (~{:.0} ev/s)",
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
}
