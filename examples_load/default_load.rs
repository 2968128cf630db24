use std::time::Instant;
use tracing::{error, info};

use tracing_retention_log::config::LoggerConfig;
use tracing_retention_log::init::init_tracing;

fn main() {
    let config = LoggerConfig {
        enable_stdout: false,
        ..LoggerConfig::default()
    };
    let logger = init_tracing(&config).expect("install global subscriber");

    let n: u64 = 100_000;
    let start = Instant::now();

    for i in 0..n {
        error!(iteration = i, "default load test error");
    }
    info!("load finished");

    logger.sync().expect("sync log file");

    let elapsed = start.elapsed();
    println!("default config: wrote {} events to {} in {:?} (~{:.0} ev/s)",
        n,
        logger.path().display(),
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
}
