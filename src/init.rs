use crate::config::LoggerConfig;
use crate::layer::RecordLayer;
use crate::logger::{Logger, LoggerError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Install `logger` as the sink of the global `tracing` subscriber.
///
/// **Parameters**
/// - `logger`: handle returned by
///   [`create_logger`](crate::factory::create_logger) or
///   [`LoggerConfig::build`].
///
/// **Returns**
/// - The same logger, so the caller can keep it around for
///   [`Logger::sync`] at shutdown.
/// - `Err(LoggerError::GlobalSubscriber)` if a global subscriber was
///   already set.
pub fn init_tracing_with_logger(logger: Logger) -> Result<Logger, LoggerError> {
    let subscriber = Registry::default().with(RecordLayer::new(logger.clone()));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(logger)
}

/// Build a logger from `config` (pruning its directory) and install it
/// globally. This is the recommended entrypoint for binaries.
pub fn init_tracing(config: &LoggerConfig) -> Result<Logger, LoggerError> {
    init_tracing_with_logger(config.build())
}
