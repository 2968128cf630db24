pub mod level;
pub mod record;
pub mod encoder;
pub mod sink;
pub mod console;
pub mod file;
pub mod fanout;
pub mod retention;

pub mod logger;
pub mod factory;
pub mod layer;
pub mod config;
pub mod init;

pub use factory::{create_file_logger, create_logger, create_logger_with_console};
pub use level::Severity;
pub use logger::{Logger, LoggerError};
pub use record::{Field, LogRecord};
