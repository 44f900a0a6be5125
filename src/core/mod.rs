//! Core batching engine and record construction

pub mod batch;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod record;
pub mod value;

pub use batch::{Batch, BatchLimit, FlushFn};
pub use error::{BatchlogError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, BYTES_PER_MB};
pub use record::{build_record, InjectFn};
pub use value::LogValue;
