//! # Batchlog
//!
//! A batching structured log emitter. Records are built as flat JSON
//! objects, serialized once, and accumulated in memory; the batch is handed
//! to the output sink when a size, count, or time-window threshold is
//! reached, trading per-call writes for fewer, larger ones.
//!
//! ## Features
//!
//! - **Three flush triggers**: byte-size threshold, record-count threshold,
//!   and a debounce window bounding batch staleness
//! - **Context injection**: a per-logger function merges fields (timestamps,
//!   trace IDs) into every emitted record, skipped for filtered levels
//! - **Pluggable sinks**: stdout, file, in-memory, or any [`Sink`] impl
//! - **Best-effort shutdown delivery**: buffered records flush on drop
//!
//! ## Example
//!
//! ```
//! use batchlog::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .batch_limit(BatchLimit::Count(100))
//!     .sink(shared(sink.clone()))
//!     .build();
//!
//! logger.info([LogValue::from("server started")]).unwrap();
//! logger.flush().unwrap();
//! assert!(sink.contents().contains("server started"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        build_record, Batch, BatchLimit, BatchlogError, FlushFn, InjectFn, LogLevel, LogValue,
        Logger, LoggerBuilder, Result, BYTES_PER_MB,
    };
    pub use crate::sinks::{shared, FileSink, MemorySink, SharedSink, Sink, StdoutSink};
}

pub use crate::core::{
    build_record, Batch, BatchLimit, BatchlogError, FlushFn, InjectFn, LogLevel, LogValue, Logger,
    LoggerBuilder, Result, BYTES_PER_MB,
};
pub use crate::sinks::{shared, FileSink, MemorySink, SharedSink, Sink, StdoutSink};
