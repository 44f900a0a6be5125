//! Logger facade
//!
//! Binds level filtering, record construction, and batch accumulation to a
//! shared output sink, and exposes the level-specific entry points.

use super::batch::{Batch, BatchLimit, FlushFn};
use super::error::Result;
use super::log_level::LogLevel;
use super::record::{build_record, InjectFn};
use super::value::LogValue;
use crate::sinks::{shared, SharedSink, StdoutSink};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Multiplier from fractional megabytes to bytes for size limits.
pub const BYTES_PER_MB: usize = 1_048_576;

const DEFAULT_SIZE_LIMIT_MB: f64 = 0.25;

/// Batching structured logger.
///
/// Records below the configured minimum level are complete no-ops: no
/// injection, no serialization, no accumulator interaction. Everything else
/// is serialized and batched; the batch reaches the sink on a threshold,
/// on the debounce window, on an explicit [`flush`](Logger::flush), or on
/// drop.
pub struct Logger {
    level: LogLevel,
    inject: Option<InjectFn>,
    pretty: bool,
    batch: Batch,
    sink: SharedSink,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Emit a record at the given level.
    ///
    /// Serialization failures propagate to the caller; the logger does not
    /// sandbox the codec.
    pub fn log<I>(&self, level: LogLevel, items: I) -> Result<()>
    where
        I: IntoIterator<Item = LogValue>,
    {
        // `Disabled` is a filter threshold, not an emission level
        if level == LogLevel::Disabled || self.level > level {
            return Ok(());
        }

        let items: Vec<LogValue> = items.into_iter().collect();
        let record = build_record(level, &items, self.inject.as_ref());
        let serialized = if self.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };

        self.batch.add(serialized);
        Ok(())
    }

    #[inline]
    pub fn debug<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = LogValue>,
    {
        self.log(LogLevel::Debug, items)
    }

    #[inline]
    pub fn info<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = LogValue>,
    {
        self.log(LogLevel::Info, items)
    }

    #[inline]
    pub fn warning<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = LogValue>,
    {
        self.log(LogLevel::Warning, items)
    }

    #[inline]
    pub fn error<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = LogValue>,
    {
        self.log(LogLevel::Error, items)
    }

    /// Flush all buffered records, then ask the sink to drain its own
    /// buffering.
    pub fn flush(&self) -> Result<()> {
        self.batch.flush();
        self.sink.lock().flush()
    }

    /// Running byte cost for size limits, pending record count for count
    /// limits.
    pub fn batch_size(&self) -> usize {
        self.batch.size()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Best-effort delivery of buffered records on shutdown
        if let Err(e) = self.flush() {
            eprintln!("[BATCHLOG ERROR] Flush on shutdown failed: {}", e);
        }
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use batchlog::prelude::*;
/// use serde_json::json;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .batch_limit(BatchLimit::Count(100))
///     .window(std::time::Duration::from_millis(200))
///     .inject(|| json!({"service": "api"}))
///     .build();
/// ```
pub struct LoggerBuilder {
    limit: BatchLimit,
    level: LogLevel,
    inject: Option<InjectFn>,
    pretty: bool,
    window: Duration,
    sink: Option<SharedSink>,
}

impl LoggerBuilder {
    /// Create a builder with the default configuration: a 0.25 MB size
    /// limit, `Debug` level, compact output, no window, stdout sink.
    pub fn new() -> Self {
        Self {
            limit: BatchLimit::Size((DEFAULT_SIZE_LIMIT_MB * BYTES_PER_MB as f64) as usize),
            level: LogLevel::Debug,
            inject: None,
            pretty: false,
            window: Duration::ZERO,
            sink: None,
        }
    }

    /// Set the flush threshold.
    #[must_use = "builder methods return a new value"]
    pub fn batch_limit(mut self, limit: BatchLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Set a size threshold expressed in fractional megabytes.
    #[must_use = "builder methods return a new value"]
    pub fn batch_limit_mb(mut self, megabytes: f64) -> Self {
        self.limit = BatchLimit::Size((megabytes * BYTES_PER_MB as f64) as usize);
        self
    }

    /// Set the minimum level emitted.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set a context injection function, called once per emitted record.
    /// Its result is merged into the record when object-shaped.
    #[must_use = "builder methods return a new value"]
    pub fn inject<F>(mut self, inject: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.inject = Some(Arc::new(inject));
        self
    }

    /// Emit indented records instead of compact ones.
    ///
    /// Note: this is a performance hit.
    #[must_use = "builder methods return a new value"]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Maximum staleness of a non-empty batch before a deferred flush
    /// fires. Zero disables time-based flushing.
    #[must_use = "builder methods return a new value"]
    pub fn window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Set the output sink. Defaults to stdout.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the logger.
    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(|| shared(StdoutSink::new()));

        let flush_sink = Arc::clone(&sink);
        let flush_fn: FlushFn = Box::new(move |items| {
            // An empty batch produces no write
            if items.is_empty() {
                return;
            }
            let mut buf = items.join("\n");
            buf.push('\n');

            let mut sink = flush_sink.lock();
            if let Err(e) = sink.write(&buf) {
                eprintln!("[BATCHLOG ERROR] Sink '{}' write failed: {}", sink.name(), e);
            }
        });

        Logger {
            level: self.level,
            inject: self.inject,
            pretty: self.pretty,
            batch: Batch::new(self.limit, self.window, flush_fn),
            sink,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn capture_logger(builder: LoggerBuilder) -> (MemorySink, Logger) {
        let sink = MemorySink::new();
        let logger = builder.sink(shared(sink.clone())).build();
        (sink, logger)
    }

    #[test]
    fn test_log_with_defaults() {
        let (sink, logger) = capture_logger(Logger::builder());

        logger.info([LogValue::from("Hello, world!")]).unwrap();
        assert!(sink.contents().is_empty());

        logger.flush().unwrap();
        assert_eq!(sink.contents(), "{\"level\":\"info\",\"msg\":\"Hello, world!\"}\n");
    }

    #[test]
    fn test_count_limit_writes_without_explicit_flush() {
        let (sink, logger) =
            capture_logger(Logger::builder().batch_limit(BatchLimit::Count(2)));

        logger.info([LogValue::from("one")]).unwrap();
        assert!(sink.contents().is_empty());
        logger.info([LogValue::from("two")]).unwrap();

        let contents = sink.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("one"));
        assert!(lines[1].contains("two"));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_tiny_size_limit_flushes_immediately() {
        let (sink, logger) = capture_logger(
            Logger::builder()
                .batch_limit_mb(1.0 / BYTES_PER_MB as f64)
                .inject(|| json!({"timestamp": "now", "trace": "1234"})),
        );

        logger.debug([LogValue::from("Hello, world!")]).unwrap();

        let contents = sink.contents();
        assert!(contents.contains("\"level\":\"debug\""));
        assert!(contents.contains("\"timestamp\":\"now\""));
        assert!(contents.contains("\"trace\":\"1234\""));
        assert!(contents.contains("\"msg\":\"Hello, world!\""));
    }

    #[test]
    fn test_filtered_levels_skip_injection() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        CALLS.store(0, Ordering::SeqCst);

        let (_sink, logger) = capture_logger(Logger::builder().level(LogLevel::Error).inject(
            || {
                CALLS.fetch_add(1, Ordering::SeqCst);
                json!({"trace": "1"})
            },
        ));

        logger.debug([LogValue::from("dropped")]).unwrap();
        logger.info([LogValue::from("dropped")]).unwrap();
        logger.warning([LogValue::from("dropped")]).unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);

        logger.error([LogValue::from("kept")]).unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_suppresses_everything() {
        let (sink, logger) = capture_logger(Logger::builder().level(LogLevel::Disabled));

        logger.error([LogValue::from("nope")]).unwrap();
        logger.flush().unwrap();

        assert!(sink.contents().is_empty());
        assert_eq!(logger.batch_size(), 0);
    }

    #[test]
    fn test_pretty_and_compact_are_semantically_equal() {
        let items = || {
            [
                LogValue::from("msg part"),
                LogValue::from(json!({"key": "value", "n": 3})),
            ]
        };

        let (compact_sink, compact) = capture_logger(Logger::builder());
        compact.info(items()).unwrap();
        compact.flush().unwrap();

        let (pretty_sink, pretty) = capture_logger(Logger::builder().pretty(true));
        pretty.info(items()).unwrap();
        pretty.flush().unwrap();

        let compact_value: Value =
            serde_json::from_str(compact_sink.contents().trim_end()).unwrap();
        let pretty_value: Value =
            serde_json::from_str(pretty_sink.contents().trim_end()).unwrap();

        assert_eq!(compact_value, pretty_value);
        assert_ne!(compact_sink.contents(), pretty_sink.contents());
    }

    #[test]
    fn test_empty_flush_writes_nothing() {
        let (sink, logger) = capture_logger(Logger::builder());

        logger.flush().unwrap();
        logger.flush().unwrap();
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn test_drop_flushes_pending_records() {
        let sink = MemorySink::new();
        {
            let logger = Logger::builder().sink(shared(sink.clone())).build();
            logger.info([LogValue::from("pending")]).unwrap();
        }
        assert!(sink.contents().contains("pending"));
    }

    #[test]
    fn test_batch_size_counts_in_count_mode() {
        let (_sink, logger) =
            capture_logger(Logger::builder().batch_limit(BatchLimit::Count(100)));

        logger.info([LogValue::from("a")]).unwrap();
        logger.info([LogValue::from("b")]).unwrap();
        assert_eq!(logger.batch_size(), 2);

        logger.flush().unwrap();
        assert_eq!(logger.batch_size(), 0);
    }
}
