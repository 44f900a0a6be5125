//! Output sinks for flushed batches

pub mod file;
pub mod memory;
pub mod stdout;

pub use file::FileSink;
pub use memory::MemorySink;
pub use stdout::StdoutSink;

use crate::core::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Byte-stream destination for joined batches.
///
/// A sink accepts the joined, newline-terminated batch text and can be asked
/// to drain its own internal buffering. Write and flush failures are the
/// sink's own failure domain; the logger does not retry.
pub trait Sink: Send {
    fn write(&mut self, buf: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// A sink shared by reference between a logger facade and its flush
/// callback. The sink's lifecycle is managed by the owner, not the logger.
pub type SharedSink = Arc<Mutex<dyn Sink>>;

/// Wrap a sink for sharing.
pub fn shared<S: Sink + 'static>(sink: S) -> SharedSink {
    Arc::new(Mutex::new(sink))
}
