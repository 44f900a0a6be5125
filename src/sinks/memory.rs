//! In-memory sink for tests and output inspection

use super::Sink;
use crate::core::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures written batches in a shared string buffer.
///
/// Cloning yields another handle to the same buffer, so a test can keep one
/// handle while the logger owns the shared sink.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buf.lock().clone()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, buf: &str) -> Result<()> {
        self.buf.lock().push_str(buf);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
