//! Batch accumulation and flush triggering
//!
//! The accumulator holds already-serialized records and decides when to hand
//! them to the flush callback: immediately when a count or size threshold is
//! reached, or after a debounce window when one is configured. All three
//! triggers funnel through a single flush implementation.

use crossbeam_channel::{unbounded, RecvTimeoutError, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Threshold policy selecting the cost metric that triggers a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchLimit {
    /// Flush when the number of pending records reaches the limit.
    Count(usize),
    /// Flush when the accumulated cost in bytes reaches the limit.
    Size(usize),
}

/// Callback receiving the drained records, in insertion order.
pub type FlushFn = Box<dyn FnMut(Vec<String>) + Send>;

struct BatchState {
    items: Vec<String>,
    current_size: usize,
    /// Bumped on every add and every flush. A deferred flush carries the
    /// generation it was armed with and fires only if it still matches, so
    /// a timer outlived by a manual flush or a newer add is a no-op.
    generation: u64,
    flush_fn: FlushFn,
}

impl BatchState {
    fn flush(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        let items = std::mem::take(&mut self.items);
        self.current_size = 0;
        (self.flush_fn)(items);
    }
}

enum TimerMsg {
    Arm(u64),
    Shutdown,
}

/// Accumulates serialized records until a flush trigger fires.
pub struct Batch {
    limit: BatchLimit,
    state: Arc<Mutex<BatchState>>,
    timer_tx: Option<Sender<TimerMsg>>,
    timer_handle: Option<thread::JoinHandle<()>>,
}

impl Batch {
    /// Create an accumulator. A zero `window` disables time-based flushing;
    /// a positive one spawns a timer thread that fires the deferred flush.
    pub fn new(limit: BatchLimit, window: Duration, flush_fn: FlushFn) -> Self {
        let state = Arc::new(Mutex::new(BatchState {
            items: Vec::new(),
            current_size: 0,
            generation: 0,
            flush_fn,
        }));

        let (timer_tx, timer_handle) = if window > Duration::ZERO {
            let (tx, rx) = unbounded();
            let timer_state = Arc::clone(&state);

            let handle = thread::spawn(move || {
                let mut armed: Option<(u64, Instant)> = None;
                loop {
                    let msg = match armed {
                        Some((generation, deadline)) => match rx.recv_deadline(deadline) {
                            Ok(msg) => msg,
                            Err(RecvTimeoutError::Timeout) => {
                                armed = None;
                                let mut state = timer_state.lock();
                                if state.generation == generation {
                                    state.flush();
                                }
                                continue;
                            }
                            Err(RecvTimeoutError::Disconnected) => break,
                        },
                        None => match rx.recv() {
                            Ok(msg) => msg,
                            Err(_) => break,
                        },
                    };

                    match msg {
                        TimerMsg::Arm(generation) => {
                            armed = Some((generation, Instant::now() + window));
                        }
                        TimerMsg::Shutdown => break,
                    }
                }
            });

            (Some(tx), Some(handle))
        } else {
            (None, None)
        };

        Self {
            limit,
            state,
            timer_tx,
            timer_handle,
        }
    }

    /// Cost of one serialized record: its byte length plus one for the
    /// newline separator added when the batch is joined.
    fn compute_cost(item: &str) -> usize {
        item.len() + 1
    }

    /// Append a serialized record. Cancels any outstanding deferred flush,
    /// then flushes immediately if the limit is reached, or re-arms the
    /// debounce timer otherwise.
    pub fn add(&self, item: String) {
        let mut state = self.state.lock();
        state.current_size += Self::compute_cost(&item);
        state.items.push(item);
        // Any deferred flush armed before this add is now stale
        state.generation = state.generation.wrapping_add(1);

        let over_limit = match self.limit {
            BatchLimit::Count(n) => state.items.len() >= n,
            BatchLimit::Size(bytes) => state.current_size >= bytes,
        };

        if over_limit {
            state.flush();
        } else if let Some(ref tx) = self.timer_tx {
            let _ = tx.send(TimerMsg::Arm(state.generation));
        }
    }

    /// Hand the pending records to the flush callback and reset. Runs even
    /// when the batch is empty; the callback decides whether an empty batch
    /// produces a write.
    pub fn flush(&self) {
        self.state.lock().flush();
    }

    /// Running cost for size limits, pending record count for count limits.
    /// Reflects only unflushed state.
    pub fn size(&self) -> usize {
        let state = self.state.lock();
        match self.limit {
            BatchLimit::Count(_) => state.items.len(),
            BatchLimit::Size(_) => state.current_size,
        }
    }
}

impl Drop for Batch {
    fn drop(&mut self) {
        if let Some(tx) = self.timer_tx.take() {
            let _ = tx.send(TimerMsg::Shutdown);
        }
        if let Some(handle) = self.timer_handle.take() {
            let _ = handle.join();
        }
    }
}
