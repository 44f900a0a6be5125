//! Logging macros for ergonomic variadic calls.
//!
//! Each argument is converted through [`LogValue::from`](crate::LogValue),
//! so strings, numbers, booleans, and `serde_json::Value` objects mix
//! freely the way the level methods accept them.
//!
//! # Examples
//!
//! ```
//! use batchlog::prelude::*;
//! use batchlog::batch_info;
//! use serde_json::json;
//!
//! let logger = Logger::builder().build();
//!
//! batch_info!(logger, "Server started");
//! batch_info!(logger, "Listening", json!({"port": 8080}));
//! # logger.flush().unwrap();
//! ```

/// Emit a record at an explicit level.
///
/// # Examples
///
/// ```
/// # use batchlog::prelude::*;
/// # let logger = Logger::builder().build();
/// use batchlog::batch_log;
/// batch_log!(logger, LogLevel::Info, "Simple message");
/// batch_log!(logger, LogLevel::Error, "Error code:", 500);
/// # logger.flush().unwrap();
/// ```
#[macro_export]
macro_rules! batch_log {
    ($logger:expr, $level:expr $(, $item:expr)* $(,)?) => {{
        let items: ::std::vec::Vec<$crate::LogValue> =
            ::std::vec![$($crate::LogValue::from($item)),*];
        $logger.log($level, items)
    }};
}

/// Emit a debug-level record.
#[macro_export]
macro_rules! batch_debug {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::batch_log!($logger, $crate::LogLevel::Debug $(, $item)*)
    };
}

/// Emit an info-level record.
#[macro_export]
macro_rules! batch_info {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::batch_log!($logger, $crate::LogLevel::Info $(, $item)*)
    };
}

/// Emit a warning-level record.
#[macro_export]
macro_rules! batch_warning {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::batch_log!($logger, $crate::LogLevel::Warning $(, $item)*)
    };
}

/// Emit an error-level record.
#[macro_export]
macro_rules! batch_error {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $crate::batch_log!($logger, $crate::LogLevel::Error $(, $item)*)
    };
}
