//! Logging macros with `format!`-style messages.
//!
//! Attributes follow the format arguments after a semicolon. Besides the
//! file and line, the macros capture the name of the enclosing function,
//! which [`CallerFuncHandler`](crate::handlers::CallerFuncHandler) reports.
//!
//! # Examples
//!
//! ```
//! use rust_log_pipeline::prelude::*;
//! use rust_log_pipeline::{info, warn};
//!
//! let logger = Logger::new(Vec::new());
//!
//! // Message only
//! info!(logger, "Server started").unwrap();
//!
//! // Format arguments, then attributes
//! let port = 8080;
//! info!(logger, "Listening on port {}", port; "tls", false).unwrap();
//!
//! // Implicit attributes need no key
//! let err = std::io::Error::other("connection reset");
//! warn!(logger, "Upstream failed"; "retry", 3, err).unwrap();
//! ```

/// Build an attribute vector, converting each element into a
/// [`Value`](crate::Value).
///
/// ```
/// use rust_log_pipeline::{attrs, Value};
///
/// let attrs = attrs!["user", "ann", "age", 31, Value::dump(vec![1, 2])];
/// assert_eq!(attrs.len(), 5);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

/// Fully qualified name of the enclosing function
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Log at the given level.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new(Vec::new());
/// use rust_log_pipeline::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500; "path", "/upload").unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(; $($attr:expr),* $(,)?)?) => {
        $logger.log_at(
            $crate::CallSite::new(::std::file!(), ::std::line!())
                .with_function($crate::function_name!()),
            $level,
            ::std::format!($fmt $(, $arg)*),
            $crate::attrs![$($($attr),*)?],
        )
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical message.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new(Vec::new());
/// use rust_log_pipeline::crit;
/// crit!(logger, "Unable to recover: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! crit {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Crit, $($arg)+)
    };
}
