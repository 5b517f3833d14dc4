//! Crate-internal logging macros.
//!
//! They forward to the `log` facade when the `logging` feature is on. With
//! the feature off the arguments are still type-checked but nothing is
//! formatted or emitted.

macro_rules! log_at {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::$level!($($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    };
}

macro_rules! debug_log {
    ($($arg:tt)+) => {
        log_at!(debug, $($arg)+)
    };
}

macro_rules! trace_log {
    ($($arg:tt)+) => {
        log_at!(trace, $($arg)+)
    };
}

macro_rules! info_log {
    ($($arg:tt)+) => {
        log_at!(info, $($arg)+)
    };
}
