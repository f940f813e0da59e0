use std::env;

use once_cell::sync::Lazy;

pub const DEBUG_ENV_VAR: &str = "CBLOCK_DEBUG";

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var(DEBUG_ENV_VAR).map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

/// Builds an error cause, appending the details only when debugging.
///
/// # Arguments
///
/// * `message` - The main message.
/// * `details` - Additional details shown with `CBLOCK_DEBUG` set.
///
/// # Returns
///
/// A formatted string containing the message and, optionally, the details.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if *DEBUG_ENABLED {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Logs a debug message to stderr with optional formatted arguments.
///
/// Output goes to stderr so that the generated block on stdout stays clean.
///
/// # Examples
///
/// ```
/// use cblock::debug;
///
/// debug!("Converting input");
/// debug!("Read {} characters from {}", 42, "stdin");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
