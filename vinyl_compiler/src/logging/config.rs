//! Configuration module for logging
//!
//! Buffer and message limits come from compile-time constants; levels and
//! output style come from runtime preferences.

use crate::config::compile_time::logging::{LOG_BUFFER_SIZE, MAX_LOG_MESSAGE_LENGTH};
use crate::config::runtime::LoggingPreferences;
use crate::logging::events::LogLevel;
use std::sync::OnceLock;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized")?;

    Ok(())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

/// Get minimum log level
pub fn get_min_log_level() -> LogLevel {
    get_runtime_preferences().min_log_level
}

/// Check if structured logging is enabled
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if console logging is enabled
pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Maximum number of events an in-memory logger retains
pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Messages longer than this are truncated before they are recorded
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

/// Validate current configuration settings
pub fn validate_config() -> Result<(), String> {
    if LOG_BUFFER_SIZE > 1_000_000 {
        return Err(format!("Log buffer size too large: {}", LOG_BUFFER_SIZE));
    }

    if MAX_LOG_MESSAGE_LENGTH < 64 {
        return Err(format!(
            "Max log message length too small: {}",
            MAX_LOG_MESSAGE_LENGTH
        ));
    }

    Ok(())
}

/// Get configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();

    format!(
        "Logging Configuration:\n\
         - Log buffer size: {}\n\
         - Max message length: {}\n\
         - Min log level: {}\n\
         - Structured logging: {}\n\
         - Console logging: {}",
        LOG_BUFFER_SIZE,
        MAX_LOG_MESSAGE_LENGTH,
        preferences.min_log_level.as_str(),
        preferences.use_structured_logging,
        preferences.enable_console_logging,
    )
}

/// Recommended preferences for the command-line driver in development
pub fn get_development_preferences() -> LoggingPreferences {
    LoggingPreferences {
        use_structured_logging: false,
        enable_console_logging: true,
        min_log_level: LogLevel::Debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_config_summary_lists_limits() {
        let summary = get_config_summary();
        assert!(summary.contains(&LOG_BUFFER_SIZE.to_string()));
        assert!(summary.contains("Min log level"));
    }

    #[test]
    fn test_development_preferences() {
        let prefs = get_development_preferences();
        assert_eq!(prefs.min_log_level, LogLevel::Debug);
        assert!(prefs.enable_console_logging);
    }
}
