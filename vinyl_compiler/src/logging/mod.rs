//! Global logging module for the Vinyl front end
//!
//! Provides a thread-safe global logging service behind a small macro
//! interface. Until a service is installed every macro is a no-op, so
//! library users never have to initialize logging.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use crate::utils::Span;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{
    ConsoleLogger, Logger, LoggingService, MemoryLogger, MultiLogger, StructuredLogger,
};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from environment-driven preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    // Every code the pipeline can raise needs registered metadata
    let required_codes = [
        codes::system::INTERNAL_ERROR,
        codes::source::FILE_NOT_FOUND,
        codes::lexical::MALFORMED_SYMBOL,
        codes::syntax::UNEXPECTED_TOKEN,
    ];
    for code in required_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Install explicit preferences, then initialize global logging
pub fn init_global_logging_with_preferences(
    preferences: LoggingPreferences,
) -> Result<(), String> {
    config::init_runtime_preferences(preferences)?;
    init_global_logging()
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized")?;

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<Span>,
    context: Vec<(&str, &str)>,
) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = LogEvent::error(code, message);
    if let Some(s) = span {
        event = event.with_span(s);
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = LogEvent::success(code, message);
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = LogEvent::info(message);
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

/// Get system diagnostics
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    if let Some(logger) = try_get_global_logger() {
        diagnostics.push_str(&format!("Service level: {}\n", logger.min_level().as_str()));
    }
    diagnostics.push_str(&format!("{}\n\n", crate::config::build_info::source_info()));
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}

/// Safe error logging (falls back to stderr when uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}
