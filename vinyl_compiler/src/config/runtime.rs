// RUNTIME PREFERENCES (User Experience)

use crate::logging::events::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to count emitted tokens per kind
    pub collect_detailed_metrics: bool,

    /// Whether to emit a debug event for every token produced
    pub trace_tokens: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var(env_vars::LEXICAL_DETAILED_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            trace_tokens: env::var(env_vars::LEXICAL_TRACE_TOKENS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxPreferences {
    /// Whether to emit a debug event when each production is entered
    pub trace_productions: bool,
}

impl Default for SyntaxPreferences {
    fn default() -> Self {
        Self {
            trace_productions: env::var(env_vars::SYNTAX_TRACE_PRODUCTIONS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level an event needs to be emitted
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub syntax: SyntaxPreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "VINYL_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_TRACE_TOKENS: &str = "VINYL_LEXICAL_TRACE_TOKENS";

    // Syntax
    pub const SYNTAX_TRACE_PRODUCTIONS: &str = "VINYL_SYNTAX_TRACE_PRODUCTIONS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "VINYL_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "VINYL_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "VINYL_LOGGING_MIN_LEVEL";
}
