//! Event system for front end logging

use super::codes::Code;
use crate::utils::Span;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub span: Option<Span>,
    pub context: HashMap<String, String>,
}

impl LogEvent {
    fn new(level: LogLevel, code: Code, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            code,
            message: truncate_message(message),
            span: None,
            context: HashMap::new(),
        }
    }

    /// Create a new error event
    pub fn error(error_code: Code, message: &str) -> Self {
        Self::new(LogLevel::Error, error_code, message)
    }

    /// Create a new warning event (warnings may not have codes)
    pub fn warning(message: &str) -> Self {
        Self::new(LogLevel::Warning, Code::new("W000"), message)
    }

    /// Create a new info event (info may not need codes)
    pub fn info(message: &str) -> Self {
        Self::new(LogLevel::Info, Code::new("I000"), message)
    }

    /// Create a success event (info with success code)
    pub fn success(success_code: Code, message: &str) -> Self {
        Self::new(LogLevel::Info, success_code, message)
    }

    /// Create a debug event
    pub fn debug(message: &str) -> Self {
        Self::new(LogLevel::Debug, Code::new("D000"), message)
    }

    /// Add span information
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add context data
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn is_warning(&self) -> bool {
        self.level == LogLevel::Warning
    }

    pub fn is_info(&self) -> bool {
        self.level == LogLevel::Info
    }

    pub fn is_debug(&self) -> bool {
        self.level == LogLevel::Debug
    }

    /// Check if this event requires halting
    pub fn requires_halt(&self) -> bool {
        super::codes::requires_halt(self.code.as_str())
    }

    /// Get severity from error code
    pub fn severity(&self) -> &'static str {
        super::codes::get_severity(self.code.as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        super::codes::get_category(self.code.as_str())
    }

    pub fn description(&self) -> &'static str {
        super::codes::get_description(self.code.as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        super::codes::get_action(self.code.as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        super::codes::is_recoverable(self.code.as_str())
    }

    /// Format for display
    pub fn format(&self) -> String {
        let span_str = self
            .span
            .as_ref()
            .map(|s| format!(" at {}", s.start))
            .unwrap_or_default();

        format!(
            "[{}] {} - {}{}",
            self.level.as_str(),
            self.code.as_str(),
            self.message,
            span_str
        )
    }

    /// Format with detailed error information
    pub fn format_detailed(&self) -> String {
        let mut output = self.format();

        output.push_str(&format!("\n  Category: {}", self.category()));
        output.push_str(&format!("\n  Severity: {}", self.severity()));

        if self.is_error() {
            output.push_str(&format!("\n  Recoverable: {}", self.is_recoverable()));
            output.push_str(&format!("\n  Requires halt: {}", self.requires_halt()));
        }

        let description = self.description();
        if description != "Unknown error" {
            output.push_str(&format!("\n  Description: {}", description));
        }

        let action = self.recommended_action();
        if action != "No specific action available" {
            output.push_str(&format!("\n  Recommended action: {}", action));
        }

        if !self.context.is_empty() {
            let mut keys: Vec<&String> = self.context.keys().collect();
            keys.sort();
            output.push_str("\n  Context:");
            for key in keys {
                output.push_str(&format!("\n    {}: {}", key, self.context[key]));
            }
        }

        output
    }

    /// Format as JSON for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "level": self.level.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
            "category": self.category(),
            "severity": self.severity(),
        });

        if self.is_error() {
            json["error_metadata"] = serde_json::json!({
                "recoverable": self.is_recoverable(),
                "requires_halt": self.requires_halt(),
                "description": self.description(),
                "recommended_action": self.recommended_action(),
            });
        }

        if let Some(span) = &self.span {
            json["span"] = serde_json::to_value(span)?;
        }

        if !self.context.is_empty() {
            json["context"] = serde_json::Value::Object(
                self.context
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            );
        }

        serde_json::to_string(&json)
    }
}

fn truncate_message(message: &str) -> String {
    let max = super::config::get_max_log_message_length();
    match message.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use crate::utils::Location;

    #[test]
    fn test_error_event_creation() {
        let event = LogEvent::error(codes::source::FILE_NOT_FOUND, "File not found");

        assert!(event.is_error());
        assert_eq!(event.code.as_str(), "E005");
        assert_eq!(event.message, "File not found");
        assert_eq!(event.category(), "Source");
    }

    #[test]
    fn test_success_event_creation() {
        let event = LogEvent::success(codes::success::PARSE_COMPLETE, "Parsed");

        assert!(event.is_info());
        assert_eq!(event.code.as_str(), "I040");
    }

    #[test]
    fn test_event_formatting_includes_location() {
        let span = Span::new(Location::new(3, 7), Location::new(3, 9));
        let event = LogEvent::error(codes::syntax::UNEXPECTED_TOKEN, "Unexpected symbol: \":\"")
            .with_span(span);
        let formatted = event.format();

        assert!(formatted.starts_with("[ERROR] E050"));
        assert!(formatted.ends_with("at 3:7"));
    }

    #[test]
    fn test_detailed_format_lists_metadata() {
        let event = LogEvent::error(codes::lexical::UNTERMINATED_COMMENT, "Unterminated")
            .with_context("line", "4");
        let detailed = event.format_detailed();

        assert!(detailed.contains("Category: Lexical"));
        assert!(detailed.contains("Requires halt: true"));
        assert!(detailed.contains("line: 4"));
    }

    #[test]
    fn test_json_formatting() {
        let event = LogEvent::error(codes::source::PERMISSION_DENIED, "Access denied")
            .with_context("file", "main.vinyl");

        let json = event.format_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["level"], "ERROR");
        assert_eq!(value["code"], "E009");
        assert_eq!(value["context"]["file"], "main.vinyl");
        assert_eq!(value["error_metadata"]["requires_halt"], true);
    }

    #[test]
    fn test_long_messages_are_truncated() {
        let max = crate::logging::config::get_max_log_message_length();
        let message = "x".repeat(max + 10);
        let event = LogEvent::info(&message);

        assert_eq!(event.message.chars().count(), max + 3);
        assert!(event.message.ends_with("..."));
    }
}
