//! Logging service and logger implementations

use super::codes::Code;
use super::config;
use super::events::{LogEvent, LogLevel};
use std::sync::{Arc, Mutex, MutexGuard};

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with configuration awareness
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    /// Create new logging service with specified logger and minimum level
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service with configuration-aware settings
    pub fn with_config() -> Self {
        let min_level = config::get_min_log_level();
        let logger: Arc<dyn Logger> = if config::use_structured_logging() {
            Arc::new(StructuredLogger::new(min_level))
        } else {
            Arc::new(ConsoleLogger::new(min_level))
        };

        Self::new(logger, min_level)
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Check if level should be logged
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }

    pub fn log_error(&self, error_code: Code, message: &str) {
        self.log_event(LogEvent::error(error_code, message));
    }

    pub fn log_info(&self, message: &str) {
        self.log_event(LogEvent::info(message));
    }

    pub fn log_success(&self, success_code: Code, message: &str) {
        self.log_event(LogEvent::success(success_code, message));
    }

    pub fn log_warning(&self, message: &str) {
        self.log_event(LogEvent::warning(message));
    }

    pub fn log_debug(&self, message: &str) {
        self.log_event(LogEvent::debug(message));
    }
}

/// Plain-text logger; all events go to stderr, leaving stdout to the driver
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            eprintln!("{}", event.format());
        }
    }
}

/// Structured logger emitting one JSON object per event
pub struct StructuredLogger {
    min_level: LogLevel,
}

impl StructuredLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            let line = event.format_json().unwrap_or_else(|_| event.format());
            eprintln!("{}", line);
        }
    }
}

/// Memory logger for testing, bounded by the configured buffer size
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn events(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.events().clone()
    }

    pub fn clear(&self) {
        self.events().clear();
    }

    pub fn event_count(&self) -> usize {
        self.events().len()
    }

    pub fn get_errors(&self) -> Vec<LogEvent> {
        self.events()
            .iter()
            .filter(|e| e.is_error())
            .cloned()
            .collect()
    }

    pub fn get_warnings(&self) -> Vec<LogEvent> {
        self.events()
            .iter()
            .filter(|e| e.is_warning())
            .cloned()
            .collect()
    }

    pub fn get_events_with_code(&self, code: Code) -> Vec<LogEvent> {
        self.events()
            .iter()
            .filter(|e| e.code == code)
            .cloned()
            .collect()
    }

    pub fn has_error_with_code(&self, code: Code) -> bool {
        self.events()
            .iter()
            .any(|e| e.is_error() && e.code == code)
    }

    pub fn has_success_with_code(&self, code: Code) -> bool {
        self.events()
            .iter()
            .any(|e| e.is_info() && e.code == code)
    }

    pub fn get_events_by_category(&self, category: &str) -> Vec<LogEvent> {
        self.events()
            .iter()
            .filter(|e| e.category() == category)
            .cloned()
            .collect()
    }

    pub fn get_summary(&self) -> EventSummary {
        let events = self.events();

        EventSummary {
            total_count: events.len(),
            error_count: events.iter().filter(|e| e.is_error()).count(),
            warning_count: events.iter().filter(|e| e.is_warning()).count(),
            info_count: events.iter().filter(|e| e.is_info()).count(),
            debug_count: events.iter().filter(|e| e.is_debug()).count(),
        }
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.events();

        let max_events = config::get_error_buffer_size();
        if events.len() >= max_events {
            let remove_count = events.len() - max_events + 1;
            events.drain(0..remove_count);
        }

        events.push(event.clone());
    }
}

/// Summary of events in memory logger
#[derive(Debug, Clone)]
pub struct EventSummary {
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub debug_count: usize,
}

impl EventSummary {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count > 0
    }
}

/// Multi-target logger that fans each event out to several destinations
pub struct MultiLogger {
    loggers: Vec<Arc<dyn Logger>>,
    min_level: LogLevel,
}

impl MultiLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            loggers: Vec::new(),
            min_level,
        }
    }

    pub fn add_logger(&mut self, logger: Arc<dyn Logger>) {
        self.loggers.push(logger);
    }

    pub fn with_console(mut self, console_level: LogLevel) -> Self {
        self.add_logger(Arc::new(ConsoleLogger::new(console_level)));
        self
    }

    pub fn with_structured_console(mut self, console_level: LogLevel) -> Self {
        self.add_logger(Arc::new(StructuredLogger::new(console_level)));
        self
    }

    pub fn with_memory(mut self) -> (Self, Arc<MemoryLogger>) {
        let memory_logger = Arc::new(MemoryLogger::new());
        self.add_logger(memory_logger.clone());
        (self, memory_logger)
    }
}

impl Logger for MultiLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            for logger in &self.loggers {
                logger.log(event);
            }
        }
    }
}

// ============================================================================
// CONFIGURATION-AWARE FACTORY FUNCTIONS
// ============================================================================

/// Create logging service based on current configuration
pub fn create_configured_service() -> LoggingService {
    let min_level = config::get_min_log_level();
    let mut multi_logger = MultiLogger::new(min_level);

    if config::use_console_logging() {
        if config::use_structured_logging() {
            multi_logger = multi_logger.with_structured_console(min_level);
        } else {
            multi_logger = multi_logger.with_console(min_level);
        }
    }

    LoggingService::new(Arc::new(multi_logger), min_level)
}

/// Create testing logger (memory-based, all events captured)
pub fn create_test_logger() -> Arc<MemoryLogger> {
    Arc::new(MemoryLogger::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_console_and_structured_loggers() {
        let event = LogEvent::error(codes::source::FILE_NOT_FOUND, "Test error")
            .with_context("key", "value");

        ConsoleLogger::new(LogLevel::Info).log(&event);
        StructuredLogger::new(LogLevel::Debug).log(&event);
    }

    #[test]
    fn test_memory_logger() {
        let logger = MemoryLogger::new();

        logger.log(&LogEvent::info("Message 1"));
        logger.log(&LogEvent::error(
            codes::lexical::MALFORMED_SYMBOL,
            "Malformed symbol",
        ));

        assert_eq!(logger.event_count(), 2);
        assert_eq!(logger.get_errors().len(), 1);
        assert!(logger.has_error_with_code(codes::lexical::MALFORMED_SYMBOL));

        let summary = logger.get_summary();
        assert_eq!(summary.total_count, 2);
        assert!(summary.has_errors());
        assert!(!summary.has_warnings());

        logger.clear();
        assert_eq!(logger.event_count(), 0);
    }

    #[test]
    fn test_memory_logger_is_bounded() {
        let logger = MemoryLogger::new();
        let max = config::get_error_buffer_size();

        for _ in 0..max + 5 {
            logger.log(&LogEvent::debug("tick"));
        }

        assert_eq!(logger.event_count(), max);
    }

    #[test]
    fn test_multi_logger() {
        let multi = MultiLogger::new(LogLevel::Debug);
        let (multi, memory) = multi.with_memory();

        multi.log(&LogEvent::info("Test message"));

        assert_eq!(memory.event_count(), 1);
    }

    #[test]
    fn test_logging_service() {
        let logger = create_test_logger();
        let service = LoggingService::new(logger.clone(), LogLevel::Debug);

        service.log_error(codes::syntax::UNEXPECTED_TOKEN, "Test error");
        service.log_success(codes::success::PARSE_COMPLETE, "Test success");
        service.log_info("Test info");
        service.log_warning("Test warning");

        assert_eq!(logger.event_count(), 4);
        assert!(logger.has_error_with_code(codes::syntax::UNEXPECTED_TOKEN));
        assert!(logger.has_success_with_code(codes::success::PARSE_COMPLETE));
        assert_eq!(logger.get_warnings().len(), 1);
        assert_eq!(logger.get_events_by_category("Syntax").len(), 2);
    }

    #[test]
    fn test_log_level_filtering() {
        let logger = create_test_logger();
        let service = LoggingService::new(logger.clone(), LogLevel::Error);

        service.log_debug("Debug message");
        service.log_info("Info message");
        service.log_error(codes::system::INTERNAL_ERROR, "Error message");

        assert_eq!(logger.event_count(), 1);
        assert_eq!(
            logger.get_events_with_code(codes::system::INTERNAL_ERROR).len(),
            1
        );
    }
}
