//! Logging macros keyed by `Code` values; context values accept any `Display`

/// Log error with a code, an optional span and optional context pairs
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::log_error_with_context($code, $message, None, vec![])
    };

    ($code:expr, $message:expr, span = $span:expr) => {
        $crate::logging::log_error_with_context($code, $message, Some($span), vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_error_with_context($code, $message, None, context_refs)
        }
    };

    ($code:expr, $message:expr, span = $span:expr, $($key:expr => $value:expr),+) => {
        {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_error_with_context($code, $message, Some($span), context_refs)
        }
    };
}

/// Log success with a code and optional context pairs
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::log_success_with_context($code, $message, vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_success_with_context($code, $message, context_refs)
        }
    };
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::log_info_with_context($message, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_info_with_context($message, context_refs)
        }
    };
}

/// Log warning message
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        {
            if let Some(logger) = $crate::logging::try_get_global_logger() {
                logger.log_event($crate::logging::LogEvent::warning($message));
            }
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            if let Some(logger) = $crate::logging::try_get_global_logger() {
                let mut event = $crate::logging::LogEvent::warning($message);
                $(
                    event = event.with_context($key, &format!("{}", $value));
                )+
                logger.log_event(event);
            }
        }
    };
}

/// Log debug message; context is only formatted when debug output is enabled
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        {
            if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
                if let Some(logger) = $crate::logging::try_get_global_logger() {
                    logger.log_event($crate::logging::LogEvent::debug($message));
                }
            }
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
                if let Some(logger) = $crate::logging::try_get_global_logger() {
                    let mut event = $crate::logging::LogEvent::debug($message);
                    $(
                        event = event.with_context($key, &format!("{}", $value));
                    )+
                    logger.log_event(event);
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::codes;
    use crate::utils::{Location, Span};

    // Expands every macro arm; without a global logger these are no-ops.
    #[test]
    fn test_macro_arms_expand() {
        let span = Span::new(Location::new(1, 1), Location::new(1, 4));
        let token_count: usize = 42;

        log_error!(codes::lexical::MALFORMED_SYMBOL, "Malformed symbol");
        log_error!(codes::lexical::MALFORMED_SYMBOL, "Malformed symbol", span = span);
        log_error!(codes::syntax::UNEXPECTED_TOKEN, "Unexpected token",
            "found" => "}",
            "line" => 3
        );
        log_error!(codes::syntax::UNEXPECTED_TOKEN, "Unexpected token", span = span,
            "found" => "}"
        );
        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "tokens" => token_count
        );
        log_success!(codes::success::PARSE_COMPLETE, "Parse completed");
        log_info!("Parsing source", "chars" => 128);
        log_warning!("Source ends without a trailing newline", "line" => 7);
        log_debug!("Dispatching", "char" => 'x');
    }
}
