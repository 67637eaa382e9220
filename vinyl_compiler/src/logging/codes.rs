//! Consolidated error codes and classification system
//!
//! Single source of truth for every code the front end logs, together with the
//! behavioral metadata attached to each error code.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Critical" => Some(Severity::Critical),
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Source loading error codes
pub mod source {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const MALFORMED_INTEGER: Code = Code::new("E020");
    pub const MALFORMED_FLOAT: Code = Code::new("E021");
    pub const MALFORMED_IDENTIFIER: Code = Code::new("E022");
    pub const RESERVED_KEYWORD: Code = Code::new("E023");
    pub const MALFORMED_KEYWORD: Code = Code::new("E024");
    pub const MALFORMED_SYMBOL: Code = Code::new("E025");
    pub const UNTERMINATED_COMMENT: Code = Code::new("E026");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E027");
    pub const COMMENT_TOO_LONG: Code = Code::new("E028");
    pub const TOKEN_LIMIT_EXCEEDED: Code = Code::new("E029");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E051");
    pub const MAX_RECURSION_DEPTH: Code = Code::new("E052");
    pub const TOO_MANY_ARGUMENTS: Code = Code::new("E053");
}

/// Success and progress codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const SOURCE_LOADED: Code = Code::new("I010");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const PARSE_COMPLETE: Code = Code::new("I040");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn register(registry: &mut HashMap<&'static str, ErrorMetadata>, metadata: ErrorMetadata) {
    registry.insert(metadata.code, metadata);
}

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        register(
            &mut registry,
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal error",
                "File a bug report with the input that triggered it",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failure",
                "Check logging configuration and environment variables",
            ),
        );

        // Source loading errors
        register(
            &mut registry,
            ErrorMetadata::new(
                "E005",
                "Source",
                Severity::High,
                false,
                true,
                "Source file not found",
                "Verify the path exists and points to a file",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E007",
                "Source",
                Severity::High,
                false,
                true,
                "Source file exceeds the maximum size",
                "Split the source or raise max_file_size in the build profile",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E009",
                "Source",
                Severity::High,
                false,
                true,
                "Permission denied reading source file",
                "Check file permissions",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E010",
                "Source",
                Severity::High,
                false,
                true,
                "Source file is not valid UTF-8",
                "Re-encode the file as UTF-8",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E011",
                "Source",
                Severity::High,
                false,
                true,
                "I/O error while reading source",
                "Retry or check the underlying device",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E012",
                "Source",
                Severity::High,
                false,
                true,
                "Invalid source path",
                "Provide a non-empty path to a regular file",
            ),
        );

        // Lexical errors
        register(
            &mut registry,
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                false,
                true,
                "Malformed integer literal",
                "Use a 0b, 0o, 0x or decimal literal with an optional i8..u64, iz or uz suffix",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::High,
                false,
                true,
                "Malformed floating point literal",
                "Use digits, an optional fraction and exponent, and an optional f32 or f64 suffix",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::High,
                false,
                true,
                "Malformed identifier",
                "Identifiers may only contain letters, digits and underscores",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::High,
                false,
                true,
                "Reserved keyword used as identifier",
                "Rename the identifier",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Malformed keyword",
                "Keyword spelling does not match a reserved word",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E025",
                "Lexical",
                Severity::High,
                false,
                true,
                "Malformed symbol",
                "Remove or replace the unrecognized character",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E026",
                "Lexical",
                Severity::High,
                false,
                true,
                "Unterminated block comment",
                "Close the block comment with */",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E027",
                "Lexical",
                Severity::High,
                false,
                true,
                "Identifier exceeds maximum length",
                "Shorten the identifier",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E028",
                "Lexical",
                Severity::High,
                false,
                true,
                "Comment exceeds maximum length",
                "Split the comment",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E029",
                "Lexical",
                Severity::Critical,
                false,
                true,
                "Token count limit exceeded",
                "Split the source into smaller units",
            ),
        );

        // Syntax errors
        register(
            &mut registry,
            ErrorMetadata::new(
                "E050",
                "Syntax",
                Severity::High,
                false,
                true,
                "Unexpected token",
                "Check the token against the expected grammar at this position",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E051",
                "Syntax",
                Severity::High,
                false,
                true,
                "Unexpected end of input",
                "Complete the construct before the end of the source",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E052",
                "Syntax",
                Severity::Critical,
                false,
                true,
                "Maximum nesting depth exceeded",
                "Reduce the nesting of if statements",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "E053",
                "Syntax",
                Severity::High,
                false,
                true,
                "Too many function arguments",
                "Reduce the number of arguments or group them",
            ),
        );

        // Success codes
        register(
            &mut registry,
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                false,
                "System initialization completed",
                "Ready for processing",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "I010",
                "Source",
                Severity::Low,
                true,
                false,
                "Source file loaded",
                "Ready for lexical analysis",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Tokenization completed",
                "Token stream ready for parsing",
            ),
        );
        register(
            &mut registry,
            ErrorMetadata::new(
                "I040",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Syntax tree construction completed",
                "Syntax tree ready for semantic analysis",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_registered() {
        let codes = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            source::FILE_NOT_FOUND,
            source::FILE_TOO_LARGE,
            source::PERMISSION_DENIED,
            source::INVALID_ENCODING,
            source::IO_ERROR,
            source::INVALID_PATH,
            lexical::MALFORMED_INTEGER,
            lexical::MALFORMED_FLOAT,
            lexical::MALFORMED_IDENTIFIER,
            lexical::RESERVED_KEYWORD,
            lexical::MALFORMED_KEYWORD,
            lexical::MALFORMED_SYMBOL,
            lexical::UNTERMINATED_COMMENT,
            lexical::IDENTIFIER_TOO_LONG,
            lexical::COMMENT_TOO_LONG,
            lexical::TOKEN_LIMIT_EXCEEDED,
            syntax::UNEXPECTED_TOKEN,
            syntax::UNEXPECTED_END_OF_INPUT,
            syntax::MAX_RECURSION_DEPTH,
            syntax::TOO_MANY_ARGUMENTS,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::SOURCE_LOADED,
            success::TOKENIZATION_COMPLETE,
            success::PARSE_COMPLETE,
        ];

        for code in codes {
            let metadata = get_error_metadata(code.as_str())
                .unwrap_or_else(|| panic!("missing metadata for {}", code));
            assert_eq!(metadata.code, code.as_str());
        }
    }

    #[test]
    fn test_classification_defaults_for_unknown_code() {
        assert_eq!(get_severity("E999"), Severity::Medium);
        assert!(is_recoverable("E999"));
        assert!(!requires_halt("E999"));
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
    }

    #[test]
    fn test_classification_lookup() {
        assert_eq!(get_category(syntax::UNEXPECTED_TOKEN.as_str()), "Syntax");
        assert_eq!(
            get_severity(lexical::TOKEN_LIMIT_EXCEEDED.as_str()),
            Severity::Critical
        );
        assert!(requires_halt(lexical::MALFORMED_SYMBOL.as_str()));
        assert!(is_recoverable(success::PARSE_COMPLETE.as_str()));
    }

    #[test]
    fn test_severity_round_trip_names() {
        for severity in [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ] {
            assert_eq!(Severity::from_str(severity.as_str()), Some(severity));
        }
        assert_eq!(Severity::from_str("Severe"), None);
    }
}
