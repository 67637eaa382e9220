// build.rs - TOML-driven constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    source: SourceLimits,
    lexical: LexicalLimits,
    syntax: SyntaxLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct SourceLimits {
    max_file_size: u64,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_identifier_length: usize,
    max_comment_length: usize,
    max_token_count: usize,
}

#[derive(serde::Deserialize)]
struct SyntaxLimits {
    max_parse_depth: usize,
    max_function_arguments: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=VINYL_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=VINYL_CONFIG_DIR");

    let profile = env::var("VINYL_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("VINYL_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of the vinyl_compiler directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);

    // Surface the resolved selection to config::build_info
    println!("cargo:rustc-env=VINYL_BUILD_PROFILE={}", profile);
    println!("cargo:rustc-env=VINYL_CONFIG_DIR={}", config_dir);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_FILE_SIZE: u64 = 1_000_000_000;
    const ABSOLUTE_MAX_PARSE_DEPTH: usize = 4096;

    if config.source.max_file_size == 0 || config.source.max_file_size > ABSOLUTE_MAX_FILE_SIZE {
        panic!("LIMITS: max_file_size must be in 1..={}", ABSOLUTE_MAX_FILE_SIZE);
    }

    let nonzero = [
        ("max_identifier_length", config.lexical.max_identifier_length),
        ("max_comment_length", config.lexical.max_comment_length),
        ("max_token_count", config.lexical.max_token_count),
        ("max_parse_depth", config.syntax.max_parse_depth),
        ("max_function_arguments", config.syntax.max_function_arguments),
        ("log_buffer_size", config.logging.log_buffer_size),
        ("max_log_message_length", config.logging.max_log_message_length),
    ];
    for (name, value) in nonzero {
        if value == 0 {
            panic!("LIMITS: {} must be greater than zero", name);
        }
    }

    // Deep recursion in the parser is bounded by this value
    if config.syntax.max_parse_depth > ABSOLUTE_MAX_PARSE_DEPTH {
        panic!("LIMITS: max_parse_depth exceeds absolute maximum");
    }

    if profile == "production" {
        if config.source.max_file_size > 50_000_000 {
            panic!("PRODUCTION: max_file_size too high for production");
        }
        if config.syntax.max_parse_depth > 256 {
            panic!("PRODUCTION: max_parse_depth too high for production");
        }
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod source {{
        pub const MAX_FILE_SIZE: u64 = {};
    }}

    pub mod lexical {{
        pub const MAX_IDENTIFIER_LENGTH: usize = {};
        pub const MAX_COMMENT_LENGTH: usize = {};
        pub const MAX_TOKEN_COUNT: usize = {};
    }}

    pub mod syntax {{
        pub const MAX_PARSE_DEPTH: usize = {};
        pub const MAX_FUNCTION_ARGUMENTS: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.source.max_file_size,
        config.lexical.max_identifier_length,
        config.lexical.max_comment_length,
        config.lexical.max_token_count,
        config.syntax.max_parse_depth,
        config.syntax.max_function_arguments,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
