//! Configuration module for the Vinyl front end
//! Compile-time limits are generated from TOML configuration by build.rs

// Generated at compile time from config/<profile>.toml
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("VINYL_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("VINYL_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}
