//! # Application Configuration
//!
//! Configuration for the Slotbook app, loaded from environment variables
//! with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `SLOTBOOK_DATA_DIR`: directory holding the durable store
//!   (default: "./slotbook-data")
//! - `LOG_LEVEL`: logging level (default: "info")

use std::env;
use std::path::PathBuf;

use tracing::Level;

/// Configuration for the Slotbook application
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the durable key-value store
    pub data_dir: PathBuf,

    /// Log level for the application
    pub log_level: Level,
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables
    ///
    /// Every value has a default, so this never fails on a clean
    /// environment; an unrecognized `LOG_LEVEL` falls back to info.
    pub fn from_env() -> Self {
        let data_dir = env::var("SLOTBOOK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./slotbook-data"));

        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Self {
            data_dir,
            log_level,
        }
    }
}
