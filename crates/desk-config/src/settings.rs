//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub desk: DeskSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "trading-desk".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Desk settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskSettings {
    /// Tenant every CLI invocation acts as
    pub default_owner: String,
    /// Optional instrument reference data to import at startup
    pub instruments_csv: Option<PathBuf>,
    /// Where the desk state lives between invocations
    pub state_file: Option<PathBuf>,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            default_owner: "desk-local".to_string(),
            instruments_csv: None,
            state_file: Some(PathBuf::from("desk-state.json")),
        }
    }
}
