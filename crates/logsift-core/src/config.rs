//! Configuration types for logsift.
//!
//! [`Config::load`] reads `~/.config/logsift/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! Classification keywords and timestamp shapes are fixed and deliberately
//! absent from the config.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[intake]
accepted_extensions  = ["log", "txt"]
accepted_mime_types  = ["text/plain"]
max_concurrent_reads = 8
max_file_bytes       = 0

[logging]
filter    = "info"
debug_log = ""
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/logsift/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub intake: IntakeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[intake]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// File name extensions (without the dot) accepted for upload.
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
    /// Declared MIME types accepted regardless of extension.
    #[serde(default = "default_accepted_mime_types")]
    pub accepted_mime_types: Vec<String>,
    #[serde(default = "default_max_concurrent_reads")]
    pub max_concurrent_reads: usize,
    /// Reject files larger than this many bytes. `0` disables the limit.
    #[serde(default)]
    pub max_file_bytes: u64,
}

fn default_accepted_extensions() -> Vec<String> {
    vec!["log".to_string(), "txt".to_string()]
}
fn default_accepted_mime_types() -> Vec<String> {
    vec!["text/plain".to_string()]
}
fn default_max_concurrent_reads() -> usize { 8 }

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: default_accepted_extensions(),
            accepted_mime_types: default_accepted_mime_types(),
            max_concurrent_reads: default_max_concurrent_reads(),
            max_file_bytes: 0,
        }
    }
}

/// `[logging]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Path of the debug log file. Empty means stderr.
    #[serde(default)]
    pub debug_log: String,
}

fn default_filter() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            debug_log: String::new(),
        }
    }
}

impl LoggingConfig {
    pub fn debug_log_path(&self) -> Option<PathBuf> {
        (!self.debug_log.is_empty()).then(|| PathBuf::from(&self.debug_log))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/logsift/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&config_path())
    }

    /// Load `path` layered on top of the built-in defaults, first writing the
    /// defaults there (creating parent directories) if the file is missing.
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(path)
    }

    /// Load an explicit file layered on top of the built-in defaults. A missing
    /// file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("logsift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
