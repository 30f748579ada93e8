/*!
 * Configuration types for build-data
 */

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};

/// Main configuration for an asset build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// HTML source asset
    #[serde(default = "default_html_source")]
    pub html_source: PathBuf,

    /// CSS source asset
    #[serde(default = "default_css_source")]
    pub css_source: PathBuf,

    /// Directory receiving both artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name of the HTML artifact inside `output_dir`
    #[serde(default = "default_html_output")]
    pub html_output: String,

    /// File name of the gzip CSS artifact inside `output_dir`
    #[serde(default = "default_css_output")]
    pub css_output: String,

    /// External minifier settings
    #[serde(default)]
    pub minifier: MinifierConfig,

    /// gzip level (0-9)
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,

    /// Decompress the CSS artifact after writing and compare
    #[serde(default = "default_true")]
    pub verify: bool,

    /// Log level for diagnostic output
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path (None = stderr)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (shorthand for log_level = debug)
    #[serde(default)]
    pub verbose: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            html_source: default_html_source(),
            css_source: default_css_source(),
            output_dir: default_output_dir(),
            html_output: default_html_output(),
            css_output: default_css_output(),
            minifier: MinifierConfig::default(),
            compression_level: default_compression_level(),
            verify: true,
            log_level: LogLevel::Info,
            log_file: None,
            verbose: false,
        }
    }
}

/// External minifier invocation: `<program> <args...> <source>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifierConfig {
    /// Probe for the minifier at all; false forces passthrough
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Program looked up on PATH
    #[serde(default = "default_minifier_program")]
    pub program: String,

    /// Arguments placed before the source path
    #[serde(default = "default_minifier_args")]
    pub args: Vec<String>,
}

impl Default for MinifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: default_minifier_program(),
            args: default_minifier_args(),
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    Warn,

    /// Info, warnings, and errors
    #[default]
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_html_source() -> PathBuf {
    PathBuf::from("web/index.html")
}

fn default_css_source() -> PathBuf {
    PathBuf::from("web/style.css")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_html_output() -> String {
    "index.html".to_string()
}

fn default_css_output() -> String {
    "style.css.gz".to_string()
}

fn default_compression_level() -> u32 {
    6
}

fn default_minifier_program() -> String {
    "npx".to_string()
}

fn default_minifier_args() -> Vec<String> {
    vec!["minify".to_string()]
}

impl BuildConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BuildError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: BuildConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Reject settings the pipeline cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.compression_level > 9 {
            return Err(BuildError::Config(format!(
                "compression_level must be 0-9, got {}",
                self.compression_level
            )));
        }
        if self.html_output.is_empty() || self.css_output.is_empty() {
            return Err(BuildError::Config(
                "artifact file names must not be empty".to_string(),
            ));
        }
        if self.css_output.len() <= 3 || !self.css_output.ends_with(".gz") {
            return Err(BuildError::Config(format!(
                "css_output must end in .gz, got {:?}",
                self.css_output
            )));
        }
        if self.minifier.enabled && self.minifier.program.trim().is_empty() {
            return Err(BuildError::Config(
                "minifier.program must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Destination of the HTML artifact
    pub fn html_destination(&self) -> PathBuf {
        self.output_dir.join(&self.html_output)
    }

    /// Destination of the gzip CSS artifact
    pub fn css_destination(&self) -> PathBuf {
        self.output_dir.join(&self.css_output)
    }
}
