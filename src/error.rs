/*!
 * Error types for build-data
 */

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_IO: i32 = 1;
pub const EXIT_FATAL: i32 = 2;
pub const EXIT_TOOL: i32 = 3;

#[derive(Error, Debug)]
pub enum BuildError {
    /// Source asset not found
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Output directory could not be created
    #[error("Cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Minifier process could not be started
    #[error("Failed to start minifier {}: {source}", .program.display())]
    MinifierSpawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Minifier ran but reported failure
    #[error(
        "Minifier {} failed on {} ({}){}",
        .program.display(),
        .path.display(),
        describe_code(.code),
        describe_stderr(.stderr)
    )]
    MinifierFailed {
        program: PathBuf,
        path: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    /// Compression error
    #[error("Compression error: {0}")]
    Compression(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

impl BuildError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::SourceNotFound(_)
            | BuildError::OutputDir { .. }
            | BuildError::Config(_) => EXIT_FATAL,
            BuildError::MinifierSpawn { .. } | BuildError::MinifierFailed { .. } => EXIT_TOOL,
            BuildError::Compression(_) | BuildError::Io(_) => EXIT_IO,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            BuildError::SourceNotFound(_) => ErrorCategory::Validation,
            BuildError::OutputDir { .. } => ErrorCategory::Filesystem,
            BuildError::MinifierSpawn { .. } | BuildError::MinifierFailed { .. } => {
                ErrorCategory::Tool
            }
            BuildError::Compression(_) => ErrorCategory::Codec,
            BuildError::Config(_) => ErrorCategory::Configuration,
            BuildError::Io(_) => ErrorCategory::IoError,
        }
    }
}

/// Error category for classification and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or invalid input paths
    Validation,
    /// Output directory problems
    Filesystem,
    /// External minifier failures
    Tool,
    /// gzip encoding or verification
    Codec,
    /// Configuration errors
    Configuration,
    /// Other I/O errors
    IoError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Filesystem => write!(f, "filesystem"),
            ErrorCategory::Tool => write!(f, "tool"),
            ErrorCategory::Codec => write!(f, "codec"),
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::IoError => write!(f, "io"),
        }
    }
}

impl From<toml::de::Error> for BuildError {
    fn from(err: toml::de::Error) -> Self {
        BuildError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for BuildError {
    fn from(err: toml::ser::Error) -> Self {
        BuildError::Config(format!("TOML serialize error: {}", err))
    }
}
