//! Run reporting in JSON Lines and human-readable modes.

use serde::Serialize;

use crate::core::{ArtifactReport, PipelineReport};
use crate::error::BuildError;

/// Output mode for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// JSON record for a failed run
#[derive(Debug, Serialize)]
struct ErrorRecord {
    status: &'static str,
    category: String,
    exit_code: i32,
    error: String,
}

/// Writes run results to stdout (reports) and stderr (errors)
#[derive(Debug, Clone)]
pub struct OutputWriter {
    pub mode: OutputMode,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            mode: if json { OutputMode::Json } else { OutputMode::Human },
        }
    }

    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Render one artifact line
    pub fn format_artifact(&self, artifact: &ArtifactReport) -> String {
        match self.mode {
            OutputMode::Json => serde_json::to_string(artifact).unwrap_or_default(),
            OutputMode::Human => {
                let mut line = format!(
                    "  {} \u{2192} {} ({}, {} bytes",
                    artifact.source.display(),
                    artifact.destination.display(),
                    artifact.strategy,
                    artifact.written_bytes
                );
                if let Some(ratio) = artifact.compression_ratio {
                    line.push_str(&format!(", {:.1}% of {}", ratio, artifact.content_bytes));
                }
                line.push(')');
                line
            }
        }
    }

    /// Render a failure
    pub fn format_error(&self, err: &BuildError) -> String {
        match self.mode {
            OutputMode::Json => {
                let record = ErrorRecord {
                    status: "failed",
                    category: err.category().to_string(),
                    exit_code: err.exit_code(),
                    error: sanitize_error(&err.to_string()),
                };
                serde_json::to_string(&record).unwrap_or_default()
            }
            OutputMode::Human => format!("Error: {}", sanitize_error(&err.to_string())),
        }
    }

    /// Print every artifact of a finished run
    pub fn report(&self, report: &PipelineReport) {
        for artifact in report.artifacts() {
            println!("{}", self.format_artifact(artifact));
        }
        if !self.is_json() {
            println!(
                "Built 2 artifacts ({} bytes) in {:.2}s",
                report.written_bytes(),
                report.duration.as_secs_f64()
            );
        }
    }

    /// Print a failure to stderr
    pub fn error(&self, err: &BuildError) {
        eprintln!("{}", self.format_error(err));
    }
}

/// Sanitize error messages by collapsing whitespace
pub fn sanitize_error(msg: &str) -> String {
    msg.split_whitespace().collect::<Vec<&str>>().join(" ")
}
