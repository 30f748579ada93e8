/*!
 * Asset pipeline: one read strategy, two artifacts
 */

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::compression::{verify_gzip, write_gzip};
use crate::config::BuildConfig;
use crate::core::atomic::write_atomic;
use crate::error::{BuildError, Result};
use crate::strategy::ReadStrategy;

/// Which artifact a report describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Html,
    Css,
}

/// Result of producing one artifact
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Strategy that produced the content
    pub strategy: &'static str,
    /// Bytes returned by the strategy
    pub content_bytes: u64,
    /// Bytes on disk
    pub written_bytes: u64,
    /// Compressed size as a percentage of content size (CSS only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_ratio: Option<f64>,
    #[serde(serialize_with = "serialize_millis", rename = "duration_ms")]
    pub duration: Duration,
}

/// Result of a full run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub html: ArtifactReport,
    pub css: ArtifactReport,
    pub duration: Duration,
}

impl PipelineReport {
    pub fn artifacts(&self) -> [&ArtifactReport; 2] {
        [&self.html, &self.css]
    }

    /// Total bytes written across both artifacts
    pub fn written_bytes(&self) -> u64 {
        self.html.written_bytes + self.css.written_bytes
    }
}

fn serialize_millis<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Create `path` and any missing parents; an existing directory is fine
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| BuildError::OutputDir {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Output directory ready: {}", path.display());
    Ok(())
}

fn read_source(strategy: &dyn ReadStrategy, source: &Path) -> Result<Vec<u8>> {
    if !source.exists() {
        return Err(BuildError::SourceNotFound(source.to_path_buf()));
    }
    strategy.read(source)
}

/// Apply `strategy` to `source` and write the bytes verbatim to `dest`
pub fn produce_html_artifact(
    strategy: &dyn ReadStrategy,
    source: &Path,
    dest: &Path,
) -> Result<ArtifactReport> {
    let start = Instant::now();
    let content = read_source(strategy, source)?;
    write_atomic(dest, &content)?;

    let len = content.len() as u64;
    info!("Wrote {} ({} bytes)", dest.display(), len);

    Ok(ArtifactReport {
        kind: ArtifactKind::Html,
        source: source.to_path_buf(),
        destination: dest.to_path_buf(),
        strategy: strategy.name(),
        content_bytes: len,
        written_bytes: len,
        compression_ratio: None,
        duration: start.elapsed(),
    })
}

/// Apply `strategy` to `source`, gzip the bytes, and write them to `dest`
///
/// With `verify`, the written file is decompressed and compared against the
/// strategy output before the report is returned.
pub fn produce_css_artifact(
    strategy: &dyn ReadStrategy,
    source: &Path,
    dest: &Path,
    level: u32,
    verify: bool,
) -> Result<ArtifactReport> {
    let start = Instant::now();
    let content = read_source(strategy, source)?;
    let stats = write_gzip(dest, &content, level)?;

    if verify {
        verify_gzip(dest, &content)?;
    }

    info!(
        "Wrote {} ({} -> {} bytes, {:.1}%)",
        dest.display(),
        stats.input_bytes,
        stats.output_bytes,
        stats.ratio
    );

    Ok(ArtifactReport {
        kind: ArtifactKind::Css,
        source: source.to_path_buf(),
        destination: dest.to_path_buf(),
        strategy: strategy.name(),
        content_bytes: stats.input_bytes,
        written_bytes: stats.output_bytes,
        compression_ratio: Some(stats.ratio),
        duration: start.elapsed(),
    })
}

/// Ensure the output directory, then produce the HTML and CSS artifacts
///
/// Steps run in order and stop at the first failure. An HTML artifact
/// written before a CSS failure stays on disk.
pub fn run_pipeline(config: &BuildConfig, strategy: &dyn ReadStrategy) -> Result<PipelineReport> {
    let start = Instant::now();
    debug!("Using {} strategy", strategy.name());

    ensure_output_dir(&config.output_dir)?;

    let html = produce_html_artifact(strategy, &config.html_source, &config.html_destination())?;
    let css = produce_css_artifact(
        strategy,
        &config.css_source,
        &config.css_destination(),
        config.compression_level,
        config.verify,
    )?;

    Ok(PipelineReport {
        html,
        css,
        duration: start.elapsed(),
    })
}
