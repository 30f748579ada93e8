/*!
 * build-data - web assets for the device data directory
 *
 * Turns `web/index.html` and `web/style.css` into `data/index.html` and
 * `data/style.css.gz`:
 * - Optional minification through an external tool (`npx minify`)
 * - Passthrough when no minifier is on PATH
 * - Deterministic gzip output for the stylesheet
 */

pub mod compression;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;
pub mod strategy;

// Re-export commonly used types
pub use config::{BuildConfig, LogLevel, MinifierConfig};
pub use crate::core::{run_pipeline, ArtifactReport, PipelineReport};
pub use error::{BuildError, Result};
pub use strategy::{resolve_strategy, ExternalMinifier, Passthrough, ReadStrategy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve the read strategy from `config` and run the pipeline
pub fn build(config: &BuildConfig) -> Result<PipelineReport> {
    config.validate()?;
    let strategy = resolve_strategy(&config.minifier);
    run_pipeline(config, strategy.as_ref())
}
