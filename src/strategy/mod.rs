//! Read strategies for source assets
//!
//! A strategy turns a source path into the bytes that end up in an artifact:
//! - `Passthrough`: the file's bytes, unmodified
//! - `ExternalMinifier`: standard output of an external minifier run on the file
//! - `MockStrategy`: canned output with call recording (tests only)
//!
//! The strategy is resolved once per run and shared by every artifact.

mod minifier;
mod passthrough;

pub use minifier::ExternalMinifier;
pub use passthrough::Passthrough;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::MockStrategy;

use std::path::Path;

use tracing::{debug, info};

use crate::config::MinifierConfig;
use crate::core::probe::Probe;
use crate::error::Result;

/// Produces the content of one artifact from its source path
pub trait ReadStrategy {
    /// Read `path` and return the bytes to write
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}

/// Pick the strategy for this run by probing the process `PATH`
pub fn resolve_strategy(config: &MinifierConfig) -> Box<dyn ReadStrategy> {
    resolve_with(config, Probe::find_executable)
}

/// Pick the strategy using a caller-supplied lookup
///
/// The tool is not test-run here: if it is found but later fails, the
/// failure aborts the run instead of falling back to passthrough.
pub fn resolve_with<F>(config: &MinifierConfig, lookup: F) -> Box<dyn ReadStrategy>
where
    F: FnOnce(&str) -> Option<std::path::PathBuf>,
{
    if !config.enabled {
        info!("Minification disabled, copying sources unmodified");
        return Box::new(Passthrough::new());
    }

    match lookup(&config.program) {
        Some(program) => {
            info!(
                "Minifying with {} {}",
                program.display(),
                config.args.join(" ")
            );
            Box::new(ExternalMinifier::new(program, config.args.clone()))
        }
        None => {
            debug!("{} not found on PATH", config.program);
            info!("No minifier available, copying sources unmodified");
            Box::new(Passthrough::new())
        }
    }
}
