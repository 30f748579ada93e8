//! Unmodified read of a source asset

use std::io;
use std::path::Path;

use tracing::debug;

use super::ReadStrategy;
use crate::error::{BuildError, Result};

/// Returns a source file's bytes as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Passthrough {
    pub fn new() -> Self {
        Self
    }
}

impl ReadStrategy for Passthrough {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                BuildError::SourceNotFound(path.to_path_buf())
            } else {
                BuildError::Io(e)
            }
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }

    fn name(&self) -> &'static str {
        "passthrough"
    }
}
