//! Mock strategy for testing
//!
//! Returns a transformed copy of the source and records every path it was
//! asked to read, so tests can check that one strategy served every artifact.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::ReadStrategy;
use crate::error::{BuildError, Result};

#[derive(Debug, Clone, Default)]
pub struct MockStrategy {
    prefix: Vec<u8>,
    fail_on: Option<PathBuf>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockStrategy {
    /// Output is `prefix` followed by the source bytes
    pub fn with_prefix(prefix: &[u8]) -> Self {
        Self {
            prefix: prefix.to_vec(),
            ..Default::default()
        }
    }

    /// Fail like a minifier exiting non-zero when asked for `path`
    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_on = Some(path.into());
        self
    }

    /// Paths read so far, in order
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl ReadStrategy for MockStrategy {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(path.to_path_buf());

        if self.fail_on.as_deref() == Some(path) {
            return Err(BuildError::MinifierFailed {
                program: PathBuf::from("mock"),
                path: path.to_path_buf(),
                code: Some(1),
                stderr: String::new(),
            });
        }

        let mut out = self.prefix.clone();
        let source =
            std::fs::read(path).map_err(|_| BuildError::SourceNotFound(path.to_path_buf()))?;
        out.extend(source);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
