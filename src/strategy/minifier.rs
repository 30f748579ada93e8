//! External minifier invoked as a subprocess
//!
//! The command line is passed as an argument vector; no shell is involved.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::debug;

use super::ReadStrategy;
use crate::error::{BuildError, Result};

/// Runs `<program> <args...> <source>` and captures standard output
#[derive(Debug, Clone)]
pub struct ExternalMinifier {
    program: PathBuf,
    args: Vec<String>,
}

impl ExternalMinifier {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn command(&self, source: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl ReadStrategy for ExternalMinifier {
    /// Blocks until the minifier exits; there is no timeout
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let start = Instant::now();
        let output = self
            .command(path)
            .output()
            .map_err(|source| BuildError::MinifierSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BuildError::MinifierFailed {
                program: self.program.clone(),
                path: path.to_path_buf(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(
            "Minified {} to {} bytes in {:?}",
            path.display(),
            output.stdout.len(),
            start.elapsed()
        );
        Ok(output.stdout)
    }

    fn name(&self) -> &'static str {
        "minify"
    }
}
