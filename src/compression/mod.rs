/*!
 * gzip support for build-data
 */

use std::io::{Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::{Compression, GzBuilder};
use tracing::debug;

use crate::core::atomic::write_atomic;
use crate::error::{BuildError, Result};

/// Outcome of writing one gzip artifact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GzipStats {
    /// Uncompressed length
    pub input_bytes: u64,
    /// Length of the file on disk
    pub output_bytes: u64,
    /// output / input in percent; 100.0 for empty input
    pub ratio: f64,
}

/// gzip-encode `data` in memory
///
/// The header carries `member_name` and a zero modification time so the
/// stream depends on nothing but its inputs.
pub fn gzip_bytes(data: &[u8], member_name: Option<&str>, level: u32) -> Result<Vec<u8>> {
    let mut builder = GzBuilder::new().mtime(0);
    if let Some(name) = member_name {
        builder = builder.filename(name);
    }

    let mut encoder = builder.write(Vec::new(), Compression::new(level));
    encoder
        .write_all(data)
        .map_err(|e| BuildError::Compression(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| BuildError::Compression(e.to_string()))
}

/// Decode a complete gzip stream
pub fn gunzip_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| BuildError::Compression(format!("invalid gzip stream: {}", e)))?;
    Ok(out)
}

/// Write `data` gzip-compressed to `dest`
///
/// The member name recorded in the header is `dest`'s file name with the
/// `.gz` suffix removed.
pub fn write_gzip(dest: &Path, data: &[u8], level: u32) -> Result<GzipStats> {
    let member_name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(".gz"))
        .filter(|n| !n.is_empty());

    let compressed = gzip_bytes(data, member_name, level)?;
    write_atomic(dest, &compressed)?;

    let input_bytes = data.len() as u64;
    let output_bytes = compressed.len() as u64;
    let ratio = if input_bytes == 0 {
        100.0
    } else {
        (output_bytes as f64 / input_bytes as f64) * 100.0
    };

    debug!(
        "Compression: {} bytes -> {} bytes ({:.1}%)",
        input_bytes, output_bytes, ratio
    );

    Ok(GzipStats {
        input_bytes,
        output_bytes,
        ratio,
    })
}

/// Decompress `path` and compare it with `expected`
pub fn verify_gzip(path: &Path, expected: &[u8]) -> Result<()> {
    let on_disk = std::fs::read(path)?;
    let decoded = gunzip_bytes(&on_disk)?;

    if decoded != expected {
        return Err(BuildError::Compression(format!(
            "Verification failed for {}: expected {} bytes, decoded {} bytes",
            path.display(),
            expected.len(),
            decoded.len()
        )));
    }

    debug!("Verified {} ({} bytes)", path.display(), decoded.len());
    Ok(())
}
