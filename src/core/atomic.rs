/*!
 * Whole-file replacement of artifacts
 */

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::{BuildError, Result};

/// Write `data` to `dest` via a temporary file in the same directory
///
/// `dest` either keeps its previous content or holds all of `data`; a failed
/// write never leaves a truncated file behind. The temporary file is removed
/// on every error path.
///
/// A replaced file keeps its permissions; a new file gets the same mode as
/// one made by `File::create`.
pub fn write_atomic(dest: &Path, data: &[u8]) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = temp_file_in(dir)?;
    if let Ok(meta) = fs::metadata(dest) {
        if meta.is_file() {
            temp.as_file().set_permissions(meta.permissions())?;
        }
    }
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    temp.persist(dest).map_err(|e| BuildError::Io(e.error))?;
    Ok(())
}

/// Temporary file created with the default file mode (0666 less umask)
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
