/*!
 * Tool Probe - executable discovery on the tool search path
 *
 * A probe never fails: anything that prevents a lookup (unset PATH,
 * unreadable entries) means the tool is treated as absent.
 */

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::trace;

/// Executable lookup utility
pub struct Probe;

impl Probe {
    /// Find `name` on the process `PATH`
    pub fn find_executable(name: &str) -> Option<PathBuf> {
        let path = env::var_os("PATH");
        Self::find_in(name, path.as_deref())
    }

    /// Find `name` on an explicit search path value
    ///
    /// A name that already contains a path separator is checked as-is.
    pub fn find_in(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        let as_path = Path::new(name);
        if as_path.components().count() > 1 {
            return candidates(as_path).into_iter().find(|c| is_executable(c));
        }

        let search_path = search_path?;
        for dir in env::split_paths(search_path) {
            if dir.as_os_str().is_empty() {
                continue;
            }
            for candidate in candidates(&dir.join(name)) {
                trace!("probing {}", candidate.display());
                if is_executable(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

/// Paths to try for one search entry; Windows adds each PATHEXT suffix
#[cfg(windows)]
fn candidates(base: &Path) -> Vec<PathBuf> {
    let mut out = vec![base.to_path_buf()];
    if base.extension().is_some() {
        return out;
    }
    let exts = env::var_os("PATHEXT")
        .unwrap_or_else(|| std::ffi::OsString::from(".COM;.EXE;.BAT;.CMD"));
    for ext in exts.to_string_lossy().split(';').filter(|e| !e.is_empty()) {
        let mut name = base.as_os_str().to_os_string();
        name.push(ext);
        out.push(PathBuf::from(name));
    }
    out
}

#[cfg(not(windows))]
fn candidates(base: &Path) -> Vec<PathBuf> {
    vec![base.to_path_buf()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
