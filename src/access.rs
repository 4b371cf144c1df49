//! Permission checks run ahead of config file reads and writes.

use std::io;
use std::path::{Path, PathBuf};

/// Kind of access to check for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Exists,
    Read,
    Write,
}

/// Check that the current process has the given access to `path`.
///
/// Runs on the blocking pool so the calling task only yields.
pub async fn check_access(path: &Path, access: Access) -> io::Result<()> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || check_access_blocking(&path, access))
        .await
        .map_err(io::Error::other)?
}

/// Check that a file at `path` could be written, creating it if needed.
///
/// An existing file must be writable. A new file needs a writable parent
/// directory.
pub async fn check_writable(path: &Path) -> io::Result<()> {
    if tokio::fs::try_exists(path).await? {
        return check_access(path, Access::Write).await;
    }

    check_access(&parent_dir(path), Access::Write).await
}

/// Whether `path` exists, treating any lookup error as absent
pub async fn exists(path: &Path) -> bool {
    check_access(path, Access::Exists).await.is_ok()
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(unix)]
fn check_access_blocking(path: &Path, access: Access) -> io::Result<()> {
    use nix::unistd::AccessFlags;

    let flags = match access {
        Access::Exists => AccessFlags::F_OK,
        Access::Read => AccessFlags::R_OK,
        Access::Write => AccessFlags::W_OK,
    };

    nix::unistd::access(path, flags).map_err(io::Error::from)
}

#[cfg(not(unix))]
fn check_access_blocking(path: &Path, access: Access) -> io::Result<()> {
    let metadata = std::fs::metadata(path)?;

    if access == Access::Write && metadata.permissions().readonly() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{} is read-only", path.display()),
        ));
    }

    Ok(())
}
