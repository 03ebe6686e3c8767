// SPDX-License-Identifier: GPL-3.0-only

#[cfg(unix)]
use std::path::Path;

#[cfg(unix)]
use nix::errno::Errno;
use thiserror::Error;

/// Why filesystem metadata could not be read
///
/// Every variant means the same thing to callers: the metadata is unavailable.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("metadata unavailable: permission denied: {0}")]
    PermissionDenied(String),

    #[error("metadata unavailable: path not found: {0}")]
    NotFound(String),

    #[error("metadata unavailable: invalid path: {0}")]
    InvalidPath(String),

    #[error("metadata unavailable: missing attribute {0}")]
    MissingAttribute(&'static str),

    #[error("metadata unavailable: not supported: {0}")]
    Unsupported(String),

    #[error("metadata unavailable: I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(unix)]
impl ProbeError {
    pub(crate) fn from_errno(errno: Errno, path: &Path) -> Self {
        let path = path.display().to_string();
        match errno {
            Errno::EACCES | Errno::EPERM => Self::PermissionDenied(path),
            Errno::ENOENT | Errno::ENOTDIR => Self::NotFound(path),
            Errno::EINVAL | Errno::ENAMETOOLONG | Errno::ELOOP => Self::InvalidPath(path),
            Errno::ENOSYS => Self::Unsupported(format!("statvfs on {path}")),
            other => Self::Io(std::io::Error::from(other)),
        }
    }
}

/// Result type alias for metadata probes
pub type Result<T> = std::result::Result<T, ProbeError>;
