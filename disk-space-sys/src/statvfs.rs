// SPDX-License-Identifier: GPL-3.0-only

use std::path::Path;

#[cfg(unix)]
use nix::sys::statvfs::{Statvfs, statvfs};

use crate::error::{ProbeError, Result};
use crate::metadata::{FileSystemAttributes, FilesystemMetadata};

/// Filesystem metadata read with `statvfs(3)`
///
/// - size: `f_blocks * f_frsize`
/// - raw free size: `f_bfree * f_frsize` (includes blocks reserved for root)
/// - important-usage capacity: `f_bavail * f_frsize` (blocks the caller can allocate)
///
/// Off Unix every query reports `ProbeError::Unsupported`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatvfsMetadata;

impl StatvfsMetadata {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl StatvfsMetadata {
    fn stat(path: &Path) -> Result<Statvfs> {
        statvfs(path).map_err(|errno| ProbeError::from_errno(errno, path))
    }
}

#[cfg(unix)]
impl FilesystemMetadata for StatvfsMetadata {
    fn attributes_of_file_system(&self, path: &Path) -> Result<FileSystemAttributes> {
        let stat = Self::stat(path)?;
        let unit = fragment_size(&stat);

        Ok(FileSystemAttributes {
            system_size: Some(blocks_to_bytes(u64::from(stat.blocks()), unit)),
            system_free_size: Some(blocks_to_bytes(u64::from(stat.blocks_free()), unit)),
        })
    }

    fn supports_important_usage(&self) -> bool {
        true
    }

    fn available_capacity_for_important_usage(&self, path: &Path) -> Result<Option<i64>> {
        let stat = Self::stat(path)?;
        let unit = fragment_size(&stat);

        Ok(Some(blocks_to_bytes(
            u64::from(stat.blocks_available()),
            unit,
        )))
    }
}

#[cfg(not(unix))]
impl FilesystemMetadata for StatvfsMetadata {
    fn attributes_of_file_system(&self, path: &Path) -> Result<FileSystemAttributes> {
        Err(ProbeError::Unsupported(format!(
            "statvfs on {}",
            path.display()
        )))
    }

    fn supports_important_usage(&self) -> bool {
        false
    }

    fn available_capacity_for_important_usage(&self, path: &Path) -> Result<Option<i64>> {
        Err(ProbeError::Unsupported(format!(
            "statvfs on {}",
            path.display()
        )))
    }
}

#[cfg(unix)]
fn fragment_size(stat: &Statvfs) -> u64 {
    let fragment = u64::from(stat.fragment_size());
    if fragment > 0 {
        fragment
    } else {
        u64::from(stat.block_size())
    }
}

#[cfg_attr(not(unix), allow(dead_code))]
fn blocks_to_bytes(blocks: u64, unit: u64) -> i64 {
    i64::try_from(blocks.saturating_mul(unit)).unwrap_or(i64::MAX)
}
