// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

use crate::error::{ProbeError, Result};
use crate::metadata::{FileSystemAttributes, FilesystemMetadata};

/// Filesystem metadata answered from fixed values
///
/// Used to simulate a filesystem of known size, a platform without the
/// important-usage metric, or paths that cannot be read.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    attributes: FileSystemAttributes,
    important_usage_supported: bool,
    important_usage: Option<i64>,
    denied: Vec<PathBuf>,
}

impl StaticMetadata {
    /// A filesystem of `total_bytes` with `free_bytes` free, reported by both free-space metrics.
    pub fn new(total_bytes: i64, free_bytes: i64) -> Self {
        Self {
            attributes: FileSystemAttributes {
                system_size: Some(total_bytes),
                system_free_size: Some(free_bytes),
            },
            important_usage_supported: true,
            important_usage: Some(free_bytes),
            denied: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: FileSystemAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_important_usage(mut self, capacity: Option<i64>) -> Self {
        self.important_usage_supported = true;
        self.important_usage = capacity;
        self
    }

    /// Report the important-usage metric as unavailable on this platform.
    pub fn without_important_usage(mut self) -> Self {
        self.important_usage_supported = false;
        self.important_usage = None;
        self
    }

    /// Fail every query for `path` and anything below it with permission denied.
    pub fn deny(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied.push(path.into());
        self
    }

    fn check_access(&self, path: &Path) -> Result<()> {
        if self.denied.iter().any(|denied| path.starts_with(denied)) {
            return Err(ProbeError::PermissionDenied(path.display().to_string()));
        }
        Ok(())
    }
}

impl FilesystemMetadata for StaticMetadata {
    fn attributes_of_file_system(&self, path: &Path) -> Result<FileSystemAttributes> {
        self.check_access(path)?;
        Ok(self.attributes)
    }

    fn supports_important_usage(&self) -> bool {
        self.important_usage_supported
    }

    fn available_capacity_for_important_usage(&self, path: &Path) -> Result<Option<i64>> {
        if !self.important_usage_supported {
            return Err(ProbeError::Unsupported(
                "available capacity for important usage".to_string(),
            ));
        }
        self.check_access(path)?;
        Ok(self.important_usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_paths_cover_descendants() {
        let metadata = StaticMetadata::new(100, 40).deny("/locked");

        assert!(
            metadata
                .attributes_of_file_system(Path::new("/locked/inner"))
                .is_err()
        );
        assert_eq!(
            metadata
                .attributes_of_file_system(Path::new("/open"))
                .expect("open path")
                .system_size,
            Some(100)
        );
    }

    #[test]
    fn unsupported_important_usage_errors() {
        let metadata = StaticMetadata::new(100, 40).without_important_usage();
        assert!(!metadata.supports_important_usage());
        assert!(matches!(
            metadata.available_capacity_for_important_usage(Path::new("/")),
            Err(ProbeError::Unsupported(_))
        ));
    }
}
