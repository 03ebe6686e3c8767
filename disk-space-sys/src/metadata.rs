// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Attributes of the filesystem that contains a path
///
/// A `None` field is an attribute the source did not report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSystemAttributes {
    /// Size of the filesystem in bytes
    pub system_size: Option<i64>,

    /// Raw free space of the filesystem in bytes
    pub system_free_size: Option<i64>,
}

/// Source of filesystem metadata
pub trait FilesystemMetadata: Send + Sync {
    /// Query the attribute dictionary of the filesystem containing `path`.
    fn attributes_of_file_system(&self, path: &Path) -> Result<FileSystemAttributes>;

    /// Whether `available_capacity_for_important_usage` can run on this platform.
    fn supports_important_usage(&self) -> bool;

    /// Capacity available for important resources on the volume containing `path`,
    /// counting space the system can reclaim for them.
    ///
    /// `Ok(None)` means the query ran but reported no value.
    fn available_capacity_for_important_usage(&self, path: &Path) -> Result<Option<i64>>;
}

/// Platform user directories that locations are derived from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirs {
    pub home: Option<PathBuf>,

    /// The user's documents folder, honouring renamed or localized folders
    pub documents: Option<PathBuf>,
}

impl UserDirs {
    /// Look up the current user's directories (`user-dirs.dirs` on Linux).
    pub fn detect() -> Self {
        Self {
            home: dirs::home_dir(),
            documents: dirs::document_dir(),
        }
    }
}

/// Directories whose filesystems are queried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLocations {
    /// The application's home/data directory
    pub home_dir: PathBuf,

    /// The user's document-storage search locations, in priority order
    pub document_dirs: Vec<PathBuf>,
}

impl DataLocations {
    pub fn new(home_dir: impl Into<PathBuf>, document_dirs: Vec<PathBuf>) -> Self {
        Self {
            home_dir: home_dir.into(),
            document_dirs,
        }
    }

    /// Locations of the current user.
    pub fn detect() -> Self {
        Self::from_user_dirs(UserDirs::detect())
    }

    /// Home falls back to `/`; documents are searched in the platform
    /// documents folder first, then `<home>/Documents`.
    pub fn from_user_dirs(user_dirs: UserDirs) -> Self {
        let home_dir = user_dirs
            .home
            .filter(|home| !home.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from("/"));

        let mut document_dirs = Vec::with_capacity(2);
        if let Some(dir) = user_dirs
            .documents
            .filter(|dir| !dir.as_os_str().is_empty())
        {
            document_dirs.push(dir);
        }

        let home_documents = home_dir.join("Documents");
        if !document_dirs.contains(&home_documents) {
            document_dirs.push(home_documents);
        }

        Self {
            home_dir,
            document_dirs,
        }
    }

    /// Put `dir` at the front of the document search locations.
    pub fn prefer_document_dir(&mut self, dir: &Path) {
        self.document_dirs.retain(|existing| existing != dir);
        self.document_dirs.insert(0, dir.to_path_buf());
    }

    pub fn first_document_dir(&self) -> Option<&Path> {
        self.document_dirs.first().map(PathBuf::as_path)
    }
}
