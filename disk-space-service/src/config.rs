// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use disk_space_sys::{
    DataLocations, DiskSpaceQuery, FilesystemMetadata, StatvfsMetadata, UserDirs, legacy_probes,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ServiceError};

/// Environment variable naming the config file when `--config` is absent
pub const CONFIG_ENV: &str = "DISK_SPACE_CONFIG";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Application home/data directory; the user's home when unset
    pub home_dir: Option<PathBuf>,

    /// Searched before the default document locations
    pub documents_dir: Option<PathBuf>,

    /// Try the important-usage metric before the legacy free size
    pub prefer_important_usage: bool,

    pub log_level: LoggingLevel,

    /// Also write logs to daily files named after this path
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_dir: None,
            documents_dir: None,
            prefer_important_usage: true,
            log_level: LoggingLevel::Info,
            log_file: None,
        }
    }
}

impl Config {
    /// Load from `explicit`, else from `$DISK_SPACE_CONFIG`, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_path(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => ServiceError::ConfigNotFound(path.display().to_string()),
            _ => ServiceError::InvalidConfig {
                path: path.display().to_string(),
                reason: error.to_string(),
            },
        })?;

        Self::from_toml_str(&raw, &path.display().to_string())
    }

    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|error| ServiceError::InvalidConfig {
            path: origin.to_string(),
            reason: error.to_string(),
        })
    }

    /// The current user's locations with the configured directories applied on top.
    pub fn data_locations(&self) -> DataLocations {
        self.data_locations_for(UserDirs::detect())
    }

    pub fn data_locations_for(&self, mut user_dirs: UserDirs) -> DataLocations {
        if let Some(home) = &self.home_dir {
            user_dirs.home = Some(home.clone());
        }

        let mut locations = DataLocations::from_user_dirs(user_dirs);
        if let Some(documents) = &self.documents_dir {
            locations.prefer_document_dir(documents);
        }

        locations
    }

    pub fn build_query(&self) -> DiskSpaceQuery {
        self.build_query_with(Arc::new(StatvfsMetadata::new()), UserDirs::detect())
    }

    pub fn build_query_with(
        &self,
        metadata: Arc<dyn FilesystemMetadata>,
        user_dirs: UserDirs,
    ) -> DiskSpaceQuery {
        let query = DiskSpaceQuery::new(metadata, self.data_locations_for(user_dirs));
        if self.prefer_important_usage {
            query
        } else {
            query.with_probes(legacy_probes())
        }
    }
}
