// SPDX-License-Identifier: GPL-3.0-only

//! Filesystem capacity probing for the disk space accessor
//!
//! This crate reads filesystem metadata and turns it into capacity readings:
//! - `FilesystemMetadata` abstracts the attribute source (`statvfs` or fixed values)
//! - `FreeSpaceProbe` strategies are tried in priority order for free space
//! - `DiskSpaceQuery` ties both together and never fails its caller
//!
//! Every query is a read of OS-maintained metadata; nothing is cached.

pub mod error;
pub mod fixed;
pub mod metadata;
pub mod platform;
pub mod probe;
pub mod query;
pub mod statvfs;

pub use error::{ProbeError, Result};
pub use fixed::StaticMetadata;
pub use metadata::{DataLocations, FileSystemAttributes, FilesystemMetadata, UserDirs};
pub use platform::platform_version;
pub use probe::{
    FreeSpaceProbe, ImportantUsageProbe, LegacyFreeSizeProbe, default_probes, first_free_space,
    legacy_probes,
};
pub use query::DiskSpaceQuery;
pub use statvfs::StatvfsMetadata;
