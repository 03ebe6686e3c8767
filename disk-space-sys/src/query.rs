// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use disk_space_types::{CapacityReading, bytes_to_mb};

use crate::metadata::{DataLocations, FilesystemMetadata};
use crate::probe::{FreeSpaceProbe, default_probes, first_free_space};
use crate::statvfs::StatvfsMetadata;

/// Capacity of the filesystem hosting the application's data directory
///
/// Every operation is best-effort: a quantity that cannot be read is `0`.
/// The `try_*` variants report `None` instead so callers can tell an unknown
/// value from a genuine zero.
pub struct DiskSpaceQuery {
    metadata: Arc<dyn FilesystemMetadata>,
    locations: DataLocations,
    probes: Vec<Box<dyn FreeSpaceProbe>>,
}

impl DiskSpaceQuery {
    pub fn new(metadata: Arc<dyn FilesystemMetadata>, locations: DataLocations) -> Self {
        Self {
            metadata,
            locations,
            probes: default_probes(),
        }
    }

    /// `statvfs` metadata for the current user's locations.
    pub fn system() -> Self {
        Self::new(Arc::new(StatvfsMetadata::new()), DataLocations::detect())
    }

    /// Replace the free-space probes, highest priority first.
    pub fn with_probes(mut self, probes: Vec<Box<dyn FreeSpaceProbe>>) -> Self {
        self.probes = probes;
        self
    }

    pub fn locations(&self) -> &DataLocations {
        &self.locations
    }

    pub fn probe_names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|probe| probe.name()).collect()
    }

    pub fn try_total_capacity_bytes(&self) -> Option<i64> {
        let path = &self.locations.home_dir;
        match self.metadata.attributes_of_file_system(path) {
            Ok(attributes) => {
                if attributes.system_size.is_none() {
                    tracing::debug!("No system size reported for {}", path.display());
                }
                attributes.system_size
            }
            Err(e) => {
                tracing::debug!("Total capacity unavailable for {}: {e}", path.display());
                None
            }
        }
    }

    pub fn try_free_capacity_bytes(&self) -> Option<i64> {
        let free = first_free_space(&self.probes, self.metadata.as_ref(), &self.locations);
        if free.is_none() {
            tracing::warn!(
                "No free-space probe produced a value (tried: {})",
                self.probe_names().join(", ")
            );
        }
        free
    }

    pub fn total_capacity_bytes(&self) -> i64 {
        self.try_total_capacity_bytes().unwrap_or(0)
    }

    pub fn free_capacity_bytes(&self) -> i64 {
        self.try_free_capacity_bytes().unwrap_or(0)
    }

    pub fn used_capacity_bytes(&self) -> i64 {
        self.total_capacity_bytes() - self.free_capacity_bytes()
    }

    pub fn total_capacity_mb(&self) -> f64 {
        bytes_to_mb(self.total_capacity_bytes())
    }

    pub fn free_capacity_mb(&self) -> f64 {
        bytes_to_mb(self.free_capacity_bytes())
    }

    pub fn used_capacity_mb(&self) -> f64 {
        bytes_to_mb(self.used_capacity_bytes())
    }

    /// Total and free capacity read together.
    pub fn reading(&self) -> CapacityReading {
        CapacityReading::new(self.total_capacity_bytes(), self.free_capacity_bytes())
    }
}

impl std::fmt::Debug for DiskSpaceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskSpaceQuery")
            .field("locations", &self.locations)
            .field("probes", &self.probe_names())
            .finish()
    }
}
