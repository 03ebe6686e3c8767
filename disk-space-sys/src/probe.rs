// SPDX-License-Identifier: GPL-3.0-only

//! Free-space probe strategies
//!
//! Different platforms expose different free-space figures. Each figure is a
//! `FreeSpaceProbe`; callers hold them in priority order and take the first
//! value produced. There is no retry: an unavailable or failing probe simply
//! hands over to the next one.

use crate::error::{ProbeError, Result};
use crate::metadata::{DataLocations, FilesystemMetadata};

pub trait FreeSpaceProbe: Send + Sync {
    /// Stable name used in logs
    fn name(&self) -> &'static str;

    /// Whether this probe can run against `metadata` at all.
    fn is_available(&self, metadata: &dyn FilesystemMetadata) -> bool;

    /// Run the probe. `Ok(None)` means it ran but produced no value.
    fn probe(
        &self,
        metadata: &dyn FilesystemMetadata,
        locations: &DataLocations,
    ) -> Result<Option<i64>>;
}

/// Volume capacity available for important usage, measured at the home directory
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportantUsageProbe;

impl FreeSpaceProbe for ImportantUsageProbe {
    fn name(&self) -> &'static str {
        "important-usage"
    }

    fn is_available(&self, metadata: &dyn FilesystemMetadata) -> bool {
        metadata.supports_important_usage()
    }

    fn probe(
        &self,
        metadata: &dyn FilesystemMetadata,
        locations: &DataLocations,
    ) -> Result<Option<i64>> {
        metadata.available_capacity_for_important_usage(&locations.home_dir)
    }
}

/// Raw free size of the filesystem holding the first document directory
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFreeSizeProbe;

impl FreeSpaceProbe for LegacyFreeSizeProbe {
    fn name(&self) -> &'static str {
        "legacy-free-size"
    }

    fn is_available(&self, _metadata: &dyn FilesystemMetadata) -> bool {
        true
    }

    fn probe(
        &self,
        metadata: &dyn FilesystemMetadata,
        locations: &DataLocations,
    ) -> Result<Option<i64>> {
        let path = locations
            .first_document_dir()
            .ok_or_else(|| ProbeError::NotFound("document search locations".to_string()))?;

        let attributes = metadata.attributes_of_file_system(path)?;
        attributes
            .system_free_size
            .map(Some)
            .ok_or(ProbeError::MissingAttribute("system_free_size"))
    }
}

/// Important-usage first, legacy free size second
pub fn default_probes() -> Vec<Box<dyn FreeSpaceProbe>> {
    vec![Box::new(ImportantUsageProbe), Box::new(LegacyFreeSizeProbe)]
}

/// Legacy free size only
pub fn legacy_probes() -> Vec<Box<dyn FreeSpaceProbe>> {
    vec![Box::new(LegacyFreeSizeProbe)]
}

/// Evaluate `probes` in order and return the first value any of them yields.
pub fn first_free_space(
    probes: &[Box<dyn FreeSpaceProbe>],
    metadata: &dyn FilesystemMetadata,
    locations: &DataLocations,
) -> Option<i64> {
    for probe in probes {
        if !probe.is_available(metadata) {
            tracing::debug!("Free-space probe {} unavailable, skipping", probe.name());
            continue;
        }

        match probe.probe(metadata, locations) {
            Ok(Some(bytes)) => {
                tracing::debug!("Free-space probe {} reported {} bytes", probe.name(), bytes);
                return Some(bytes);
            }
            Ok(None) => {
                tracing::debug!("Free-space probe {} reported no value", probe.name());
            }
            Err(e) => {
                tracing::debug!("Free-space probe {} failed: {e}", probe.name());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::fixed::StaticMetadata;
    use crate::metadata::FileSystemAttributes;

    fn locations() -> DataLocations {
        DataLocations::new("/home/ada", vec![PathBuf::from("/home/ada/Documents")])
    }

    #[test]
    fn important_usage_wins_when_available() {
        let metadata = StaticMetadata::new(1000, 300).with_important_usage(Some(450));
        let free = first_free_space(&default_probes(), &metadata, &locations());
        assert_eq!(free, Some(450));
    }

    #[test]
    fn unsupported_important_usage_falls_back_to_legacy() {
        let metadata = StaticMetadata::new(1000, 300).without_important_usage();
        let free = first_free_space(&default_probes(), &metadata, &locations());
        assert_eq!(free, Some(300));
    }

    #[test]
    fn important_usage_without_value_falls_back_to_legacy() {
        let metadata = StaticMetadata::new(1000, 300).with_important_usage(None);
        let free = first_free_space(&default_probes(), &metadata, &locations());
        assert_eq!(free, Some(300));
    }

    #[test]
    fn legacy_probe_reads_first_document_dir() {
        let metadata = StaticMetadata::new(1000, 300)
            .without_important_usage()
            .deny("/home/ada/Documents");
        let result = LegacyFreeSizeProbe.probe(&metadata, &locations());
        assert!(matches!(result, Err(ProbeError::PermissionDenied(_))));

        let mut reordered = locations();
        reordered.document_dirs.insert(0, PathBuf::from("/srv/docs"));
        let result = LegacyFreeSizeProbe
            .probe(&metadata, &reordered)
            .expect("first document dir is readable");
        assert_eq!(result, Some(300));
    }

    #[test]
    fn legacy_probe_requires_free_size_attribute() {
        let metadata = StaticMetadata::new(1000, 300).with_attributes(FileSystemAttributes {
            system_size: Some(1000),
            system_free_size: None,
        });
        let result = LegacyFreeSizeProbe.probe(&metadata, &locations());
        assert!(matches!(
            result,
            Err(ProbeError::MissingAttribute("system_free_size"))
        ));
    }

    #[test]
    fn no_probe_value_yields_none() {
        let metadata = StaticMetadata::new(1000, 300)
            .without_important_usage()
            .deny("/home");
        assert_eq!(
            first_free_space(&default_probes(), &metadata, &locations()),
            None
        );

        let empty = DataLocations::new("/home/ada", Vec::new());
        assert_eq!(
            first_free_space(&legacy_probes(), &StaticMetadata::new(1, 1), &empty),
            None
        );
    }
}
