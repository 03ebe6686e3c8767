// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Write as _;
use std::path::PathBuf;

use disk_space_sys::DiskSpaceQuery;
use disk_space_types::bytes_to_pretty;
use serde::Serialize;

/// One capacity reading plus where it was taken, for `disk-space report`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityReport {
    pub home_dir: PathBuf,
    pub probes: Vec<&'static str>,
    pub total_bytes: i64,
    pub free_bytes: i64,
    pub used_bytes: i64,
    pub total_mb: f64,
    pub free_mb: f64,
    pub used_mb: f64,
}

impl CapacityReport {
    pub fn from_query(query: &DiskSpaceQuery) -> Self {
        let reading = query.reading();
        Self {
            home_dir: query.locations().home_dir.clone(),
            probes: query.probe_names(),
            total_bytes: reading.total_bytes,
            free_bytes: reading.free_bytes,
            used_bytes: reading.used_bytes(),
            total_mb: reading.total_mb(),
            free_mb: reading.free_mb(),
            used_mb: reading.used_mb(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Filesystem of {}", self.home_dir.display());
        let _ = writeln!(out, "Free-space probes: {}", self.probes.join(" -> "));
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<6} {:>14} {}", "", "MB", "SIZE");
        for (label, mb, bytes) in [
            ("total", self.total_mb, self.total_bytes),
            ("free", self.free_mb, self.free_bytes),
            ("used", self.used_mb, self.used_bytes),
        ] {
            let _ = writeln!(
                out,
                "{:<6} {:>14.0} {}",
                label,
                mb,
                bytes_to_pretty(bytes, true)
            );
        }
        out
    }
}
