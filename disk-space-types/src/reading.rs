// SPDX-License-Identifier: GPL-3.0-only

//! Capacity readings and unit conversion

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// Bytes in one megabyte as reported over the channel (1 MiB)
pub const BYTES_PER_MB: i64 = 1024 * 1024;

/// Total and free capacity of one filesystem, in bytes
///
/// A quantity that could not be determined is stored as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityReading {
    pub total_bytes: i64,
    pub free_bytes: i64,
}

impl CapacityReading {
    pub fn new(total_bytes: i64, free_bytes: i64) -> Self {
        Self {
            total_bytes,
            free_bytes,
        }
    }

    /// Used capacity, always `total_bytes - free_bytes`
    pub fn used_bytes(&self) -> i64 {
        self.total_bytes - self.free_bytes
    }

    pub fn total_mb(&self) -> f64 {
        bytes_to_mb(self.total_bytes)
    }

    pub fn free_mb(&self) -> f64 {
        bytes_to_mb(self.free_bytes)
    }

    pub fn used_mb(&self) -> f64 {
        bytes_to_mb(self.used_bytes())
    }
}

/// Convert bytes to whole megabytes, truncating the remainder
pub fn bytes_to_mb(bytes: i64) -> f64 {
    (bytes / BYTES_PER_MB) as f64
}

/// Convert bytes to human-readable format (e.g., "1.50 GB")
pub fn bytes_to_pretty(bytes: i64, add_bytes: bool) -> String {
    let mut steps = 0;
    let mut val: f64 = bytes as f64;

    while val.abs() > 1024. && steps <= 8 {
        val /= 1024.;
        steps += 1;
    }

    let unit = match steps {
        0 => "B",
        1 => "KB",
        2 => "MB",
        3 => "GB",
        4 => "TB",
        5 => "PB",
        6 => "EB",
        _ => "Not Supported",
    };

    if add_bytes {
        let bytes_str = bytes.to_formatted_string(&Locale::en);
        format!("{:.2} {} ({} bytes)", val, unit, bytes_str)
    } else {
        format!("{:.2} {}", val, unit)
    }
}
