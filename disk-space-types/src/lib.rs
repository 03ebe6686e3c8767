// SPDX-License-Identifier: GPL-3.0-only

//! Shared data types for the disk space accessor
//!
//! This crate holds the values that cross crate and process boundaries:
//!
//! - **disk-space-sys**: produces `CapacityReading` values from filesystem metadata
//! - **disk-space-service**: converts readings to megabytes and answers `MethodCall`s
//!   with `ChannelValue`s
//!
//! Nothing here touches the filesystem.

pub mod channel;
pub mod reading;

pub use channel::{
    CHANNEL_NAME, ChannelValue, GET_FREE_DISK_SPACE, GET_PLATFORM_VERSION, GET_TOTAL_DISK_SPACE,
    GET_USED_DISK_SPACE, MethodCall,
};
pub use reading::{BYTES_PER_MB, CapacityReading, bytes_to_mb, bytes_to_pretty};
