// SPDX-License-Identifier: GPL-3.0-only

//! Disk space host - answers capacity requests over a method channel
//!
//! The host builds a `DiskSpaceQuery` from its configuration, registers the
//! `DiskSpacePlugin` handlers on an explicit `MethodChannel`, and dispatches
//! requests to it one at a time.

pub mod channel;
pub mod config;
pub mod error;
pub mod logging;
pub mod plugin;
pub mod report;
pub mod transport;

pub use channel::{MethodChannel, MethodHandler};
pub use config::{CONFIG_ENV, Config, LoggingLevel};
pub use error::{Result, ServiceError};
pub use plugin::DiskSpacePlugin;
pub use report::CapacityReport;
pub use transport::serve;
