// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Name the host uses to reach the accessor
pub const CHANNEL_NAME: &str = "disk_space";

pub const GET_FREE_DISK_SPACE: &str = "getFreeDiskSpace";
pub const GET_TOTAL_DISK_SPACE: &str = "getTotalDiskSpace";
pub const GET_USED_DISK_SPACE: &str = "getUsedDiskSpace";
pub const GET_PLATFORM_VERSION: &str = "getPlatformVersion";

/// A request arriving from the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: serde_json::Value::Null,
        }
    }
}

/// The single value answered for a `MethodCall`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelValue {
    Double(f64),
    String(String),
}

impl ChannelValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            Self::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Double(_) => None,
            Self::String(value) => Some(value),
        }
    }
}
