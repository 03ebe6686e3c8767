// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

/// Host-side errors
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid config {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error("Handler already registered for method: {0}")]
    DuplicateHandler(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
