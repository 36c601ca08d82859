//! Output formatter trait for CLI results.

use anyhow::Result;
use flashwrite_core::CopyStats;
use serde::Serialize;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the statistics of a completed copy
    fn format_copy_result(&self, stats: &CopyStats, optimized: bool) -> Result<()>;

    /// Format the partial statistics of a failed copy
    fn format_copy_failure(&self, stats: &CopyStats, optimized: bool, error: &str) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, data: T, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: Some(data),
            error: Some(error.into()),
        }
    }
}
