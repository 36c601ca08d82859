//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use flashwrite_core::CopyStats;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

#[derive(Serialize)]
struct CopyOutput {
    blocks_written: u64,
    blocks_omitted: u64,
    bytes_written: u64,
    bytes_total: u64,
    optimized: bool,
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    fn copy_data(stats: &CopyStats, optimized: bool) -> CopyOutput {
        CopyOutput {
            blocks_written: stats.blocks_written,
            blocks_omitted: stats.blocks_omitted,
            bytes_written: stats.bytes_written,
            bytes_total: stats.bytes_total,
            optimized,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_copy_result(&self, stats: &CopyStats, optimized: bool) -> Result<()> {
        let output = JsonOutput::success("copy", Self::copy_data(stats, optimized));
        Self::output(&output)
    }

    fn format_copy_failure(&self, stats: &CopyStats, optimized: bool, error: &str) -> Result<()> {
        let output = JsonOutput::error("copy", Self::copy_data(stats, optimized), error);
        Self::output(&output)
    }

    fn format_warning(&self, _message: &str) {
        // Warnings are folded into the final JSON document by callers that
        // need them; free-form lines would corrupt the output stream.
    }
}
