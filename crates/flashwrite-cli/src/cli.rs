//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashwrite")]
#[command(author, version)]
#[command(about = "Copies an image onto a file, block device, or UBI volume, \
skipping blocks whose content already matches")]
pub struct Cli {
    /// Input image path, or `-` to read from standard input
    #[arg(short, long, value_name = "INPUT_PATH")]
    pub input: PathBuf,

    /// Output path: regular file, block device, or UBI volume node
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    pub output: PathBuf,

    /// Declared input size in bytes (0 = copy until the source is
    /// exhausted); required when flashing a UBI volume from stdin
    #[arg(short = 's', long, default_value = "0", value_parser = parse_byte_size)]
    pub input_size: u64,

    /// Bytes written between durability flushes (0 disables periodic fsync)
    #[arg(short = 'f', long, default_value = "1M", value_parser = parse_byte_size)]
    pub fsync_interval: u64,

    /// Copy chunk size in bytes
    #[arg(long, default_value = "1M", value_parser = parse_block_size)]
    pub block_size: u64,

    /// Read each destination block first and skip the write when the
    /// content already matches (saves flash erase cycles)
    #[arg(short = 'w', long)]
    pub write_optimized: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}

/// Parse a byte size that must be non-zero (the copy chunk granularity)
fn parse_block_size(s: &str) -> Result<u64, String> {
    match parse_byte_size(s)? {
        0 => Err("block size must be non-zero".to_string()),
        n => Ok(n),
    }
}
