//! Copy wiring: opens the devices, prepares the target, runs the engine,
//! and reports statistics.

use crate::cli::Cli;
use crate::error::convert_flash_error;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use flashwrite_core::BlockCopier;
use flashwrite_core::device;
use flashwrite_core::io::FileSource;
use flashwrite_core::io::FileTarget;
use flashwrite_core::io::LimitedFlushingSink;
use flashwrite_core::io::Source;
use flashwrite_core::io::StdinSource;
use flashwrite_core::rawio;
use std::fs::File;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let from_stdin = args.input.as_os_str() == "-";

    let src_file: Option<File> = if from_stdin {
        None
    } else {
        Some(
            rawio::open_read(&args.input)
                .with_context(|| format!("failed to open input '{}'", args.input.display()))?,
        )
    };

    let dst_file = rawio::open_rw(&args.output)
        .with_context(|| format!("failed to open output '{}'", args.output.display()))?;

    let mut optimized = args.write_optimized;
    let volume_size = args.input_size;

    // UBI volumes must be told the total update size before the first
    // write, and their character-device semantics rule out meaningful
    // compare read-backs.
    let is_ubi = device::is_ubi_volume(&args.output)
        .with_context(|| format!("failed to classify output '{}'", args.output.display()))?;
    if is_ubi {
        let total = if volume_size != 0 {
            volume_size
        } else if let Some(src) = &src_file {
            rawio::size(src)
                .with_context(|| format!("failed to size input '{}'", args.input.display()))?
        } else {
            bail!("--input-size is required when flashing a UBI volume from stdin");
        };

        device::provision_volume(&dst_file, total).with_context(|| {
            format!("failed to prepare UBI volume '{}'", args.output.display())
        })?;

        if optimized {
            formatter
                .format_warning("write-optimized mode is not supported on UBI volumes; disabled");
            optimized = false;
        }
    }

    let mut source: Box<dyn Source + '_> = match &src_file {
        Some(file) => Box::new(FileSource::new(file)),
        None => Box::new(StdinSource::new()),
    };

    let sink = LimitedFlushingSink::new(&dst_file, volume_size, args.fsync_interval);
    let mut target = FileTarget::new(&dst_file, sink);

    let block_size = usize::try_from(args.block_size).context("block size too large")?;
    let mut copier = BlockCopier::with_limits(block_size, volume_size);
    let result = copier.copy(source.as_mut(), &mut target, optimized);

    match result {
        Ok(()) => {
            // One trailing fsync so the tail below the flush cadence is
            // durable before success is reported.
            rawio::flush(&dst_file)
                .with_context(|| format!("failed to flush output '{}'", args.output.display()))?;
            formatter.format_copy_result(copier.stats(), optimized)?;
            Ok(())
        }
        Err(err) => {
            formatter.format_copy_failure(copier.stats(), optimized, &err.to_string())?;
            Err(convert_flash_error(err, &args.input, &args.output))
        }
    }
}
