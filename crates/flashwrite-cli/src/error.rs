//! Error conversion utilities for CLI.
//!
//! Converts flashwrite-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use flashwrite_core::FlashError;
use std::path::Path;

/// Converts `FlashError` to a user-friendly anyhow error with context
pub fn convert_flash_error(err: FlashError, input: &Path, output: &Path) -> anyhow::Error {
    match err {
        FlashError::SourceTooShort { copied, expected } => {
            anyhow!(
                "Input '{}' ended after {} bytes, before the declared size of {} bytes\n\
                 HINT: Check --input-size against the actual image length.",
                input.display(),
                copied,
                expected
            )
        }
        FlashError::SourceTooLong { limit } => {
            anyhow!(
                "Input '{}' still has data after the declared size of {} bytes was reached\n\
                 HINT: Check --input-size against the actual image length.",
                input.display(),
                limit
            )
        }
        FlashError::CapacityExceeded {
            position,
            requested,
            limit,
        } => {
            anyhow!(
                "Writing {} bytes at offset {} would overrun '{}' (limit {} bytes)\n\
                 HINT: The target volume is smaller than the image.",
                requested,
                position,
                output.display(),
                limit
            )
        }
        err @ (FlashError::ShortWrite { .. } | FlashError::ZeroWrite) => {
            anyhow::Error::from(err).context(format!(
                "Target '{}' accepted less data than requested; the media may be full or worn out",
                output.display()
            ))
        }
        FlashError::Io(io_err) => {
            anyhow!(
                "I/O error while copying '{}' to '{}': {}",
                input.display(),
                output.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err).context(format!(
            "Error copying '{}' to '{}'",
            input.display(),
            output.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_convert_too_short_error() {
        let err = FlashError::SourceTooShort {
            copied: 6,
            expected: 12,
        };
        let converted = convert_flash_error(err, Path::new("update.img"), Path::new("/dev/sda1"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("update.img"));
        assert!(msg.contains("HINT"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn test_convert_capacity_error_names_output() {
        let err = FlashError::CapacityExceeded {
            position: 8,
            requested: 6,
            limit: 10,
        };
        let converted = convert_flash_error(err, Path::new("in"), Path::new("out.bin"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("out.bin"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_short_write_mentions_media() {
        let err = FlashError::ShortWrite {
            written: 3,
            expected: 6,
        };
        let converted = convert_flash_error(err, Path::new("in"), Path::new("out"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("media"));
    }

    #[test]
    fn test_convert_io_error_keeps_cause() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such device");
        let converted =
            convert_flash_error(FlashError::Io(io_err), Path::new("in"), Path::new("out"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("no such device"));
    }
}
