//! Error types for flash copy operations.

use thiserror::Error;

/// Result type alias using `FlashError`.
pub type Result<T> = std::result::Result<T, FlashError>;

/// Errors that can occur while copying onto a storage volume.
#[derive(Error, Debug)]
pub enum FlashError {
    /// Underlying read/write/seek/flush/stat/ioctl failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A write would cross the configured destination byte limit.
    ///
    /// Raised before any byte of the offending write reaches the device.
    #[error(
        "write of {requested} bytes at position {position} would exceed the volume limit of {limit} bytes"
    )]
    CapacityExceeded {
        /// Write position at the time of the rejected call.
        position: u64,
        /// Length of the rejected write.
        requested: usize,
        /// Configured byte ceiling.
        limit: u64,
    },

    /// Source ended before the configured destination capacity was reached.
    #[error("source exhausted after {copied} bytes, before the destination capacity of {expected} bytes")]
    SourceTooShort {
        /// Bytes copied before the source ran out.
        copied: u64,
        /// Configured destination capacity.
        expected: u64,
    },

    /// Source still has data after the destination capacity was reached.
    #[error("destination capacity of {limit} bytes reached with source data remaining")]
    SourceTooLong {
        /// Configured destination capacity.
        limit: u64,
    },

    /// The destination accepted fewer bytes than requested.
    ///
    /// Distinct from a generic I/O failure so operators can recognize
    /// truncated-media conditions.
    #[error("short write when copying data: {written} of {expected} bytes")]
    ShortWrite {
        /// Bytes the destination accepted.
        written: usize,
        /// Bytes the write was asked to deliver.
        expected: usize,
    },

    /// The destination accepted zero bytes on a write that should have
    /// succeeded. Often indicates exhausted media.
    #[error("zero write when copying data")]
    ZeroWrite,

    /// A reader handed back more bytes than the buffer it was given.
    ///
    /// This is a contract violation in the `Source` implementation, not a
    /// runtime condition; it is not meant to be caught and handled.
    #[error("reader returned {returned} bytes for a {requested}-byte buffer; this is a bug in the reader")]
    ReaderContract {
        /// Count the reader claimed to have produced.
        returned: usize,
        /// Capacity of the buffer it was given.
        requested: usize,
    },
}

impl FlashError {
    /// Returns `true` if this error reports a source/destination length
    /// mismatch (source too short or too long for the configured capacity).
    #[must_use]
    pub fn is_length_mismatch(&self) -> bool {
        matches!(
            self,
            Self::SourceTooShort { .. } | Self::SourceTooLong { .. }
        )
    }

    /// Returns `true` if this error indicates the destination accepted less
    /// data than requested (short or zero write).
    #[must_use]
    pub fn is_truncated_write(&self) -> bool {
        matches!(self, Self::ShortWrite { .. } | Self::ZeroWrite)
    }
}
