//! The optimized block-copy engine.
//!
//! Copies a [`Source`] onto a [`Target`] in fixed-size blocks. In
//! optimized mode each destination block is read back and compared first;
//! matching blocks are skipped entirely, which matters when the
//! destination is flash media with a limited erase budget, or sits behind
//! a slow transport.
//!
//! When a volume size is configured the engine refuses to finish short of
//! it or to run past it. For fixed-size flash volumes, writing the wrong
//! total length silently corrupts the image layout, so both mismatches are
//! hard errors rather than guesses.

use crate::FlashError;
use crate::Result;
use crate::io::Source;
use crate::io::Target;

/// Default copy chunk granularity (1 MiB).
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024;

/// Statistics accumulated over a single copy invocation.
///
/// Reset at the start of every [`BlockCopier::copy`] call, so repeated
/// invocations are independently observable. Valid regardless of whether
/// the invocation succeeded; on failure they describe the completed
/// portion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Blocks physically written to the destination.
    pub blocks_written: u64,

    /// Blocks skipped because the destination content already matched.
    pub blocks_omitted: u64,

    /// Bytes physically written to the destination.
    pub bytes_written: u64,

    /// Bytes logically processed, written or skipped.
    pub bytes_total: u64,
}

/// Chunked compare-and-write copier.
///
/// # Examples
///
/// ```
/// use flashwrite_core::BlockCopier;
/// use flashwrite_core::test_support::MemTarget;
/// use flashwrite_core::test_support::SliceSource;
///
/// # fn main() -> flashwrite_core::Result<()> {
/// let mut source = SliceSource::new(*b"firmware image");
/// let mut target = MemTarget::new();
///
/// let mut copier = BlockCopier::with_limits(4, 0);
/// copier.copy(&mut source, &mut target, false)?;
///
/// assert_eq!(target.content(), b"firmware image");
/// assert_eq!(copier.stats().bytes_total, 14);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BlockCopier {
    block_size: usize,
    volume_size: u64,
    stats: CopyStats,
}

impl BlockCopier {
    /// Creates a copier with the default 1 MiB block size and no capacity
    /// bound.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_BLOCK_SIZE, 0)
    }

    /// Creates a copier with explicit chunking and destination capacity.
    ///
    /// A `volume_size` of zero means unbounded: the copy runs until the
    /// source is exhausted. A non-zero value must be neither under- nor
    /// over-filled, or the copy fails with a length-mismatch error.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is zero.
    #[must_use]
    pub fn with_limits(block_size: usize, volume_size: u64) -> Self {
        assert!(block_size > 0, "block size must be non-zero");
        Self {
            block_size,
            volume_size,
            stats: CopyStats::default(),
        }
    }

    /// Statistics for the most recent (or in-progress) copy invocation.
    #[must_use]
    pub fn stats(&self) -> &CopyStats {
        &self.stats
    }

    /// Copies `source` onto `target` block by block.
    ///
    /// With `optimized` set, every destination block is read back first
    /// and the write is skipped when the content already matches. The
    /// copy starts at the source's current position and seeks the target
    /// to the same offset for every block.
    ///
    /// On failure the destination keeps whatever blocks were already
    /// written, and [`stats`](Self::stats) describes the completed
    /// portion.
    pub fn copy(
        &mut self,
        source: &mut dyn Source,
        target: &mut dyn Target,
        optimized: bool,
    ) -> Result<()> {
        self.stats = CopyStats::default();

        let mut read_buf = vec![0u8; self.block_size];
        let mut compare_buf = vec![0u8; self.block_size];
        let mut position = source.position()?;

        loop {
            // The capacity boundary is judged against a full block: once
            // the next block would cross it, the destination is considered
            // full and any further source data is an overrun.
            let capacity_reached = self.volume_size != 0
                && position + self.block_size as u64 > self.volume_size;

            let read = source.read(&mut read_buf)?;
            if read == 0 {
                if self.volume_size != 0 && !capacity_reached {
                    return Err(FlashError::SourceTooShort {
                        copied: self.stats.bytes_total,
                        expected: self.volume_size,
                    });
                }
                return Ok(());
            }
            if read > read_buf.len() {
                return Err(FlashError::ReaderContract {
                    returned: read,
                    requested: read_buf.len(),
                });
            }
            if capacity_reached {
                return Err(FlashError::SourceTooLong {
                    limit: self.volume_size,
                });
            }

            target.seek_to(position)?;

            let mut skip = false;
            if optimized {
                // A failed or short read-back is not an error: the block
                // just counts as not matching and gets written.
                if let Ok(existing) = target.read_back(&mut compare_buf[..read]) {
                    skip = existing == read && compare_buf[..read] == read_buf[..read];
                }
                if skip {
                    self.stats.blocks_omitted += 1;
                }
            }

            if !skip {
                // The compare read advanced the shared cursor.
                target.seek_to(position)?;
                let written = target.write(&read_buf[..read])?;
                if written == 0 {
                    return Err(FlashError::ZeroWrite);
                }
                if written < read {
                    return Err(FlashError::ShortWrite {
                        written,
                        expected: read,
                    });
                }
                self.stats.blocks_written += 1;
                self.stats.bytes_written += written as u64;
            }

            position += read as u64;
            self.stats.bytes_total += read as u64;
        }
    }
}

impl Default for BlockCopier {
    fn default() -> Self {
        Self::new()
    }
}
