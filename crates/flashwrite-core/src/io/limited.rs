//! Capacity-limited writer with periodic durability flushes.

use std::fs::File;

use super::Sink;
use crate::FlashError;
use crate::Result;
use crate::rawio;

/// Wrapper sink that enforces a byte ceiling and flushes on a fixed cadence.
///
/// The ceiling check runs before any byte is written: a write that would
/// cross the limit fails with [`FlashError::CapacityExceeded`] and performs
/// no I/O, so the file is never left with a partial overrun.
///
/// After every `flush_interval` written bytes the sink forces the data to
/// the device with fsync. The unflushed counter is reduced by the interval
/// rather than cleared, so the cadence does not drift when write sizes do
/// not divide the interval evenly.
#[derive(Debug)]
pub struct LimitedFlushingSink<'f> {
    file: &'f File,
    limit: u64,
    flush_interval: u64,
    unflushed: u64,
}

impl<'f> LimitedFlushingSink<'f> {
    /// Creates a sink over `file` with the given byte ceiling and flush
    /// cadence. A `limit` of zero means unbounded; a `flush_interval` of
    /// zero disables periodic flushing.
    #[must_use]
    pub fn new(file: &'f File, limit: u64, flush_interval: u64) -> Self {
        Self {
            file,
            limit,
            flush_interval,
            unflushed: 0,
        }
    }
}

impl Sink for LimitedFlushingSink<'_> {
    /// Writes `buf` unless it would cross the configured limit.
    ///
    /// A flush failure is a hard error even though the triggering write
    /// succeeded: the data is on the device but its durability is not yet
    /// guaranteed.
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let position = rawio::tell(self.file)?;
        if self.limit > 0 && position + buf.len() as u64 > self.limit {
            return Err(FlashError::CapacityExceeded {
                position,
                requested: buf.len(),
                limit: self.limit,
            });
        }

        let written = rawio::write_some(self.file, buf)?;

        if self.flush_interval > 0 {
            self.unflushed += written as u64;
            if self.unflushed >= self.flush_interval {
                rawio::flush(self.file)?;
                self.unflushed -= self.flush_interval;
            }
        }

        Ok(written)
    }
}
