//! Test doubles for exercising the copy engine without real devices.
//!
//! These helpers are reused across unit, integration, and property tests,
//! and by the benches. They model the trait contracts exactly: an
//! in-memory source with a running position, and an in-memory target whose
//! reads, writes and seeks share one cursor the way a real file descriptor
//! does.

#![allow(clippy::expect_used, clippy::missing_panics_doc)]

use crate::Result;
use crate::io::Sink;
use crate::io::Source;
use crate::io::Target;

/// In-memory [`Source`] over a byte slice.
#[derive(Debug)]
pub struct SliceSource {
    data: Vec<u8>,
    consumed: usize,
}

impl SliceSource {
    /// Creates a source yielding `data` from the beginning.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            consumed: 0,
        }
    }
}

impl Source for SliceSource {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = buf.len().min(self.data.len() - self.consumed);
        buf[..n].copy_from_slice(&self.data[self.consumed..self.consumed + n]);
        self.consumed += n;
        Ok(n)
    }

    fn position(&mut self) -> Result<u64> {
        Ok(self.consumed as u64)
    }
}

/// In-memory [`Target`] with file-descriptor cursor semantics.
///
/// Reads, writes and seeks all move the same cursor. Writes past the
/// current end grow the buffer, zero-filling any gap, the way a sparse
/// file would.
#[derive(Debug, Default)]
pub struct MemTarget {
    data: Vec<u8>,
    cursor: usize,
    write_calls: u64,
}

impl MemTarget {
    /// Creates an empty target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a target pre-filled with `data`.
    #[must_use]
    pub fn with_content(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            cursor: 0,
            write_calls: 0,
        }
    }

    /// Bytes currently on the target.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.data
    }

    /// Number of write calls the target has served.
    #[must_use]
    pub fn write_calls(&self) -> u64 {
        self.write_calls
    }

    /// Rewinds the cursor for a fresh copy invocation.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl Sink for MemTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let end = self.cursor + buf.len();
        if self.data.len() < end {
            self.data.resize(end, 0);
        }
        self.data[self.cursor..end].copy_from_slice(buf);
        self.cursor = end;
        self.write_calls += 1;
        Ok(buf.len())
    }
}

impl Target for MemTarget {
    fn seek_to(&mut self, pos: u64) -> Result<()> {
        self.cursor = usize::try_from(pos).expect("position fits in memory");
        Ok(())
    }

    fn read_back(&mut self, buf: &mut [u8]) -> Result<usize> {
        let available = self.data.len().saturating_sub(self.cursor);
        let n = buf.len().min(available);
        buf[..n].copy_from_slice(&self.data[self.cursor..self.cursor + n]);
        self.cursor += n;
        Ok(n)
    }

    fn position(&mut self) -> Result<u64> {
        Ok(self.cursor as u64)
    }
}

/// Deterministic pseudo-random bytes for copy fixtures.
#[must_use]
pub fn patterned_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state & 0xff) as u8
        })
        .collect()
}
