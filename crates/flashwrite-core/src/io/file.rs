//! File and standard-input bindings of the stream traits.

use std::fs::File;
use std::io::{self};

use super::Sink;
use super::Source;
use super::Target;
use crate::Result;
use crate::rawio;

/// Sequential reader over an open file handle.
#[derive(Debug)]
pub struct FileSource<'f> {
    file: &'f File,
}

impl<'f> FileSource<'f> {
    /// Creates a source reading from `file` at its current position.
    #[must_use]
    pub fn new(file: &'f File) -> Self {
        Self { file }
    }
}

impl Source for FileSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        rawio::read_full(self.file, buf)
    }

    fn position(&mut self) -> Result<u64> {
        rawio::tell(self.file)
    }
}

/// Reader over standard input.
///
/// Stdin is unseekable, so the position is tracked as a running count of
/// bytes handed out rather than queried from the descriptor.
#[derive(Debug)]
pub struct StdinSource {
    stdin: io::Stdin,
    consumed: u64,
}

impl StdinSource {
    /// Creates a source reading from this process's standard input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            consumed: 0,
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for StdinSource {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = rawio::read_full(self.stdin.lock(), buf)?;
        self.consumed += n as u64;
        Ok(n)
    }

    fn position(&mut self) -> Result<u64> {
        Ok(self.consumed)
    }
}

/// Plain sequential writer over an open file handle.
#[derive(Debug)]
pub struct FileSink<'f> {
    file: &'f File,
}

impl<'f> FileSink<'f> {
    /// Creates a sink writing to `file` at its current position.
    #[must_use]
    pub fn new(file: &'f File) -> Self {
        Self { file }
    }
}

impl Sink for FileSink<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        rawio::write_some(self.file, buf)
    }
}

/// Random-access view of a destination volume.
///
/// Writes are routed through the wrapped sink so that a capacity-limiting
/// decorator stays in the write path; reads and seeks operate directly on
/// the shared handle. Both must borrow the same [`File`] — the file
/// position is shared mutable state between them.
#[derive(Debug)]
pub struct FileTarget<'f, S> {
    file: &'f File,
    sink: S,
}

impl<'f, S: Sink> FileTarget<'f, S> {
    /// Creates a target over `file`, delegating writes to `sink`.
    #[must_use]
    pub fn new(file: &'f File, sink: S) -> Self {
        Self { file, sink }
    }
}

impl<S: Sink> Sink for FileTarget<'_, S> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.sink.write(buf)
    }
}

impl<S: Sink> Target for FileTarget<'_, S> {
    fn seek_to(&mut self, pos: u64) -> Result<()> {
        rawio::seek_set(self.file, pos)
    }

    fn read_back(&mut self, buf: &mut [u8]) -> Result<usize> {
        rawio::read_full(self.file, buf)
    }

    fn position(&mut self) -> Result<u64> {
        rawio::tell(self.file)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_source_reads_and_tracks_position() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("src");
        std::fs::write(&path, b"abcdef").unwrap();

        let file = rawio::open_read(&path).unwrap();
        let mut source = FileSource::new(&file);

        let mut buf = [0u8; 4];
        assert_eq!(source.read(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"abcd");
        assert_eq!(source.position().unwrap(), 4);

        assert_eq!(source.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ef");
        assert_eq!(source.position().unwrap(), 6);
    }

    #[test]
    fn test_target_routes_writes_through_sink() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dst");

        let file = rawio::open_rw(&path).unwrap();
        let mut target = FileTarget::new(&file, FileSink::new(&file));

        target.seek_to(0).unwrap();
        assert_eq!(target.write(b"foobar").unwrap(), 6);
        assert_eq!(target.position().unwrap(), 6);

        target.seek_to(3).unwrap();
        let mut buf = [0u8; 3];
        assert_eq!(target.read_back(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"bar");
    }

    #[test]
    fn test_read_back_moves_shared_cursor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dst");
        std::fs::write(&path, b"xxxxxx").unwrap();

        let file = rawio::open_rw(&path).unwrap();
        let mut target = FileTarget::new(&file, FileSink::new(&file));

        // A compare read advances the same position a following write
        // uses, so the caller must re-seek in between.
        target.seek_to(0).unwrap();
        let mut buf = [0u8; 3];
        target.read_back(&mut buf).unwrap();
        assert_eq!(target.position().unwrap(), 3);

        target.seek_to(0).unwrap();
        target.write(b"abc").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"abcxxx");
    }
}
