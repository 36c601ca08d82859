//! Retry-safe wrappers over raw file operations.
//!
//! Every helper operates on a borrowed [`File`] handle. std implements
//! [`Read`]/[`Write`]/[`Seek`] for `&File`, so a single owned handle can be
//! shared by reference between wrapper objects without duplicating the
//! descriptor and its position tracking.
//!
//! Interrupted system calls are re-issued transparently; no operation here
//! returns a short count solely because a signal arrived mid-call.

use std::fs::File;
use std::fs::OpenOptions;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::io::{self};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::FlashError;
use crate::Result;
use crate::device;

/// Permission bits for files created by [`open_rw`].
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Opens a file for reading only.
pub fn open_read<P: AsRef<Path>>(path: P) -> Result<File> {
    Ok(File::open(path)?)
}

/// Opens a file for reading and writing, creating it if it does not exist.
///
/// Existing content is left in place; the optimized copy path depends on
/// being able to read it back for comparison.
pub fn open_rw<P: AsRef<Path>>(path: P) -> Result<File> {
    Ok(OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .mode(DEFAULT_FILE_MODE)
        .open(path)?)
}

/// Reads until `buf` is full or the stream reaches end-of-data.
///
/// Returns the number of bytes actually obtained; a count shorter than
/// `buf.len()` means end-of-data was reached.
pub fn read_full<R: Read>(mut reader: R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Issues a single write, retrying interrupted calls.
///
/// Returns the number of bytes accepted, which may be less than
/// `buf.len()`. A zero-byte completion on a non-empty buffer is reported as
/// [`FlashError::ZeroWrite`] so callers can tell exhausted media apart from
/// a transient fault.
pub fn write_some<W: Write>(mut writer: W, buf: &[u8]) -> Result<usize> {
    loop {
        match writer.write(buf) {
            Ok(0) if !buf.is_empty() => return Err(FlashError::ZeroWrite),
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
}

/// Repositions the handle to an absolute byte offset.
pub fn seek_set(mut file: &File, pos: u64) -> Result<()> {
    file.seek(SeekFrom::Start(pos))?;
    Ok(())
}

/// Returns the current byte offset of the handle.
pub fn tell(mut file: &File) -> Result<u64> {
    Ok(file.stream_position()?)
}

/// Forces durability of all writes issued on the handle so far.
pub fn flush(file: &File) -> Result<()> {
    file.sync_data()?;
    Ok(())
}

/// Returns the addressable capacity of the handle in bytes.
///
/// Regular files report their current length; block devices report the
/// media size from the kernel's capacity query.
pub fn size(file: &File) -> Result<u64> {
    if device::is_block_device(file)? {
        device::block_device_size(file)
    } else {
        Ok(file.metadata()?.len())
    }
}
