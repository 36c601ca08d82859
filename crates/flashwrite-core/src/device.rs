//! Target device classification and flash volume provisioning.
//!
//! Destinations come in three kinds: regular files, raw block devices, and
//! UBI flash volumes. The classifier tells them apart so callers can pick
//! the right preparation steps; UBI volumes additionally require an
//! update-volume ioctl declaring the total transfer size before any data is
//! written.

use std::fs::File;
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::fs::FileTypeExt;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use crate::Result;

/// Device-class major number reserved for UBI volume nodes.
const UBI_MAJOR: u64 = 10;

#[allow(unsafe_code)]
mod sys {
    // BLKGETSIZE64 from <linux/fs.h>: media size of a block device in bytes.
    nix::ioctl_read!(blkgetsize64, 0x12, 114, u64);

    // UBI_IOCVOLUP from <mtd/ubi-user.h>: _IOW('O', 0, __s64), declares the
    // number of bytes the following volume update will write.
    nix::ioctl_write_ptr!(ubi_volume_update, b'O', 0, i64);
}

/// Returns `true` if the handle refers to a block device node rather than a
/// regular file.
pub fn is_block_device(file: &File) -> Result<bool> {
    Ok(file.metadata()?.file_type().is_block_device())
}

/// Returns `true` if `path` names a UBI volume device node.
///
/// UBI volume nodes register under the reserved device major; both
/// character and block node flavors are accepted.
pub fn is_ubi_volume<P: AsRef<Path>>(path: P) -> Result<bool> {
    let metadata = std::fs::metadata(path)?;
    let file_type = metadata.file_type();
    if !file_type.is_block_device() && !file_type.is_char_device() {
        return Ok(false);
    }
    Ok(nix::sys::stat::major(metadata.rdev()) == UBI_MAJOR)
}

/// Reports the media size of a block device in bytes.
#[allow(unsafe_code)]
pub fn block_device_size(file: &File) -> Result<u64> {
    let mut size: u64 = 0;
    // SAFETY: the descriptor is valid for the lifetime of `file` and the
    // ioctl writes a single u64 through the provided pointer.
    unsafe { sys::blkgetsize64(file.as_raw_fd(), &mut size) }
        .map_err(io::Error::from)?;
    Ok(size)
}

/// Declares the total number of bytes about to be written to a UBI volume.
///
/// Must be issued before any data is written to such a volume; the kernel
/// erases the volume and accepts exactly `size` bytes of update data
/// afterwards. Failure is reported, not retried.
#[allow(unsafe_code)]
pub fn provision_volume(file: &File, size: u64) -> Result<()> {
    let bytes = i64::try_from(size)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "volume size exceeds ioctl range"))?;
    // SAFETY: the descriptor is valid for the lifetime of `file` and the
    // ioctl only reads the i64 behind the provided pointer.
    unsafe { sys::ubi_volume_update(file.as_raw_fd(), &bytes) }
        .map_err(io::Error::from)?;
    Ok(())
}
