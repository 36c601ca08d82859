//! Write-optimized copying of byte streams onto storage volumes.
//!
//! `flashwrite-core` copies an update image onto a regular file, raw block
//! device, or UBI flash volume. In optimized mode it reads each destination
//! block before overwriting it and skips the write when the content already
//! matches, trading one extra read per block for saved write bandwidth and
//! flash erase cycles.
//!
//! # Examples
//!
//! ```no_run
//! use flashwrite_core::BlockCopier;
//! use flashwrite_core::io::FileSink;
//! use flashwrite_core::io::FileSource;
//! use flashwrite_core::io::FileTarget;
//! use flashwrite_core::rawio;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let src = rawio::open_read("update.img")?;
//! let dst = rawio::open_rw("/dev/mmcblk0p2")?;
//!
//! let mut source = FileSource::new(&src);
//! let mut target = FileTarget::new(&dst, FileSink::new(&dst));
//!
//! let mut copier = BlockCopier::new();
//! copier.copy(&mut source, &mut target, true)?;
//! println!("{} blocks written", copier.stats().blocks_written);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod device;
pub mod engine;
pub mod error;
pub mod io;
pub mod rawio;
pub mod test_support;

// Re-export main API types
pub use engine::BlockCopier;
pub use engine::CopyStats;
pub use engine::DEFAULT_BLOCK_SIZE;
pub use error::FlashError;
pub use error::Result;
