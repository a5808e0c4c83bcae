//! # Storage Layer
//!
//! The [`StorageBackend`] trait is raw byte I/O for one backing file. It knows
//! nothing about records: decoding and the uniqueness rules live in
//! [`crate::codec`] and [`crate::commands`].
//!
//! - [`fs::FsBackend`]: the real file on disk.
//! - [`memory::MemBackend`]: an in-memory file for tests.
//!
//! Both treat an absent file as zero bytes and bring it into existence on
//! the first read, so a later `list` sees an empty file rather than an error.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait StorageBackend {
    /// Read the full contents, creating an empty file first if it is absent.
    fn read(&self) -> Result<Vec<u8>>;

    /// Replace the full contents (truncate + write).
    fn write(&self, contents: &[u8]) -> Result<()>;

    /// Where the contents live. Used for messages and logs.
    fn location(&self) -> PathBuf;
}
