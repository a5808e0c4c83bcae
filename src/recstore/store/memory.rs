use super::StorageBackend;
use crate::error::{RecStoreError, Result};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory backing file for testing.
///
/// `None` means the file does not exist yet. Uses `RefCell` since the store
/// is single-threaded and the trait takes `&self`.
#[derive(Default)]
pub struct MemBackend {
    contents: RefCell<Option<Vec<u8>>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing file contents.
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        *backend.contents.borrow_mut() = Some(contents.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn exists(&self) -> bool {
        self.contents.borrow().is_some()
    }

    /// Current contents, or `None` if never created.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Vec<u8>> {
        let mut contents = self.contents.borrow_mut();
        Ok(contents.get_or_insert_with(Vec::new).clone())
    }

    fn write(&self, new_contents: &[u8]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RecStoreError::io(
                self.location(),
                std::io::Error::other("Simulated write error"),
            ));
        }
        *self.contents.borrow_mut() = Some(new_contents.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://store")
    }
}
