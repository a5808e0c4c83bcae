use super::StorageBackend;
use crate::error::{RecStoreError, Result};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_options() -> OpenOptions {
        let mut opts = OpenOptions::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o644);
        }
        opts
    }

    fn create_empty(&self) -> Result<()> {
        Self::open_options()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| RecStoreError::io(&self.path, e))?;
        log::debug!("created empty backing file {}", self.path.display());
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self) -> Result<Vec<u8>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.create_empty()?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(RecStoreError::io(&self.path, e)),
        };

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| RecStoreError::io(&self.path, e))?;
        Ok(contents)
    }

    fn write(&self, contents: &[u8]) -> Result<()> {
        let mut file = Self::open_options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| RecStoreError::io(&self.path, e))?;
        file.write_all(contents)
            .map_err(|e| RecStoreError::io(&self.path, e))?;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
