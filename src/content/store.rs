use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::trace;

use crate::utils::error::BoxResult;

/// Read-only access to the content root. Files are re-read on every call;
/// an absent file is a normal outcome, not an error.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Create a store rooted at the content directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        ContentStore {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The content root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read an HTML fragment (or any text file) at a path relative to the
    /// content root. Returns `Ok(None)` when the file does not exist.
    pub fn read_document<P: AsRef<Path>>(&self, relative: P) -> BoxResult<Option<String>> {
        let path = self.root.join(relative.as_ref());
        trace!("Reading document {}", path.display());
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Read a binary asset (image, favicon) at a path relative to the
    /// content root. Returns `Ok(None)` when the file does not exist.
    pub fn read_bytes<P: AsRef<Path>>(&self, relative: P) -> BoxResult<Option<Vec<u8>>> {
        let path = self.root.join(relative.as_ref());
        trace!("Reading asset {}", path.display());
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
