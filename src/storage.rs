// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 elnzip developers

//! Capability interface over the application's storage backends.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

/// Resolves a backend id plus opaque locator into a readable byte stream.
///
/// Implemented by the caller for whatever backends the application runs
/// (local disk, object store, ...). Open failures surface as
/// [`crate::ExportError::StorageUnavailable`] naming the affected attachment.
pub trait StreamSource {
    fn open_stream(&self, storage: u32, long_name: &str) -> io::Result<Box<dyn Read + Send>>;
}

/// Storage rooted at a local directory; locators are relative paths.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locators come from the database, but refuse escapes from the root
    /// anyway.
    fn resolve(&self, long_name: &str) -> io::Result<PathBuf> {
        let relative = Path::new(long_name);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|part| matches!(part, Component::ParentDir));
        if escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("storage locator '{long_name}' leaves the store root"),
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl StreamSource for DirectoryStore {
    // A directory store is a single backend; the id only routes between
    // stores and is not interpreted here.
    fn open_stream(&self, _storage: u32, long_name: &str) -> io::Result<Box<dyn Read + Send>> {
        let path = self.resolve(long_name)?;
        Ok(Box::new(File::open(path)?))
    }
}
