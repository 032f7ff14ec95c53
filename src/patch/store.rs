use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::patch::{ASSET_NAME, PatchError};

/// The `patches/` directory: one subdirectory per patch, each holding one
/// reconstructed asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchStore {
    root: PathBuf,
}

impl PatchStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PatchStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn patch_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.patch_dir(name).join(ASSET_NAME)
    }

    /// Names of all patches, sorted. A missing store lists as empty.
    pub fn list(&self) -> Result<Vec<String>, PatchError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PatchError::io(self.root.display(), e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PatchError::io(self.root.display(), e))?;
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::warn!("skipping non-UTF-8 patch directory {:?}", raw),
            }
        }
        names.sort();
        Ok(names)
    }

    /// Create an empty directory for a new patch.
    ///
    /// Fails with [`PatchError::PatchExists`] instead of reusing a directory.
    pub fn create_dir(&self, name: &str) -> Result<PathBuf, PatchError> {
        fs::create_dir_all(&self.root).map_err(|e| PatchError::io(self.root.display(), e))?;

        let dir = self.patch_dir(name);
        match fs::create_dir(&dir) {
            Ok(()) => Ok(dir),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(PatchError::PatchExists(name.to_string()))
            }
            Err(e) => Err(PatchError::io(dir.display(), e)),
        }
    }

    /// Recursively delete one patch.
    pub fn remove(&self, name: &str) -> Result<(), PatchError> {
        let dir = self.patch_dir(name);
        fs::remove_dir_all(&dir).map_err(|e| PatchError::io(dir.display(), e))?;
        log::info!("removed patch {}", name);
        Ok(())
    }
}
