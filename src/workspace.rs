use std::path::{Path, PathBuf};

use crate::patch::{
    ASSET_NAME, CONFIG_FILENAME, LEGACY_CONFIG_FILENAME, PATCHES_DIR, PatchStore, VANILLA_DIR,
};

/// Local storage layout rooted at the directory the manager runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Workspace { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    /// Setup has completed once the config file exists.
    pub fn is_configured(&self) -> bool {
        self.config_path().is_file()
    }

    /// An INI config from an earlier release with no JSON config beside it.
    ///
    /// Its settings are not imported, so setup runs again.
    pub fn has_legacy_config(&self) -> bool {
        !self.is_configured() && self.root.join(LEGACY_CONFIG_FILENAME).is_file()
    }

    pub fn vanilla_dir(&self) -> PathBuf {
        self.root.join(VANILLA_DIR)
    }

    /// The pristine copy captured at setup.
    pub fn vanilla_asset(&self) -> PathBuf {
        self.vanilla_dir().join(ASSET_NAME)
    }

    pub fn patches_dir(&self) -> PathBuf {
        self.root.join(PATCHES_DIR)
    }

    pub fn store(&self) -> PatchStore {
        PatchStore::new(self.patches_dir())
    }
}
