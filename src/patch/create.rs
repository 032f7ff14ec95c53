use std::fs;
use std::path::{Path, PathBuf};

use crate::patch::{ASSET_NAME, DIFF_EXTENSION, PatchError, PatchStore};
use crate::utils::xdelta::DeltaTool;

/// A patch created in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub name: String,
    /// The reconstructed asset, ready to be applied
    pub asset: PathBuf,
}

/// Name a diff file would produce, or `None` if it is not an xdelta file.
pub fn patch_name(diff: &Path) -> Option<String> {
    let ext = diff.extension()?.to_str()?;
    if ext != DIFF_EXTENSION {
        return None;
    }
    let stem = diff.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

/// Reconstruct a full asset from `diff` against the vanilla copy and store it
/// as a new patch named after the diff file.
///
/// Nothing is created when `diff` is not an xdelta file or a patch of the
/// same name exists. If the tool fails, the new patch directory is removed.
pub fn create_patch(
    store: &PatchStore,
    vanilla_asset: &Path,
    diff: &Path,
    tool: &dyn DeltaTool,
) -> Result<Patch, PatchError> {
    let name = patch_name(diff)
        .ok_or_else(|| PatchError::NotADiffFile(diff.display().to_string()))?;

    let dir = store.create_dir(&name)?;
    let asset = dir.join(ASSET_NAME);

    if let Err(e) = tool.decode(vanilla_asset, diff, &asset) {
        log::warn!("decoding {} failed, discarding {}", diff.display(), dir.display());
        if let Err(cleanup) = fs::remove_dir_all(&dir) {
            log::warn!("failed to remove {}: {}", dir.display(), cleanup);
        }
        return Err(e);
    }

    log::info!("created patch {} at {}", name, asset.display());
    Ok(Patch { name, asset })
}
