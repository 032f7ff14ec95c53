use std::path::Path;

use crate::patch::{ASSET_NAME, PatchError};
use crate::utils::file_ops::replace_file;

/// Make `source` the live asset of the installation in `game_dir`.
///
/// Returns `Ok(false)` without touching anything when `source` is not named
/// `data.win` or does not exist. Used both for patches and for reverting to
/// the vanilla copy.
pub fn apply(source: &Path, game_dir: &Path) -> Result<bool, PatchError> {
    if source.file_name().and_then(|n| n.to_str()) != Some(ASSET_NAME) {
        log::debug!("refusing {}: not named {}", source.display(), ASSET_NAME);
        return Ok(false);
    }
    if !source.is_file() {
        log::debug!("refusing {}: no such file", source.display());
        return Ok(false);
    }

    let live = game_dir.join(ASSET_NAME);
    replace_file(source, &live).map_err(|e| PatchError::ApplyFailed {
        file: live.display().to_string(),
        reason: e.to_string(),
    })?;

    log::info!("{} now holds {}", live.display(), source.display());
    Ok(true)
}
