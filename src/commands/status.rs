use std::io::{BufRead, Write};
use std::path::Path;

use crate::patch::{ASSET_NAME, PatchError};
use crate::session::Session;
use crate::utils::hash::hash_file;
use crate::workspace::Workspace;

/// What the live asset currently matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveState {
    /// No data.win in the game directory
    Missing,
    Vanilla,
    Patch(String),
    /// Matches neither the vanilla copy nor any stored patch
    Unknown,
}

/// Identify the live asset by comparing hashes with the vanilla copy and
/// every stored patch.
pub fn current_state(workspace: &Workspace, game_dir: &Path) -> Result<LiveState, PatchError> {
    let live = game_dir.join(ASSET_NAME);
    if !live.is_file() {
        return Ok(LiveState::Missing);
    }
    let live_hash = hash(&live)?;

    let vanilla = workspace.vanilla_asset();
    if vanilla.is_file() && hash(&vanilla)? == live_hash {
        return Ok(LiveState::Vanilla);
    }

    let store = workspace.store();
    for name in store.list()? {
        let asset = store.asset_path(&name);
        if asset.is_file() && hash(&asset)? == live_hash {
            return Ok(LiveState::Patch(name));
        }
    }

    Ok(LiveState::Unknown)
}

fn hash(path: &Path) -> Result<String, PatchError> {
    hash_file(path).map_err(|e| PatchError::io(path.display(), e))
}

pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), PatchError> {
    let line = match current_state(&session.workspace, &session.game_dir)? {
        LiveState::Missing => format!(
            "No {} found in {}. Revert to vanilla or verify your game files.",
            ASSET_NAME,
            session.game_dir.display()
        ),
        LiveState::Vanilla => "Your game is currently unmodified (vanilla).".to_string(),
        LiveState::Patch(name) => format!("Your game is currently running patch {}.", name),
        LiveState::Unknown => format!(
            "Your {} does not match vanilla or any of your patches.",
            ASSET_NAME
        ),
    };
    session.console.say(line)?;
    Ok(())
}
