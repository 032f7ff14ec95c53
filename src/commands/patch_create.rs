use std::io::{BufRead, Write};

use crate::patch::{self, ASSET_NAME, DIFF_EXTENSION, PatchError};
use crate::session::Session;

/// Build a new patch from an xdelta file the user picks, then offer to apply it.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), PatchError> {
    let Some(diff) = session.picker.pick_diff_file("Select an XDelta file.") else {
        session.console.say("Please select a file.")?;
        return Ok(());
    };

    let store = session.store();
    let vanilla = session.workspace.vanilla_asset();
    let created = match patch::create_patch(&store, &vanilla, &diff, &*session.tool) {
        Ok(created) => created,
        Err(PatchError::NotADiffFile(_)) => {
            session
                .console
                .say(format_args!("Please select an {} file.", DIFF_EXTENSION))?;
            return Ok(());
        }
        Err(PatchError::PatchExists(name)) => {
            session.console.say(format_args!(
                "A patch named {} already exists. Delete it first or rename the {} file.",
                name, DIFF_EXTENSION
            ))?;
            return Ok(());
        }
        Err(PatchError::ToolFailed { .. }) => {
            session
                .console
                .say("Failed to create patch, see the delta tool output above.")?;
            return Ok(());
        }
        Err(e @ PatchError::ToolUnavailable { .. }) => {
            session
                .console
                .say(format_args!("Failed to create patch: {}", e))?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    session
        .console
        .say(format_args!("Created patch {} successfully!", created.name))?;

    if session.console.confirm("Would you like to apply the patch?", true)? {
        if patch::apply(&created.asset, &session.game_dir)? {
            session.console.say("Patch applied successfully!")?;
        } else {
            session
                .console
                .say(format_args!("Please input a {} file.", ASSET_NAME))?;
        }
    }

    Ok(())
}
