use std::io::{BufRead, Write};

use crate::patch::{self, ASSET_NAME, PatchError};
use crate::session::Session;

/// Let the user pick a stored patch and make it the live asset.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), PatchError> {
    let Some(name) = session.choose_patch("Choose a patch to apply:")? else {
        return Ok(());
    };

    let asset = session.store().asset_path(&name);
    if patch::apply(&asset, &session.game_dir)? {
        session
            .console
            .say(format_args!("Patch {} applied successfully!", name))?;
    } else {
        session
            .console
            .say(format_args!("Could not find {} file for {}", ASSET_NAME, name))?;
    }

    Ok(())
}
