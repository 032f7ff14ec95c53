use std::io::{BufRead, Write};

use crate::patch::PatchError;
use crate::session::Session;

/// Remove a stored patch after explicit confirmation (defaults to no).
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), PatchError> {
    let Some(name) = session.choose_patch("Choose a patch to delete:")? else {
        return Ok(());
    };

    let question = format!("Delete patch {}? This cannot be undone.", name);
    if !session.console.confirm(&question, false)? {
        session.console.say("Nothing was deleted.")?;
        return Ok(());
    }

    session.store().remove(&name)?;
    session.console.say(format_args!("Deleted patch {}.", name))?;
    Ok(())
}
