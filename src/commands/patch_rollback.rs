use std::io::{BufRead, Write};

use crate::patch::{self, ASSET_NAME, PatchError};
use crate::session::Session;

/// Restore the vanilla copy captured at setup.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), PatchError> {
    if !session
        .console
        .confirm("Are you sure you want to revert to vanilla?", true)?
    {
        return Ok(());
    }

    let vanilla = session.workspace.vanilla_asset();
    if patch::apply(&vanilla, &session.game_dir)? {
        session.console.say("Your game has been reverted to vanilla.")?;
    } else {
        session.console.say(format_args!(
            "Could not find the vanilla {} at {}.",
            ASSET_NAME,
            vanilla.display()
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTool, FixedPicker, output, scripted};
    use crate::workspace::Workspace;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn session(
        dir: &tempfile::TempDir,
        with_vanilla: bool,
        input: &str,
    ) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let workspace = Workspace::new(dir.path().join("ptmm"));
        let game_dir = dir.path().join("game");
        fs::create_dir_all(&game_dir).unwrap();
        fs::write(game_dir.join(ASSET_NAME), b"patched bytes").unwrap();
        if with_vanilla {
            fs::create_dir_all(workspace.vanilla_dir()).unwrap();
            fs::write(workspace.vanilla_asset(), b"vanilla bytes").unwrap();
        }
        Session::new(
            workspace,
            game_dir,
            Box::new(FakeTool::producing(b"")),
            Box::new(FixedPicker::default()),
            scripted(input),
        )
    }

    fn live(s: &Session<Cursor<Vec<u8>>, Vec<u8>>) -> Vec<u8> {
        fs::read(s.game_dir.join(ASSET_NAME)).unwrap()
    }

    #[test]
    fn empty_answer_reverts() {
        let dir = tempdir().unwrap();
        let mut s = session(&dir, true, "\n");

        run(&mut s).unwrap();

        assert_eq!(live(&s), b"vanilla bytes");
        assert!(output(&s.console).ends_with("Your game has been reverted to vanilla.\n"));
    }

    #[test]
    fn declining_keeps_patch() {
        let dir = tempdir().unwrap();
        let mut s = session(&dir, true, "n\n");

        run(&mut s).unwrap();

        assert_eq!(live(&s), b"patched bytes");
        assert_eq!(
            output(&s.console),
            "Are you sure you want to revert to vanilla? [Y/n] "
        );
    }

    #[test]
    fn missing_vanilla_copy_is_reported() {
        let dir = tempdir().unwrap();
        let mut s = session(&dir, false, "y\n");

        run(&mut s).unwrap();

        assert_eq!(live(&s), b"patched bytes");
        assert!(output(&s.console).contains("Could not find the vanilla data.win"));
    }
}
