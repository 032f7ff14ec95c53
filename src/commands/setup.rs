use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::locate::is_install_dir;
use crate::patch::{ASSET_NAME, PatchError};
use crate::utils::console::Console;
use crate::utils::picker::Picker;
use crate::utils::xdelta::{DEFAULT_PROGRAM, DeltaTool};
use crate::workspace::Workspace;

/// How first-run setup ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Setup finished; the game lives here
    Complete(PathBuf),
    /// The user closed the folder picker
    Cancelled,
    /// The delta tool is not installed
    ToolMissing,
    /// The user did not confirm the game is unmodified
    Declined,
    /// The chosen folder has no data.win
    AssetMissing,
}

impl SetupOutcome {
    pub fn code(&self) -> i32 {
        match self {
            SetupOutcome::Complete(_) => 0,
            SetupOutcome::Cancelled => 1,
            SetupOutcome::ToolMissing => 2,
            SetupOutcome::Declined => 3,
            SetupOutcome::AssetMissing => 4,
        }
    }
}

/// First-run setup.
///
/// Workflow:
/// 1. Use the located installation, or ask for the folder
/// 2. Check the folder has data.win and the delta tool runs
/// 3. Have the user confirm the game is unmodified
/// 4. Create vanilla/ and patches/, copy data.win, write the config
pub fn run<R: BufRead, W: Write>(
    workspace: &Workspace,
    located: Option<PathBuf>,
    tool: &dyn DeltaTool,
    picker: &dyn Picker,
    console: &mut Console<R, W>,
) -> Result<SetupOutcome, PatchError> {
    let game_dir = match located {
        Some(dir) => dir,
        None => {
            console.say(
                "Could not find Pizza Tower installation. Please select your \"Pizza Tower\" Steam folder.",
            )?;
            match picker.pick_folder("Select your Pizza Tower folder") {
                Some(dir) => dir,
                None => return Ok(SetupOutcome::Cancelled),
            }
        }
    };
    let game_dir = std::path::absolute(&game_dir).map_err(|e| PatchError::io(game_dir.display(), e))?;
    log::info!("using game directory {}", game_dir.display());

    if !is_install_dir(&game_dir) {
        console.say(format_args!(
            "Could not find {} file in Pizza Tower directory.",
            ASSET_NAME
        ))?;
        return Ok(SetupOutcome::AssetMissing);
    }

    if !tool.is_available() {
        console.say(format_args!(
            "Please install {} before continuing.",
            DEFAULT_PROGRAM
        ))?;
        return Ok(SetupOutcome::ToolMissing);
    }

    console.say(
        "Before we get started, be sure that your game is currently unmodified. \
         If it is modified, just verify the integrity of your game files before continuing.",
    )?;
    console.blank()?;
    console.say("[1] I currently have an unmodified version of the game.")?;
    console.say("[0] Cancel")?;
    if console.ask("> ")? != "1" {
        return Ok(SetupOutcome::Declined);
    }

    initialize(workspace, &game_dir)?;
    Ok(SetupOutcome::Complete(game_dir))
}

/// Create local storage and capture the vanilla asset.
///
/// The config is written last so an interrupted setup runs again next launch.
fn initialize(workspace: &Workspace, game_dir: &Path) -> Result<(), PatchError> {
    for dir in [workspace.vanilla_dir(), workspace.patches_dir()] {
        fs::create_dir_all(&dir).map_err(|e| PatchError::io(dir.display(), e))?;
    }

    let live = game_dir.join(ASSET_NAME);
    let vanilla = workspace.vanilla_asset();
    fs::copy(&live, &vanilla).map_err(|e| PatchError::io(live.display(), e))?;
    log::info!("captured {} as {}", live.display(), vanilla.display());

    Config::new(game_dir).save(&workspace.config_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTool, FixedPicker, output, scripted};
    use tempfile::tempdir;

    struct Fixture {
        _dir: tempfile::TempDir,
        workspace: Workspace,
        game_dir: PathBuf,
    }

    fn fixture(with_asset: bool) -> Fixture {
        let dir = tempdir().unwrap();
        let workspace = Workspace::new(dir.path().join("ptmm"));
        let game_dir = dir.path().join("games/Game");
        fs::create_dir_all(workspace.root()).unwrap();
        fs::create_dir_all(&game_dir).unwrap();
        if with_asset {
            fs::write(game_dir.join(ASSET_NAME), b"vanilla bytes").unwrap();
        }
        Fixture {
            _dir: dir,
            workspace,
            game_dir,
        }
    }

    fn nothing_written(f: &Fixture) -> bool {
        !f.workspace.is_configured()
            && !f.workspace.vanilla_dir().exists()
            && !f.workspace.patches_dir().exists()
    }

    #[test]
    fn completes_with_located_install() {
        let f = fixture(true);
        let mut console = scripted("1\n");

        let outcome = run(
            &f.workspace,
            Some(f.game_dir.clone()),
            &FakeTool::producing(b""),
            &FixedPicker::default(),
            &mut console,
        )
        .unwrap();

        assert_eq!(outcome, SetupOutcome::Complete(f.game_dir.clone()));
        assert_eq!(outcome.code(), 0);
        assert_eq!(
            Config::load(&f.workspace.config_path()).unwrap().game_dir(),
            f.game_dir.as_path()
        );
        assert_eq!(fs::read(f.workspace.vanilla_asset()).unwrap(), b"vanilla bytes");
        assert!(f.workspace.patches_dir().is_dir());
        assert!(f.workspace.store().list().unwrap().is_empty());
        // The live asset stays in place
        assert!(f.game_dir.join(ASSET_NAME).is_file());
    }

    #[test]
    fn falls_back_to_picker() {
        let f = fixture(true);
        let mut console = scripted("1\n");

        let outcome = run(
            &f.workspace,
            None,
            &FakeTool::producing(b""),
            &FixedPicker::folder(&f.game_dir),
            &mut console,
        )
        .unwrap();

        assert_eq!(outcome, SetupOutcome::Complete(f.game_dir.clone()));
        assert!(output(&console).contains("Could not find Pizza Tower installation"));
    }

    #[test]
    fn cancelled_picker() {
        let f = fixture(true);
        let mut console = scripted("1\n");

        let outcome = run(
            &f.workspace,
            None,
            &FakeTool::producing(b""),
            &FixedPicker::default(),
            &mut console,
        )
        .unwrap();

        assert_eq!(outcome, SetupOutcome::Cancelled);
        assert_eq!(outcome.code(), 1);
        assert!(nothing_written(&f));
    }

    #[test]
    fn missing_asset() {
        let f = fixture(false);
        let mut console = scripted("1\n");

        let outcome = run(
            &f.workspace,
            None,
            &FakeTool::producing(b""),
            &FixedPicker::folder(&f.game_dir),
            &mut console,
        )
        .unwrap();

        assert_eq!(outcome, SetupOutcome::AssetMissing);
        assert_eq!(outcome.code(), 4);
        assert!(nothing_written(&f));
    }

    #[test]
    fn missing_tool() {
        let f = fixture(true);
        let mut console = scripted("1\n");

        let outcome = run(
            &f.workspace,
            Some(f.game_dir.clone()),
            &FakeTool::missing(),
            &FixedPicker::default(),
            &mut console,
        )
        .unwrap();

        assert_eq!(outcome, SetupOutcome::ToolMissing);
        assert_eq!(outcome.code(), 2);
        assert!(output(&console).contains("Please install xdelta3"));
        assert!(nothing_written(&f));
    }

    #[test]
    fn declined_confirmation() {
        let f = fixture(true);

        for input in ["0\n", "\n", "y\n", "yes\n"] {
            let mut console = scripted(input);
            let outcome = run(
                &f.workspace,
                Some(f.game_dir.clone()),
                &FakeTool::producing(b""),
                &FixedPicker::default(),
                &mut console,
            )
            .unwrap();

            assert_eq!(outcome, SetupOutcome::Declined, "input {:?}", input);
            assert_eq!(outcome.code(), 3);
            assert!(nothing_written(&f));
        }
    }

    #[test]
    fn closed_input_is_an_error() {
        let f = fixture(true);
        let mut console = scripted("");

        let result = run(
            &f.workspace,
            Some(f.game_dir.clone()),
            &FakeTool::producing(b""),
            &FixedPicker::default(),
            &mut console,
        );

        assert_eq!(result, Err(PatchError::InputClosed));
        assert!(nothing_written(&f));
    }
}
