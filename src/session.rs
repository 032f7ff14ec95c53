//! Session context and the interactive menu loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::commands::{patch_apply, patch_create, patch_delete, patch_rollback, status};
use crate::config::Config;
use crate::patch::{PatchError, PatchStore};
use crate::utils::console::Console;
use crate::utils::picker::Picker;
use crate::utils::xdelta::DeltaTool;
use crate::workspace::Workspace;

/// Everything an operation needs: where local storage lives, where the game
/// is, and the external collaborators.
pub struct Session<R, W> {
    pub workspace: Workspace,
    pub game_dir: PathBuf,
    pub tool: Box<dyn DeltaTool>,
    pub picker: Box<dyn Picker>,
    pub console: Console<R, W>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    CreatePatch,
    ApplyPatch,
    Revert,
    DeletePatch,
    ShowState,
    Quit,
}

const MENU: &[(&str, Action)] = &[
    ("1", Action::CreatePatch),
    ("2", Action::ApplyPatch),
    ("3", Action::Revert),
    ("4", Action::DeletePatch),
    ("5", Action::ShowState),
    ("0", Action::Quit),
];

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::CreatePatch => "Create New Patch",
            Action::ApplyPatch => "Apply Patch",
            Action::Revert => "Revert to Vanilla",
            Action::DeletePatch => "Delete Patch",
            Action::ShowState => "Show Current State",
            Action::Quit => "Quit",
        }
    }

    fn parse(input: &str) -> Option<Action> {
        MENU.iter()
            .find(|(key, _)| *key == input)
            .map(|(_, action)| *action)
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        workspace: Workspace,
        game_dir: PathBuf,
        tool: Box<dyn DeltaTool>,
        picker: Box<dyn Picker>,
        console: Console<R, W>,
    ) -> Self {
        Session {
            workspace,
            game_dir,
            tool,
            picker,
            console,
        }
    }

    /// Start a session from the workspace's saved configuration.
    pub fn open(
        workspace: Workspace,
        tool: Box<dyn DeltaTool>,
        picker: Box<dyn Picker>,
        console: Console<R, W>,
    ) -> Result<Self, PatchError> {
        let config = Config::load(&workspace.config_path())?;
        let game_dir = config.game_dir().to_path_buf();
        log::debug!("game directory: {}", game_dir.display());
        Ok(Session::new(workspace, game_dir, tool, picker, console))
    }

    pub fn store(&self) -> PatchStore {
        self.workspace.store()
    }

    /// Ask the user to pick one of the stored patches.
    ///
    /// `None` when there are no patches or the user cancels.
    pub fn choose_patch(&mut self, prompt: &str) -> Result<Option<String>, PatchError> {
        let names = self.store().list()?;
        if names.is_empty() {
            self.console.say("You haven't created any patches yet.")?;
            return Ok(None);
        }

        let choice = self.console.choose(prompt, &names)?;
        Ok(choice.map(|i| names[i].clone()))
    }

    /// Run the menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), PatchError> {
        self.console.say("Welcome to A Pizza Tower Mod Manager!")?;
        self.console.blank()?;

        loop {
            for (key, action) in MENU {
                self.console.say(format_args!("  [{}] {}", key, action.label()))?;
            }
            self.console.blank()?;

            let answer = match self.console.ask("> ") {
                Ok(answer) => answer,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
            };

            let result = match Action::parse(&answer) {
                Some(Action::Quit) => break,
                Some(Action::CreatePatch) => patch_create::run(self),
                Some(Action::ApplyPatch) => patch_apply::run(self),
                Some(Action::Revert) => patch_rollback::run(self),
                Some(Action::DeletePatch) => patch_delete::run(self),
                Some(Action::ShowState) => status::run(self),
                None => Ok(()),
            };

            match result {
                Ok(()) => {}
                Err(PatchError::InputClosed) => break,
                Err(e @ PatchError::Console { .. }) => return Err(e),
                Err(e) => {
                    log::warn!("{}", e);
                    self.console.say(format_args!("Error: {}", e))?;
                }
            }
            self.console.blank()?;
        }

        self.console.say("See ya later!")?;
        Ok(())
    }
}
