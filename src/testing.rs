//! Test doubles for the external seams.

use std::cell::RefCell;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::patch::PatchError;
use crate::utils::console::Console;
use crate::utils::picker::Picker;
use crate::utils::xdelta::DeltaTool;

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Console that reads `input` and records everything written.
pub fn scripted(input: &str) -> ScriptedConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn output(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.writer()).into_owned()
}

/// Delta tool that writes fixed bytes instead of decoding.
pub struct FakeTool {
    available: bool,
    result: Result<Vec<u8>, i32>,
    calls: RefCell<Vec<(PathBuf, PathBuf, PathBuf)>>,
}

impl FakeTool {
    pub fn producing(bytes: &[u8]) -> Self {
        FakeTool {
            available: true,
            result: Ok(bytes.to_vec()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(exit_code: i32) -> Self {
        FakeTool {
            available: true,
            result: Err(exit_code),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn missing() -> Self {
        FakeTool {
            available: false,
            ..FakeTool::failing(127)
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl DeltaTool for FakeTool {
    fn is_available(&self) -> bool {
        self.available
    }

    fn decode(&self, source: &Path, diff: &Path, output: &Path) -> Result<(), PatchError> {
        self.calls
            .borrow_mut()
            .push((source.to_path_buf(), diff.to_path_buf(), output.to_path_buf()));
        if !self.available {
            return Err(PatchError::ToolUnavailable {
                program: "xdelta3".to_string(),
                reason: "No such file or directory".to_string(),
            });
        }
        match &self.result {
            Ok(bytes) => {
                fs::write(output, bytes).map_err(|e| PatchError::io(output.display(), e))
            }
            Err(code) => Err(PatchError::ToolFailed {
                exit_code: Some(*code),
            }),
        }
    }
}

/// Picker that always returns the same answers.
#[derive(Default)]
pub struct FixedPicker {
    pub folder: Option<PathBuf>,
    pub diff_file: Option<PathBuf>,
}

impl FixedPicker {
    pub fn folder(path: impl Into<PathBuf>) -> Self {
        FixedPicker {
            folder: Some(path.into()),
            diff_file: None,
        }
    }

    pub fn diff_file(path: impl Into<PathBuf>) -> Self {
        FixedPicker {
            folder: None,
            diff_file: Some(path.into()),
        }
    }
}

impl Picker for FixedPicker {
    fn pick_folder(&self, _title: &str) -> Option<PathBuf> {
        self.folder.clone()
    }

    fn pick_diff_file(&self, _title: &str) -> Option<PathBuf> {
        self.diff_file.clone()
    }
}
