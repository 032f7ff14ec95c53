//! External binary-delta tool.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::patch::PatchError;

/// Program name looked up on `PATH` when no override is given
pub const DEFAULT_PROGRAM: &str = "xdelta3";

/// Reconstructs a target file from a source file and a diff.
pub trait DeltaTool {
    /// Whether the tool can be started at all.
    fn is_available(&self) -> bool;

    /// Decode `diff` against `source`, writing the result to `output`.
    fn decode(&self, source: &Path, diff: &Path, output: &Path) -> Result<(), PatchError>;
}

/// `xdelta3` run as a subprocess.
#[derive(Debug, Clone)]
pub struct Xdelta3 {
    program: OsString,
}

impl Xdelta3 {
    pub fn new(program: impl Into<OsString>) -> Self {
        Xdelta3 {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl DeltaTool for Xdelta3 {
    fn is_available(&self) -> bool {
        let result = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                log::warn!("could not query {} version: {}", self.program_name(), e);
                false
            }
        }
    }

    fn decode(&self, source: &Path, diff: &Path, output: &Path) -> Result<(), PatchError> {
        log::debug!(
            "running {} -d -s {} {} {}",
            self.program_name(),
            source.display(),
            diff.display(),
            output.display()
        );

        // stdio is inherited so the tool's own diagnostics reach the user
        let status = Command::new(&self.program)
            .arg("-d")
            .arg("-s")
            .arg(source)
            .arg(diff)
            .arg(output)
            .status()
            .map_err(|e| PatchError::ToolUnavailable {
                program: self.program_name(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(PatchError::ToolFailed {
                exit_code: status.code(),
            });
        }

        Ok(())
    }
}
