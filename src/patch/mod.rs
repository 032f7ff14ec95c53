pub mod apply;
pub mod create;
pub mod store;

use std::fmt;
use std::io;

pub use apply::apply;
pub use create::create_patch;
pub use store::PatchStore;

/// File name of the game asset that patches replace
pub const ASSET_NAME: &str = "data.win";
/// Extension (without the dot) of diff files accepted by patch creation
pub const DIFF_EXTENSION: &str = "xdelta";
/// Directory name for the pristine copy of the asset
pub const VANILLA_DIR: &str = "vanilla";
/// Directory name for reconstructed patch assets
pub const PATCHES_DIR: &str = "patches";
/// Filename for the persisted configuration
pub const CONFIG_FILENAME: &str = "ptmm.json";
/// INI config written by earlier releases; recognised but never read
pub const LEGACY_CONFIG_FILENAME: &str = "ptmm.cfg";

/// Error type for patch operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// Configuration file missing, unreadable or malformed
    ConfigError { reason: String },
    /// Filesystem operation failed
    Io { path: String, reason: String },
    /// Replacing the live asset failed
    ApplyFailed { file: String, reason: String },
    /// Selected file is not an xdelta diff
    NotADiffFile(String),
    /// A patch with this name already exists
    PatchExists(String),
    /// Delta tool could not be started
    ToolUnavailable { program: String, reason: String },
    /// Delta tool ran but reported failure
    ToolFailed { exit_code: Option<i32> },
    /// Reading from or writing to the console failed
    Console { reason: String },
    /// Standard input was closed
    InputClosed,
}

impl PatchError {
    pub(crate) fn io(path: impl fmt::Display, e: io::Error) -> Self {
        PatchError::Io {
            path: path.to_string(),
            reason: e.to_string(),
        }
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::ConfigError { reason } => {
                write!(f, "configuration error: {}", reason)
            }
            PatchError::Io { path, reason } => {
                write!(f, "i/o error on '{}': {}", path, reason)
            }
            PatchError::ApplyFailed { file, reason } => {
                write!(f, "apply failed for '{}': {}", file, reason)
            }
            PatchError::NotADiffFile(file) => {
                write!(f, "'{}' is not a .{} file", file, DIFF_EXTENSION)
            }
            PatchError::PatchExists(name) => {
                write!(f, "a patch named '{}' already exists", name)
            }
            PatchError::ToolUnavailable { program, reason } => {
                write!(f, "could not run '{}': {}", program, reason)
            }
            PatchError::ToolFailed { exit_code } => match exit_code {
                Some(code) => write!(f, "delta tool failed (exit code {})", code),
                None => write!(f, "delta tool terminated by signal"),
            },
            PatchError::Console { reason } => {
                write!(f, "console error: {}", reason)
            }
            PatchError::InputClosed => write!(f, "input closed"),
        }
    }
}

impl std::error::Error for PatchError {}

/// Console I/O only; filesystem errors are mapped with their path via [`PatchError::io`].
impl From<io::Error> for PatchError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            PatchError::InputClosed
        } else {
            PatchError::Console {
                reason: e.to_string(),
            }
        }
    }
}
