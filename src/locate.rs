//! Default game installation paths.

use std::env;
use std::path::{Path, PathBuf};

use crate::patch::ASSET_NAME;

/// Environment variable that points directly at an installation
pub const GAME_DIR_ENV: &str = "PTMM_GAME_DIR";

/// What a candidate path is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// The user's home directory
    Home,
    /// The filesystem root of the current drive
    Root,
}

/// A default installation path for one host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallCandidate {
    /// Value of `std::env::consts::OS` this candidate applies to
    pub os: &'static str,
    pub base: Base,
    pub relative: &'static str,
}

impl InstallCandidate {
    fn resolve(&self, home: Option<&Path>, root: &Path) -> Option<PathBuf> {
        let base = match self.base {
            Base::Home => home?,
            Base::Root => root,
        };
        Some(base.join(self.relative))
    }
}

/// Steam library locations, in lookup order.
pub const CANDIDATES: &[InstallCandidate] = &[
    InstallCandidate {
        os: "windows",
        base: Base::Root,
        relative: r"Program Files (x86)\Steam\steamapps\common\Pizza Tower",
    },
    InstallCandidate {
        os: "windows",
        base: Base::Root,
        relative: r"Program Files\Steam\steamapps\common\Pizza Tower",
    },
    InstallCandidate {
        os: "linux",
        base: Base::Home,
        relative: ".steam/root/steamapps/common/Pizza Tower",
    },
    InstallCandidate {
        os: "linux",
        base: Base::Home,
        relative: ".local/share/Steam/steamapps/common/Pizza Tower",
    },
    InstallCandidate {
        os: "linux",
        base: Base::Home,
        relative: ".var/app/com.valvesoftware.Steam/.local/share/Steam/steamapps/common/Pizza Tower",
    },
    InstallCandidate {
        os: "macos",
        base: Base::Home,
        relative: "Library/Application Support/Steam/steamapps/common/Pizza Tower",
    },
];

/// Whether `dir` looks like a game installation.
pub fn is_install_dir(dir: &Path) -> bool {
    dir.join(ASSET_NAME).is_file()
}

/// Find the installation on this machine.
///
/// `PTMM_GAME_DIR` wins when it points at a valid installation; otherwise the
/// default Steam locations for the host OS are tried in order.
pub fn locate_install() -> Option<PathBuf> {
    let override_dir = env::var_os(GAME_DIR_ENV).map(PathBuf::from);
    let home = dirs::home_dir();
    let root = PathBuf::from(std::path::MAIN_SEPARATOR_STR);
    locate_with(
        override_dir.as_deref(),
        CANDIDATES,
        env::consts::OS,
        home.as_deref(),
        &root,
    )
}

/// `override_dir` if it is an installation, else the first matching candidate.
pub fn locate_with(
    override_dir: Option<&Path>,
    candidates: &[InstallCandidate],
    os: &str,
    home: Option<&Path>,
    root: &Path,
) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        if is_install_dir(dir) {
            log::debug!("using {} from {}", dir.display(), GAME_DIR_ENV);
            return Some(dir.to_path_buf());
        }
        log::warn!("{} is set but {} has no {}", GAME_DIR_ENV, dir.display(), ASSET_NAME);
    }

    locate_in(candidates, os, home, root)
}

/// First candidate for `os` that resolves to an installation.
pub fn locate_in(
    candidates: &[InstallCandidate],
    os: &str,
    home: Option<&Path>,
    root: &Path,
) -> Option<PathBuf> {
    candidates
        .iter()
        .filter(|c| c.os == os)
        .filter_map(|c| c.resolve(home, root))
        .inspect(|dir| log::debug!("checking {}", dir.display()))
        .find(|dir| is_install_dir(dir))
}
