use std::path::PathBuf;

use crate::patch::DIFF_EXTENSION;

/// Modal chooser for the game folder and diff files.
///
/// `None` means the user cancelled.
pub trait Picker {
    fn pick_folder(&self, title: &str) -> Option<PathBuf>;
    fn pick_diff_file(&self, title: &str) -> Option<PathBuf>;
}

/// Native dialogs via `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogPicker;

impl Picker for DialogPicker {
    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        non_empty(rfd::FileDialog::new().set_title(title).pick_folder())
    }

    fn pick_diff_file(&self, title: &str) -> Option<PathBuf> {
        non_empty(
            rfd::FileDialog::new()
                .set_title(title)
                .add_filter("Patch Files", &[DIFF_EXTENSION])
                .pick_file(),
        )
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}
