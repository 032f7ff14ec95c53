use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Replace `target` with the contents of `source`.
///
/// The data is staged in a temporary file next to `target` and then renamed
/// over it, so `target` always holds either its old or its new contents.
/// An existing `target` keeps its permissions; the source's are not copied.
pub fn replace_file(source: &Path, target: &Path) -> io::Result<()> {
    let dir = target.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no parent directory", target.display()),
        )
    })?;

    let mut staged = tempfile::Builder::new()
        .prefix(".ptmm-")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    let mut input = File::open(source)?;
    io::copy(&mut input, staged.as_file_mut())?;
    staged.as_file_mut().flush()?;
    staged.as_file().sync_all()?;

    if let Ok(existing) = fs::metadata(target) {
        staged.as_file().set_permissions(existing.permissions())?;
    }

    staged.persist(target).map_err(|e| e.error)?;
    Ok(())
}
