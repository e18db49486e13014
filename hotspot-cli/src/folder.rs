//! Output folder handling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Base folder for runs without an explicit target folder.
pub fn default_base_folder() -> PathBuf {
    std::env::temp_dir().join("hotspot")
}

/// Creates `folder` and its parents if needed.
pub fn make_folder(folder: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(folder)?;
    Ok(folder.to_path_buf())
}

/// Creates the first free numbered folder (`1`, `2`, ...) under `base`.
pub fn make_enumerated_folder(base: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(base)?;
    let mut index: u64 = 1;
    loop {
        let candidate = base.join(index.to_string());
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => index += 1,
            Err(e) => return Err(e),
        }
    }
}
