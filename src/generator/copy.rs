//! Static asset copier.

use crate::{error::Error, Result};
use std::fs;
use std::path::Path;

/// Mirrors `src` into `dest`, deleting `dest` first.
pub fn copy_directory<S: AsRef<Path>, D: AsRef<Path>>(src: S, dest: D) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    if !src.is_dir() {
        return Err(Error::SourceDirNotFound(src.to_path_buf()));
    }
    if dest.exists() {
        log::info!("Deleting directory {}", dest.display());
        fs::remove_dir_all(dest)?;
    }
    copy_tree(src, dest)
}

fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;

    for entry in fs::read_dir(src)? {
        let path = entry?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            log::info!("Copying directory {}", path.display());
            copy_tree(&path, &target)?;
        } else {
            log::info!("Copying file {}", path.display());
            fs::copy(&path, &target)?;
        }
    }
    Ok(())
}
