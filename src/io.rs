//! Reading and writing the document being indexed.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// How the regenerated document replaces the original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write to a temp file next to the target, then rename over it
    #[default]
    Atomic,
    /// Truncate and overwrite in place; a failure may leave a partial file
    Direct,
}

/// Read the whole document.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the document with new content.
pub fn write_document(path: &Path, content: &str, mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::Atomic => write_atomic(path, content),
        WriteMode::Direct => fs::write(path, content).map_err(|source| write_error(path, source)),
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    // Rename over the link target, not the link itself
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    if has_other_links(&target) {
        log::info!("{} has other hard links, writing in place", target.display());
        return write_document(&target, content, WriteMode::Direct);
    }

    // Same directory keeps the rename on one filesystem
    let parent_dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = match tempfile::NamedTempFile::new_in(parent_dir) {
        Ok(temp_file) => temp_file,
        Err(e) if target.is_file() => {
            log::info!(
                "cannot create temp file in {}: {}, writing in place",
                parent_dir.display(),
                e
            );
            return write_document(&target, content, WriteMode::Direct);
        }
        Err(source) => return Err(write_error(path, source)),
    };
    temp_file
        .write_all(content.as_bytes())
        .map_err(|source| write_error(path, source))?;
    temp_file
        .flush()
        .map_err(|source| write_error(path, source))?;

    // The temp file is created 0600; carry over the original permissions
    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(temp_file.path(), metadata.permissions())
            .map_err(|source| write_error(path, source))?;
    }

    temp_file.persist(&target).map_err(|source| Error::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(unix)]
fn has_other_links(path: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    fs::metadata(path).is_ok_and(|metadata| metadata.nlink() > 1)
}

#[cfg(not(unix))]
fn has_other_links(_path: &Path) -> bool {
    false
}

fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source,
    }
}
