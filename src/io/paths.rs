// src/io/paths.rs
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Problems with user supplied input/output paths, reported before any
/// parsing starts.
#[derive(Error, Debug)]
pub enum PathError {
    #[error("{0}: path is a directory")]
    IsDirectory(PathBuf),

    #[error("{0}: file does not exist")]
    DoesNotExist(PathBuf),

    #[error("{0}: file is not readable")]
    NotReadable(PathBuf),

    #[error("{0}: file is not writable")]
    NotWritable(PathBuf),

    #[error("{0}: file already exists")]
    AlreadyExists(PathBuf),
}

/// An input must be an existing, readable, regular file.
pub fn check_input(path: &Path) -> Result<(), PathError> {
    let metadata = fs::metadata(path).map_err(|_| PathError::DoesNotExist(path.to_path_buf()))?;
    if metadata.is_dir() {
        return Err(PathError::IsDirectory(path.to_path_buf()));
    }
    match File::open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(PathError::DoesNotExist(path.to_path_buf())),
        Err(_) => Err(PathError::NotReadable(path.to_path_buf())),
    }
}

/// An output must not exist yet and its directory must accept new files.
pub fn check_output(path: &Path) -> Result<(), PathError> {
    if path.is_dir() {
        return Err(PathError::IsDirectory(path.to_path_buf()));
    }
    if path.exists() {
        return Err(PathError::AlreadyExists(path.to_path_buf()));
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match fs::metadata(parent) {
        // Permission bits say nothing about ownership, so try an actual write.
        Ok(metadata) if metadata.is_dir() => NamedTempFile::new_in(parent)
            .map(drop)
            .map_err(|_| PathError::NotWritable(path.to_path_buf())),
        Ok(_) => Err(PathError::NotWritable(path.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(PathError::DoesNotExist(parent.to_path_buf())),
        Err(_) => Err(PathError::NotWritable(path.to_path_buf())),
    }
}
