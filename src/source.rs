use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extension every program file must carry.
pub const SOURCE_EXTENSION: &str = "ls";

/// Source loading errors
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("file not found: '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a .ls program", .0.display())]
    WrongExtension(PathBuf),

    #[error("failed to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a `.ls` program into memory
///
/// # Errors
/// If the path has another extension, does not exist, or cannot be read.
pub fn load(path: &Path) -> Result<String, SourceError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(SourceError::WrongExtension(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
