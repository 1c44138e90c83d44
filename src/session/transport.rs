//! Moving package bytes to and from storage.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::store::PackagePayload;

/// Extension given to package files that have none.
pub const PACKAGE_EXTENSION: &str = "json";

/// Reads and writes package files by name.
pub trait PackageTransport {
    /// Stores `bytes` under `file_name`.
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> EngineResult<()>;

    /// Reads the package stored under `file_name`.
    fn read(&mut self, file_name: &str) -> EngineResult<PackagePayload>;
}

/// A transport keeping package files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryTransport {
    root: PathBuf,
}

impl DirectoryTransport {
    /// Creates a transport rooted at `root`. The directory is created on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory package files live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `file_name` to a path inside the root.
    ///
    /// Names containing path separators, or naming the current or parent
    /// directory, are rejected. `.json` is appended when the name has no
    /// extension.
    pub fn resolve(&self, file_name: &str) -> EngineResult<PathBuf> {
        let name = file_name.trim();
        if name.is_empty() {
            return Err(EngineError::validation("file_name", "must not be empty"));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(EngineError::validation(
                "file_name",
                format!("'{}' must be a plain file name", name),
            ));
        }

        let mut path = self.root.join(name);
        if path.extension().is_none() {
            path.set_extension(PACKAGE_EXTENSION);
        }
        Ok(path)
    }
}

fn storage_error(path: &Path, message: String) -> EngineError {
    EngineError::Storage {
        path: path.display().to_string(),
        message,
    }
}

impl PackageTransport for DirectoryTransport {
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> EngineResult<()> {
        let path = self.resolve(file_name)?;

        fs::create_dir_all(&self.root).map_err(|e| {
            storage_error(&self.root, format!("Failed to create directory: {}", e))
        })?;

        // Same directory as the target so the rename stays atomic.
        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        let file = File::create(&temp_path)
            .map_err(|e| storage_error(&temp_path, format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .and_then(|_| writer.flush())
            .and_then(|_| writer.get_ref().sync_all())
            .map_err(|e| {
                let _ = fs::remove_file(&temp_path);
                storage_error(&temp_path, format!("Failed to write data: {}", e))
            })?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            storage_error(&path, format!("Failed to rename temp file: {}", e))
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "Wrote package file");
        Ok(())
    }

    fn read(&mut self, file_name: &str) -> EngineResult<PackagePayload> {
        let path = self.resolve(file_name)?;
        let bytes = fs::read(&path)
            .map_err(|e| storage_error(&path, format!("Failed to read file: {}", e)))?;

        debug!(path = %path.display(), bytes = bytes.len(), "Read package file");
        Ok(PackagePayload::Bytes(bytes))
    }
}
