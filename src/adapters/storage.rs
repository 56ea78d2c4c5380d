use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes rendered labels below a base directory.
#[derive(Debug, Clone)]
pub struct LocalOutput {
    base_path: PathBuf,
}

impl LocalOutput {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the full path written.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(full_path)
    }
}
