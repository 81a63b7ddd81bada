use crate::domain::ports::Storage;
use crate::utils::error::{ReadmeError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File system storage rooted at `base_path`. Absolute paths ignore the base.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tokio::fs::read(&full_path)
            .await
            .map_err(|e| ReadmeError::io(full_path, e))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = self.resolve(path);
        write_atomic(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

/// Writes through a temp file in the destination directory and renames it
/// over the target, so readers never see a half written file.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| ReadmeError::io(&parent, e))?;

    let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| ReadmeError::io(&parent, e))?;
    tmp.write_all(data)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| ReadmeError::io(tmp.path(), e))?;

    tmp.persist(path)
        .map_err(|e| ReadmeError::io(path, e.error))?;
    Ok(())
}
