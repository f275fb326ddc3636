//! Filesystem store for uploaded product images.

use std::{
    io,
    path::{Path, PathBuf},
};

use tokio::fs;
use tracing::debug;

/// Writes image files under a single uploads directory. Filenames are
/// generated by the caller and never taken from user input.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn save(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.root).await?;

        let path = self.root.join(filename);

        debug!(path = %path.display(), size = bytes.len(), "writing image");

        fs::write(path, bytes).await
    }

    /// Removes a stored file. A file that is already gone is not an error;
    /// the database row is the source of truth.
    pub async fn remove(&self, filename: &str) -> io::Result<()> {
        let path = self.root.join(filename);

        match fs::remove_file(&path).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn save_then_remove_round_trips() -> TestResult {
        let dir = std::env::temp_dir().join(format!("paperbloom-{}", uuid::Uuid::new_v4()));
        let store = FsImageStore::new(&dir);

        store.save("a.png", b"png bytes").await?;
        assert_eq!(fs::read(dir.join("a.png")).await?, b"png bytes");

        store.remove("a.png").await?;
        assert!(!dir.join("a.png").exists());

        fs::remove_dir_all(&dir).await?;

        Ok(())
    }

    #[tokio::test]
    async fn remove_missing_file_is_ok() -> TestResult {
        let dir = std::env::temp_dir().join(format!("paperbloom-{}", uuid::Uuid::new_v4()));
        let store = FsImageStore::new(&dir);

        store.remove("never-written.png").await?;

        Ok(())
    }
}
