use crate::domain::ports::PageStore;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 把頁面快照寫到本機檔案，每次覆寫
#[derive(Debug, Clone)]
pub struct LocalSnapshot {
    path: PathBuf,
}

impl LocalSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageStore for LocalSnapshot {
    async fn write_page(&self, html: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, html).await?;
        tracing::debug!("Page snapshot written to {}", self.path.display());
        Ok(())
    }
}
