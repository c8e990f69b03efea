/// File delivery for exported documents

use std::path::{Path, PathBuf};

use crate::Result;

/// One delivered payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub mime: String,
    pub file_name: String,
    pub payload: String,
}

/// The platform primitive that turns a string into a file the user gets.
/// The engine only produces the payload and the file name.
pub trait DownloadSink: Send + Sync {
    fn deliver(&self, mime: &str, payload: &str, file_name: &str) -> Result<()>;
}

/// Writes deliveries into a directory on disk.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, mime: &str, payload: &str, file_name: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, payload.as_bytes())?;
        log::info!("wrote {} ({} bytes, {})", path.display(), payload.len(), mime);
        Ok(())
    }
}

/// Keeps deliveries in memory; used by tests and embedders that want the
/// bytes rather than a file.
pub struct MemorySink {
    delivered: std::sync::Mutex<Vec<Download>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink { delivered: std::sync::Mutex::new(Vec::new()) }
    }

    pub fn downloads(&self) -> Vec<Download> {
        self.delivered.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&self, mime: &str, payload: &str, file_name: &str) -> Result<()> {
        let mut d = self
            .delivered
            .lock()
            .map_err(|_| crate::Error::Other("download sink poisoned".into()))?;
        d.push(Download {
            mime: mime.to_string(),
            file_name: file_name.to_string(),
            payload: payload.to_string(),
        });
        Ok(())
    }
}
