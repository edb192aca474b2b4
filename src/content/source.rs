//! Readers for post source documents

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

/// Reads the raw text of a post source.
///
/// Implementations must be shareable across tasks: the enricher issues
/// every read of a batch concurrently.
pub trait SourceLoader: Send + Sync + 'static {
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send;
}

/// Reads sources from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceLoader;

impl SourceLoader for FsSourceLoader {
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send {
        let path = path.to_path_buf();
        async move { tokio::fs::read_to_string(path).await }
    }
}

/// In-memory sources keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemorySourceLoader {
    sources: HashMap<PathBuf, Result<String, String>>,
}

impl MemorySourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a readable source
    pub fn with_source(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.sources.insert(path.into(), Ok(content.into()));
        self
    }

    /// Register a source whose read fails with `message`
    pub fn with_failure(mut self, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        self.sources.insert(path.into(), Err(message.into()));
        self
    }

    /// Registered paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.sources.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl SourceLoader for MemorySourceLoader {
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send {
        let result = match self.sources.get(path) {
            Some(Ok(content)) => Ok(content.clone()),
            Some(Err(message)) => Err(io::Error::new(io::ErrorKind::Other, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no source registered for {:?}", path),
            )),
        };
        std::future::ready(result)
    }
}
