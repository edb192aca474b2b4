//! Concurrent source loading and the title -> reading-time index

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

use super::{LoadError, TitleKey};
use crate::content::{FrontMatter, SourceLoader};

/// The fields the index needs from a source's front-matter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMeta {
    pub title: String,
    pub reading_time: String,
}

impl SourceMeta {
    /// Validate loaded front-matter; both fields must be non-blank
    pub fn from_front_matter(path: &Path, fm: &FrontMatter) -> Result<Self, LoadError> {
        let missing = |field| LoadError::MissingField {
            path: path.to_path_buf(),
            field,
        };
        let title = fm.title().ok_or_else(|| missing("title"))?;
        let reading_time = fm.reading_time().ok_or_else(|| missing("readingTime"))?;
        Ok(Self {
            title: title.to_string(),
            reading_time: reading_time.to_string(),
        })
    }

    pub fn key(&self) -> TitleKey {
        TitleKey::from_title(&self.title)
    }
}

/// Read and validate a single source
pub async fn load_source<L: SourceLoader>(
    loader: &L,
    path: &Path,
) -> Result<SourceMeta, LoadError> {
    let content = loader.read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (fm, _) = FrontMatter::parse(&content).map_err(|e| LoadError::FrontMatter {
        path: path.to_path_buf(),
        message: format!("{:#}", e),
    })?;
    SourceMeta::from_front_matter(path, &fm)
}

/// Load every source at once and collect them in completion order.
///
/// The first failure is returned and the remaining loads are aborted.
pub async fn load_sources<L: SourceLoader>(
    loader: Arc<L>,
    sources: &[PathBuf],
) -> Result<Vec<(PathBuf, SourceMeta)>, LoadError> {
    let mut tasks = JoinSet::new();
    for path in sources {
        let loader = Arc::clone(&loader);
        let path = path.clone();
        tasks.spawn(async move {
            let meta = load_source(loader.as_ref(), &path).await?;
            Ok::<_, LoadError>((path, meta))
        });
    }

    let mut loaded = Vec::with_capacity(sources.len());
    while let Some(joined) = tasks.join_next().await {
        let (path, meta) = joined.map_err(|e| LoadError::Task(e.to_string()))??;
        tracing::debug!("Loaded reading time {:?} from {:?}", meta.reading_time, path);
        loaded.push((path, meta));
    }
    Ok(loaded)
}

/// Lookup table from normalized title to reading time, built per call
#[derive(Debug, Clone, Default)]
pub struct ReadingTimeIndex {
    entries: HashMap<TitleKey, String>,
}

impl ReadingTimeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the value it replaced
    pub fn insert(&mut self, key: TitleKey, reading_time: String) -> Option<String> {
        self.entries.insert(key, reading_time)
    }

    pub fn get(&self, key: &TitleKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Lookup by raw title
    pub fn get_title(&self, title: &str) -> Option<&str> {
        self.get(&TitleKey::from_title(title))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(PathBuf, SourceMeta)> for ReadingTimeIndex {
    /// Later entries win on duplicate titles
    fn from_iter<I: IntoIterator<Item = (PathBuf, SourceMeta)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (path, meta) in iter {
            let key = meta.key();
            if let Some(previous) = index.insert(key.clone(), meta.reading_time) {
                tracing::warn!(
                    "Duplicate title key {:?} from {:?}; replacing reading time {:?}",
                    key.as_str(),
                    path,
                    previous
                );
            }
        }
        index
    }
}

/// Build a fresh index from all `sources`. Fails fast on the first bad source.
pub async fn build_reading_time_index<L: SourceLoader>(
    loader: Arc<L>,
    sources: &[PathBuf],
) -> Result<ReadingTimeIndex, LoadError> {
    let loaded = load_sources(loader, sources).await?;
    let index: ReadingTimeIndex = loaded.into_iter().collect();
    tracing::info!(
        "Indexed {} reading times from {} sources",
        index.len(),
        sources.len()
    );
    Ok(index)
}
