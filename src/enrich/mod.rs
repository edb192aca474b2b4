//! Reading-time enrichment
//!
//! Post records carry metadata parsed by the content collection, but the
//! reading time lives in each source's own front-matter. The enricher loads
//! all sources concurrently, indexes their reading times by normalized
//! title and writes the matching value onto every record.
//!
//! Source discovery happens once, up front; the enricher only receives the
//! resulting list of paths and a [`SourceLoader`] to read them with.

mod error;
mod index;
mod key;

pub use error::LoadError;
pub use index::{
    build_reading_time_index, load_source, load_sources, ReadingTimeIndex, SourceMeta,
};
pub use key::TitleKey;

use std::path::PathBuf;
use std::sync::Arc;

use crate::content::{PostRecord, SourceLoader};

/// Attaches reading times to post records
pub struct Enricher<L> {
    loader: Arc<L>,
    sources: Vec<PathBuf>,
}

impl<L: SourceLoader> Enricher<L> {
    pub fn new(loader: L, sources: Vec<PathBuf>) -> Self {
        Self {
            loader: Arc::new(loader),
            sources,
        }
    }

    /// Sources this enricher reads from
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Build a fresh index from the current state of every source
    pub async fn build_index(&self) -> Result<ReadingTimeIndex, LoadError> {
        build_reading_time_index(Arc::clone(&self.loader), &self.sources).await
    }

    /// Set `reading_time` on every record from its source's front-matter.
    ///
    /// Records are updated in place and handed back; order and length never
    /// change. A record without a matching source gets `None`. If any
    /// source fails to load, the error is returned and no record is touched.
    pub async fn enrich<'a>(
        &self,
        posts: &'a mut [PostRecord],
    ) -> Result<&'a mut [PostRecord], LoadError> {
        let index = self.build_index().await?;
        apply_index(posts, &index);
        Ok(posts)
    }
}

/// Join `index` against `posts`, returning how many records matched
pub fn apply_index(posts: &mut [PostRecord], index: &ReadingTimeIndex) -> usize {
    let mut matched = 0;
    for post in posts.iter_mut() {
        let reading_time = index.get_title(&post.data.title).map(str::to_string);
        if reading_time.is_some() {
            matched += 1;
        } else {
            tracing::debug!("No reading time for {:?}", post.data.title);
        }
        post.data.reading_time = reading_time;
    }
    matched
}
