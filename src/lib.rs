//! blog-readtime: reading times for static blog posts
//!
//! Posts are loaded from a content directory as records, then enriched
//! with the `readingTime` stored in each post source's front-matter,
//! matched by slugified title.

pub mod commands;
pub mod config;
pub mod content;
pub mod enrich;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, FsSourceLoader, PostRecord};
use enrich::Enricher;

/// A blog checkout on disk
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post sources
    pub content_dir: PathBuf,
}

impl Blog {
    /// Open a blog from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Scan the content directory once and build an enricher over the result
    pub fn enricher(&self) -> Result<Enricher<FsSourceLoader>> {
        let sources = ContentLoader::new(self).sources()?;
        tracing::debug!("Discovered {} post sources", sources.len());
        Ok(Enricher::new(FsSourceLoader, sources))
    }

    /// Load all posts, newest first, with reading times attached
    pub async fn load_enriched_posts(&self) -> Result<Vec<PostRecord>> {
        let mut posts = ContentLoader::new(self).load_posts()?;
        self.enricher()?.enrich(&mut posts).await?;
        Ok(posts)
    }
}
