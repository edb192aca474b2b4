//! Content loader - discovers post sources and loads post records

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, PostRecord};
use crate::Blog;

/// Enumerate every post source under `content_dir` whose relative path
/// matches `pattern`. `*` does not cross directories, `**` does.
///
/// A missing directory yields an empty list. Paths are sorted.
pub fn discover_sources(content_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern =
        Pattern::new(pattern).with_context(|| format!("Invalid post pattern {:?}", pattern))?;
    if !content_dir.exists() {
        tracing::debug!("Content directory {:?} does not exist", content_dir);
        return Ok(Vec::new());
    }

    let options = MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    };

    let mut sources = Vec::new();
    for entry in WalkDir::new(content_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let relative = path.strip_prefix(content_dir).unwrap_or(path);
        if pattern.matches_path_with(relative, options) {
            sources.push(path.to_path_buf());
        }
    }

    sources.sort();
    Ok(sources)
}

/// Loads post records from the content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Post sources matching the configured pattern
    pub fn sources(&self) -> Result<Vec<PathBuf>> {
        discover_sources(&self.blog.content_dir, &self.blog.config.post_pattern)
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<PostRecord>> {
        let mut posts = Vec::new();

        for path in self.sources()? {
            match self.load_post(&path) {
                Ok(post) => {
                    if !post.data.draft || self.blog.config.render_drafts {
                        posts.push(post);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {:#}", path, e);
                }
            }
        }

        // Undated posts sort last
        posts.sort_by(|a, b| b.data.pub_datetime.cmp(&a.data.pub_datetime));

        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<PostRecord> {
        let (fm, body) = self.read_front_matter(path)?;

        // Get title from front-matter or filename
        let title = fm.title().map(str::to_string).unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let source = path
            .strip_prefix(&self.blog.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let mut post = PostRecord::from_front_matter(fm, title, source);
        post.full_source = path.to_path_buf();
        post.body = body;
        Ok(post)
    }

    /// Read a source and split it into front-matter and body
    pub fn read_front_matter(&self, path: &Path) -> Result<(FrontMatter, String)> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let (fm, body) = FrontMatter::parse(&content)?;
        Ok((fm, body.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn blog_at(base: &Path, config: SiteConfig) -> Blog {
        Blog::with_config(base, config)
    }

    #[test]
    fn test_discover_sources_top_level_only() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.md", "");
        write(dir.path(), "a.md", "");
        write(dir.path(), "notes.txt", "");
        write(dir.path(), "nested/c.md", "");

        let sources = discover_sources(dir.path(), "*.md").unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);

        let nested = discover_sources(dir.path(), "**/*.md").unwrap();
        assert!(nested.iter().any(|p| p.ends_with("nested/c.md")));
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sources = discover_sources(&dir.path().join("absent"), "*.md").unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_load_posts_sorted_and_drafts_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            content_dir: "posts".into(),
            ..Default::default()
        };
        let posts_dir = dir.path().join("posts");
        write(
            &posts_dir,
            "old.md",
            "---\ntitle: Old\npubDatetime: 2023-01-01\n---\nold",
        );
        write(
            &posts_dir,
            "new.md",
            "---\ntitle: New\npubDatetime: 2024-01-01\n---\nnew",
        );
        write(&posts_dir, "draft.md", "---\ntitle: Draft\ndraft: true\n---\n");
        write(&posts_dir, "untitled-post.md", "Just a body.");
        write(&posts_dir, "broken.md", "---\ntitle: [oops\n---\n");

        let blog = blog_at(dir.path(), config);
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["New", "Old", "untitled-post"]);
        assert_eq!(posts[0].source, "new.md");
        assert_eq!(posts[0].body, "new");
        assert!(posts.iter().all(|p| p.reading_time().is_none()));
    }

    #[test]
    fn test_render_drafts() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            content_dir: ".".into(),
            render_drafts: true,
            ..Default::default()
        };
        write(dir.path(), "draft.md", "---\ntitle: Draft\ndraft: true\n---\n");

        let blog = blog_at(dir.path(), config);
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].data.draft);
    }
}
