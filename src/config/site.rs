//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // Content
    /// Directory holding the post sources, relative to the base directory
    pub content_dir: String,
    /// Glob matched against paths relative to `content_dir`
    pub post_pattern: String,
    pub render_drafts: bool,

    // Reading time
    pub words_per_minute: usize,

    // Output
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: String::new(),

            content_dir: "src/content/blog".to_string(),
            post_pattern: "*.md".to_string(),
            render_drafts: false,

            words_per_minute: 200,

            date_format: "%Y-%m-%d".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the loaders cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.post_pattern.trim().is_empty() {
            anyhow::bail!("post_pattern must not be empty");
        }
        glob::Pattern::new(&self.post_pattern)
            .with_context(|| format!("Invalid post_pattern {:?}", self.post_pattern))?;
        if self.words_per_minute == 0 {
            anyhow::bail!("words_per_minute must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "src/content/blog");
        assert_eq!(config.post_pattern, "*.md");
        assert_eq!(config.words_per_minute, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
content_dir: posts
post_pattern: "**/*.md"
render_drafts: true
theme: paper
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.post_pattern, "**/*.md");
        assert!(config.render_drafts);
        assert_eq!(config.words_per_minute, 200);
        assert!(config.extra.contains_key("theme"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = SiteConfig {
            words_per_minute: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SiteConfig {
            post_pattern: "[".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: Loaded\nwords_per_minute: 250\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "Loaded");
        assert_eq!(config.words_per_minute, 250);
    }
}
