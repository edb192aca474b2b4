//! Post record model

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::FrontMatter;

/// A blog post as handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    /// Slug derived from the file name
    pub id: String,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Full source file path
    #[serde(skip)]
    pub full_source: PathBuf,

    /// Raw markdown body below the front-matter
    #[serde(skip)]
    pub body: String,

    /// Parsed front-matter data
    pub data: PostData,
}

/// Front-matter data of a parsed post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub pub_datetime: Option<DateTime<Local>>,
    pub mod_datetime: Option<DateTime<Local>>,
    pub cover_image: Option<String>,
    pub og_image: Option<String>,
    pub featured: bool,
    pub draft: bool,
    pub tags: Vec<String>,

    /// Filled in by the enricher; `None` when no source matched
    pub reading_time: Option<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl PostRecord {
    /// Create a new record with minimal required fields
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let full_source = PathBuf::from(&source);
        let id = full_source
            .file_stem()
            .and_then(|s| s.to_str())
            .map(slug::slugify)
            .unwrap_or_default();
        Self {
            id,
            source,
            full_source,
            body: String::new(),
            data: PostData {
                title: title.into(),
                ..Default::default()
            },
        }
    }

    /// Build a record from parsed front-matter.
    ///
    /// `readingTime` is not copied; records receive it from the enricher.
    pub fn from_front_matter(fm: FrontMatter, title: String, source: String) -> Self {
        let mut post = Self::new(title, source);
        post.data.pub_datetime = fm.parse_pub_datetime();
        post.data.mod_datetime = fm.parse_mod_datetime();
        post.data.author = fm.author;
        post.data.description = fm.description;
        post.data.cover_image = fm.cover_image;
        post.data.og_image = fm.og_image;
        post.data.featured = fm.featured;
        post.data.draft = fm.draft;
        post.data.tags = fm.tags;
        post.data.extra = fm.extra;
        post
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }

    pub fn reading_time(&self) -> Option<&str> {
        self.data.reading_time.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let post = PostRecord::new("Hello World", "2024/Hello World.md");
        assert_eq!(post.id, "hello-world");
        assert_eq!(post.title(), "Hello World");
        assert_eq!(post.reading_time(), None);
    }

    #[test]
    fn test_from_front_matter_skips_reading_time() {
        let (fm, _) = FrontMatter::parse(
            "---\ntitle: T\nreadingTime: 2 min read\ndescription: D\n---\n",
        )
        .unwrap();
        let post = PostRecord::from_front_matter(fm, "T".into(), "t.md".into());
        assert_eq!(post.data.description.as_deref(), Some("D"));
        assert_eq!(post.reading_time(), None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut post = PostRecord::new("Card", "card.md");
        post.data.reading_time = Some("4 min read".into());
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["data"]["readingTime"], "4 min read");
        assert!(json["data"].get("pubDatetime").is_some());
        assert!(json.get("body").is_none());
    }
}
