//! Title normalization shared by both sides of the join

use std::fmt;

/// Slugified post title used to match records against sources
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TitleKey(String);

impl TitleKey {
    /// The only normalization used for lookups. Index building and record
    /// matching must both go through here or the join silently misses.
    ///
    /// Lowercases, keeps Unicode letters and digits (CJK titles are not
    /// transliterated), drops punctuation and joins words with `-`.
    pub fn from_title(title: &str) -> Self {
        let mut key = String::with_capacity(title.len());
        let mut pending_dash = false;
        for c in title.trim().chars().flat_map(char::to_lowercase) {
            if c.is_alphanumeric() || c == '_' {
                if pending_dash && !key.is_empty() {
                    key.push('-');
                }
                pending_dash = false;
                key.push(c);
            } else if c.is_whitespace() || c == '-' {
                pending_dash = true;
            }
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TitleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_punctuation() {
        assert_eq!(TitleKey::from_title("Hello World").as_str(), "hello-world");
        assert_eq!(
            TitleKey::from_title("  Hello, World!  "),
            TitleKey::from_title("hello world")
        );
        assert_eq!(
            TitleKey::from_title("Rust: Async & Await").to_string(),
            "rust-async-await"
        );
        assert_eq!(TitleKey::from_title("snake_case - ok").as_str(), "snake_case-ok");
    }

    #[test]
    fn test_distinct_titles_stay_distinct() {
        assert_ne!(
            TitleKey::from_title("Second Post"),
            TitleKey::from_title("Hello World")
        );
    }

    #[test]
    fn test_cjk_titles_are_not_transliterated() {
        assert_eq!(TitleKey::from_title("公式").as_str(), "公式");
        assert_ne!(TitleKey::from_title("公式"), TitleKey::from_title("攻势"));
        assert_ne!(
            TitleKey::from_title("Rust 学习笔记"),
            TitleKey::from_title("Rust 雪夜笔记")
        );
        assert_eq!(
            TitleKey::from_title("Rust 学习笔记！"),
            TitleKey::from_title("rust 学习笔记")
        );
    }

    #[test]
    fn test_accents_are_kept() {
        assert_eq!(TitleKey::from_title("Café Crème").as_str(), "café-crème");
        assert_ne!(TitleKey::from_title("résumé"), TitleKey::from_title("resume"));
    }
}
