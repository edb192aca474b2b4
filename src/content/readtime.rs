//! Reading-time estimation from markdown

use pulldown_cmark::{Event, Parser};

/// Count the words a reader sees, ignoring markup
pub fn count_words(markdown: &str) -> usize {
    Parser::new(markdown)
        .map(|event| match event {
            Event::Text(text) | Event::Code(text) => text.split_whitespace().count(),
            _ => 0,
        })
        .sum()
}

/// Format an estimate like the front-matter values it stands in for,
/// e.g. "3 min read". Never less than one minute.
pub fn estimate_reading_time(markdown: &str, words_per_minute: usize) -> String {
    let minutes = count_words(markdown).div_ceil(words_per_minute.max(1)).max(1);
    format!("{} min read", minutes)
}
