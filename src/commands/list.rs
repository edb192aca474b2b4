//! List posts with their reading times

use anyhow::Result;

use crate::content::PostRecord;
use crate::Blog;

/// Print every post, newest first, as text or JSON
pub async fn run(blog: &Blog, json: bool) -> Result<()> {
    let posts = blog.load_enriched_posts().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("  {}", format_line(post, &blog.config.date_format));
    }

    Ok(())
}

/// `date - title [reading time]`, with placeholders for missing values
pub fn format_line(post: &PostRecord, date_format: &str) -> String {
    let date = post
        .data
        .pub_datetime
        .map(|d| d.format(date_format).to_string())
        .unwrap_or_else(|| "----------".to_string());
    format!(
        "{} - {} [{}]",
        date,
        post.title(),
        post.reading_time().unwrap_or("-")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let mut post = PostRecord::new("Hello World", "hello.md");
        assert_eq!(format_line(&post, "%Y-%m-%d"), "---------- - Hello World [-]");

        let (fm, _) = crate::content::FrontMatter::parse(
            "---\ntitle: Hello World\npubDatetime: 2024-03-01\n---\n",
        )
        .unwrap();
        post.data.pub_datetime = fm.parse_pub_datetime();
        post.data.reading_time = Some("3 min read".into());
        assert_eq!(
            format_line(&post, "%Y-%m-%d"),
            "2024-03-01 - Hello World [3 min read]"
        );
    }
}
