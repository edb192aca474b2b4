//! Report reading-time data problems in post sources
//!
//! Enrichment fails on the first source without a title or reading time
//! and silently picks one value when titles collide. This walks every
//! source instead and reports all such problems together.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::content::readtime::estimate_reading_time;
use crate::content::ContentLoader;
use crate::enrich::TitleKey;
use crate::Blog;

/// Problems found across all post sources
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of sources inspected
    pub sources: usize,
    /// Sources that could not be read or parsed
    pub unreadable: Vec<(PathBuf, String)>,
    /// Sources without a `title`
    pub untitled: Vec<PathBuf>,
    /// Sources without a `readingTime`, with an estimate from the body
    pub missing_reading_time: Vec<MissingReadingTime>,
    /// Title keys shared by more than one source
    pub duplicates: BTreeMap<TitleKey, Vec<PathBuf>>,
}

#[derive(Debug)]
pub struct MissingReadingTime {
    pub path: PathBuf,
    pub title: String,
    pub suggestion: String,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.unreadable.is_empty()
            && self.untitled.is_empty()
            && self.missing_reading_time.is_empty()
            && self.duplicates.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.unreadable.len()
            + self.untitled.len()
            + self.missing_reading_time.len()
            + self.duplicates.len()
    }
}

/// Inspect every source matched by the configured pattern
pub fn inspect(blog: &Blog) -> Result<CheckReport> {
    let loader = ContentLoader::new(blog);
    let sources = loader.sources()?;
    let mut report = CheckReport {
        sources: sources.len(),
        ..Default::default()
    };
    let mut by_key: BTreeMap<TitleKey, Vec<PathBuf>> = BTreeMap::new();

    for path in sources {
        let (fm, body) = match loader.read_front_matter(&path) {
            Ok(parsed) => parsed,
            Err(e) => {
                report.unreadable.push((path, format!("{:#}", e)));
                continue;
            }
        };

        let Some(title) = fm.title() else {
            report.untitled.push(path);
            continue;
        };
        by_key
            .entry(TitleKey::from_title(title))
            .or_default()
            .push(path.clone());

        if fm.reading_time().is_none() {
            report.missing_reading_time.push(MissingReadingTime {
                title: title.to_string(),
                suggestion: estimate_reading_time(&body, blog.config.words_per_minute),
                path,
            });
        }
    }

    report.duplicates = by_key
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .collect();

    Ok(report)
}

/// Print the report; fails when any problem was found
pub fn run(blog: &Blog) -> Result<()> {
    let report = inspect(blog)?;
    println!("Checked {} sources", report.sources);

    for (path, error) in &report.unreadable {
        println!("  unreadable: {:?}: {}", path, error);
    }
    for path in &report.untitled {
        println!("  no title: {:?}", path);
    }
    for missing in &report.missing_reading_time {
        println!(
            "  no readingTime: {:?} ({}), estimated \"{}\"",
            missing.path, missing.title, missing.suggestion
        );
    }
    for (key, paths) in &report.duplicates {
        println!("  duplicate title key {:?}:", key.as_str());
        for path in paths {
            println!("    {:?}", path);
        }
    }

    if !report.is_clean() {
        anyhow::bail!("{} problem(s) found", report.problem_count());
    }
    println!("No problems found");
    Ok(())
}
