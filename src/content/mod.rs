//! Content module - post sources, front-matter and post records

mod frontmatter;
pub mod loader;
mod post;
pub mod readtime;
pub mod source;

pub use frontmatter::FrontMatter;
pub use loader::{discover_sources, ContentLoader};
pub use post::{PostData, PostRecord};
pub use source::{FsSourceLoader, MemorySourceLoader, SourceLoader};
