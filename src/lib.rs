//! Streaming RSS 2.0 feed writer.
//!
//! Domain entities (categories, people, links, images, items) are written
//! one at a time into a caller-owned `quick_xml::Writer`. The
//! `<rss version="2.0"><channel>` wrapper opens lazily on the first write
//! and closes when the writer is finished or dropped.
//!
//! ```no_run
//! use quick_xml::Writer;
//! use rss_feed_writer::{Category, Rss20FeedWriter};
//!
//! # fn main() -> Result<(), rss_feed_writer::errors::FeedError> {
//! let mut xml = Writer::new(Vec::new());
//! let mut writer = Rss20FeedWriter::new(&mut xml);
//! writer.write_category(&Category::new("Test Category"))?;
//! writer.finish()?;
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod errors;
pub mod models;
pub mod rss20;

pub use content::{SyndicationAttribute, SyndicationContent};
pub use errors::FeedError;
pub use models::{Category, Image, Item, Link, LinkRelation, Person, PersonRole};
pub use rss20::formatter::Rss20Formatter;
pub use rss20::writer::Rss20FeedWriter;

/// Writer configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Extra attributes on `<rss>`, after `version`, e.g. namespace
    /// declarations.
    pub rss_attributes: Vec<SyndicationAttribute>,
}
