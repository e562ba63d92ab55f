//! The RSS 2.0 feed writer.
//!
//! `Rss20FeedWriter` borrows a caller-owned `quick_xml::Writer`, so the
//! caller can emit a declaration or wrap the feed in its own elements
//! before and after. The `<rss version="2.0"><channel>` wrapper opens on
//! the first write and closes on [`Rss20FeedWriter::finish`], or on drop if
//! `finish` was never reached.

use crate::Config;
use crate::content::{SyndicationContent, emit, validate_name};
use crate::errors::FeedError;
use crate::models::{Category, Image, Item, Link, Person};
use crate::rss20::constants::*;
use crate::rss20::formatter::Rss20Formatter;
use chrono::{DateTime, TimeZone, Weekday};
use log::{debug, trace, warn};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChannelState {
    Unopened,
    Opened,
    Closed,
}

pub struct Rss20FeedWriter<'w, W: Write> {
    xml: &'w mut Writer<W>,
    formatter: Rss20Formatter,
    config: Config,
    state: ChannelState,
}

impl<'w, W: Write> Rss20FeedWriter<'w, W> {
    pub fn new(xml: &'w mut Writer<W>) -> Self {
        Self::with_config(xml, Config::default())
    }

    pub fn with_config(xml: &'w mut Writer<W>, config: Config) -> Self {
        Self {
            xml,
            formatter: Rss20Formatter::new(),
            config,
            state: ChannelState::Unopened,
        }
    }

    /// Whether `<rss><channel>` has been written and not yet closed.
    pub fn is_channel_open(&self) -> bool {
        self.state == ChannelState::Opened
    }

    pub fn write_category(&mut self, category: &Category) -> Result<(), FeedError> {
        let content = self.formatter.category(category)?;
        self.write_content(&content)
    }

    pub fn write_person(&mut self, person: &Person) -> Result<(), FeedError> {
        let content = self.formatter.person(person)?;
        self.write_content(&content)
    }

    pub fn write_link(&mut self, link: &Link) -> Result<(), FeedError> {
        let content = self.formatter.link(link)?;
        self.write_content(&content)
    }

    pub fn write_image(&mut self, image: &Image) -> Result<(), FeedError> {
        let content = self.formatter.image(image)?;
        self.write_content(&content)
    }

    pub fn write_item(&mut self, item: &Item) -> Result<(), FeedError> {
        let content = self.formatter.item(item)?;
        self.write_content(&content)
    }

    pub fn write_title(&mut self, title: &str) -> Result<(), FeedError> {
        self.write_value(TITLE, title)
    }

    pub fn write_description(&mut self, description: &str) -> Result<(), FeedError> {
        self.write_value(DESCRIPTION, description)
    }

    /// Language code such as `en-us`.
    pub fn write_language(&mut self, language: &str) -> Result<(), FeedError> {
        self.write_value(LANGUAGE, language)
    }

    pub fn write_copyright(&mut self, copyright: &str) -> Result<(), FeedError> {
        self.write_value(COPYRIGHT, copyright)
    }

    pub fn write_generator(&mut self, generator: &str) -> Result<(), FeedError> {
        self.write_value(GENERATOR, generator)
    }

    pub fn write_docs(&mut self, docs: &Url) -> Result<(), FeedError> {
        self.write_value(DOCS, docs.as_str())
    }

    pub fn write_pub_date<Tz: TimeZone>(&mut self, instant: &DateTime<Tz>) -> Result<(), FeedError> {
        let content = self.formatter.date(PUB_DATE, instant);
        self.write_content(&content)
    }

    pub fn write_last_build_date<Tz: TimeZone>(
        &mut self,
        instant: &DateTime<Tz>,
    ) -> Result<(), FeedError> {
        let content = self.formatter.date(LAST_BUILD_DATE, instant);
        self.write_content(&content)
    }

    pub fn write_time_to_live(&mut self, ttl: Duration) -> Result<(), FeedError> {
        let content = self.formatter.time_to_live(ttl)?;
        self.write_content(&content)
    }

    pub fn write_skip_hours(&mut self, hours: &[u8]) -> Result<(), FeedError> {
        let content = self.formatter.skip_hours(hours)?;
        self.write_content(&content)
    }

    pub fn write_skip_days(&mut self, days: &[Weekday]) -> Result<(), FeedError> {
        let content = self.formatter.skip_days(days)?;
        self.write_content(&content)
    }

    pub fn write_cloud(
        &mut self,
        url: &Url,
        register_procedure: &str,
        protocol: &str,
    ) -> Result<(), FeedError> {
        let content = self.formatter.cloud(url, register_procedure, protocol)?;
        self.write_content(&content)
    }

    /// Writes `<name>value</name>` into the channel.
    pub fn write_value(&mut self, name: &str, value: &str) -> Result<(), FeedError> {
        self.write_content(&SyndicationContent::text(name, value))
    }

    /// Writes an arbitrary element tree into the channel.
    pub fn write_content(&mut self, content: &SyndicationContent) -> Result<(), FeedError> {
        self.open_channel()?;
        trace!("Writing <{}>", content.name);
        content.write_to(self.xml)
    }

    /// Writes `fragment` into the channel verbatim, without escaping.
    pub fn write_raw(&mut self, fragment: &str) -> Result<(), FeedError> {
        self.open_channel()?;
        trace!("Writing raw fragment ({} bytes)", fragment.len());
        emit(self.xml, Event::Text(BytesText::from_escaped(fragment)))
    }

    /// Closes `</channel></rss>` if anything was written.
    ///
    /// Dropping the writer does the same but can only log a failure.
    pub fn finish(mut self) -> Result<(), FeedError> {
        self.close_channel()
    }

    fn open_channel(&mut self) -> Result<(), FeedError> {
        if self.state != ChannelState::Unopened {
            return Ok(());
        }

        let mut rss = BytesStart::new(RSS);
        rss.push_attribute((VERSION_ATTR, VERSION));
        for attribute in &self.config.rss_attributes {
            validate_name(&attribute.name)?;
            rss.push_attribute((attribute.name.as_str(), attribute.value.as_str()));
        }

        emit(self.xml, Event::Start(rss))?;
        emit(self.xml, Event::Start(BytesStart::new(CHANNEL)))?;
        self.state = ChannelState::Opened;
        debug!("Opened RSS {} channel", VERSION);
        Ok(())
    }

    fn close_channel(&mut self) -> Result<(), FeedError> {
        if self.state != ChannelState::Opened {
            self.state = ChannelState::Closed;
            return Ok(());
        }

        // Mark closed first so a failure here is not retried from drop.
        self.state = ChannelState::Closed;
        emit(self.xml, Event::End(BytesEnd::new(CHANNEL)))?;
        emit(self.xml, Event::End(BytesEnd::new(RSS)))?;
        debug!("Closed RSS {} channel", VERSION);
        Ok(())
    }
}

impl<W: Write> Drop for Rss20FeedWriter<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = self.close_channel() {
            warn!("Failed to close RSS channel on drop: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SyndicationAttribute;
    use pretty_assertions::assert_eq;

    fn output(xml: Writer<Vec<u8>>) -> String {
        String::from_utf8(xml.into_inner()).unwrap()
    }

    #[test]
    fn test_nothing_written_without_writes() {
        let mut xml = Writer::new(Vec::new());
        let writer = Rss20FeedWriter::new(&mut xml);
        assert!(!writer.is_channel_open());
        writer.finish().unwrap();

        assert_eq!(output(xml), "");
    }

    #[test]
    fn test_channel_opens_once() {
        let mut xml = Writer::new(Vec::new());
        let mut writer = Rss20FeedWriter::new(&mut xml);
        writer.write_title("A").unwrap();
        assert!(writer.is_channel_open());
        writer.write_title("B").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            output(xml),
            r#"<rss version="2.0"><channel><title>A</title><title>B</title></channel></rss>"#
        );
    }

    #[test]
    fn test_drop_closes_channel() {
        let mut xml = Writer::new(Vec::new());
        {
            let mut writer = Rss20FeedWriter::new(&mut xml);
            writer.write_value("generator", "test").unwrap();
        }

        assert_eq!(
            output(xml),
            r#"<rss version="2.0"><channel><generator>test</generator></channel></rss>"#
        );
    }

    #[test]
    fn test_failed_write_still_closes_on_early_return() {
        fn write_feed(xml: &mut Writer<Vec<u8>>) -> Result<(), FeedError> {
            let mut writer = Rss20FeedWriter::new(xml);
            writer.write_category(&Category::new("ok"))?;
            writer.write_category(&Category::new(""))?;
            writer.finish()
        }

        let mut xml = Writer::new(Vec::new());
        assert!(write_feed(&mut xml).is_err());
        assert_eq!(
            output(xml),
            r#"<rss version="2.0"><channel><category>ok</category></channel></rss>"#
        );
    }

    #[test]
    fn test_rss_attributes_from_config() {
        let config = Config {
            rss_attributes: vec![SyndicationAttribute::new(
                "xmlns:atom",
                "http://www.w3.org/2005/Atom",
            )],
        };
        let mut xml = Writer::new(Vec::new());
        let mut writer = Rss20FeedWriter::with_config(&mut xml, config);
        writer.write_language("en-us").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            output(xml),
            r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom"><channel><language>en-us</language></channel></rss>"#
        );
    }

    #[test]
    fn test_invalid_rss_attribute_name_is_a_format_error() {
        let config = Config {
            rss_attributes: vec![SyndicationAttribute::new("bad name", "x")],
        };
        let mut xml = Writer::new(Vec::new());
        let mut writer = Rss20FeedWriter::with_config(&mut xml, config);
        let err = writer.write_title("t").unwrap_err();
        assert!(matches!(err, FeedError::Format(_)));
        assert!(!writer.is_channel_open());
    }

    #[test]
    fn test_write_raw_is_not_escaped() {
        let mut xml = Writer::new(Vec::new());
        let mut writer = Rss20FeedWriter::new(&mut xml);
        writer.write_raw("<atom:link rel=\"self\"/>").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            output(xml),
            r#"<rss version="2.0"><channel><atom:link rel="self"/></channel></rss>"#
        );
    }
}
