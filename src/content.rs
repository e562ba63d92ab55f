//! A rendered element, independent of the feed format that produced it.
//!
//! Formatters turn domain entities into a tree of [`SyndicationContent`];
//! this module is the only place that turns that tree into quick-xml
//! events. An element with neither text nor children is written in its
//! self-closing form.

use crate::errors::FeedError;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SyndicationAttribute {
    pub name: String,
    pub value: String,
}

impl SyndicationAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SyndicationContent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Written in order.
    #[serde(default)]
    pub attributes: Vec<SyndicationAttribute>,
    #[serde(default)]
    pub children: Vec<SyndicationContent>,
}

impl SyndicationContent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// An element holding only text, e.g. `<title>Value</title>`.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name).with_value(value)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(SyndicationAttribute::new(name, value));
        self
    }

    pub fn with_child(mut self, child: SyndicationContent) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: SyndicationContent) {
        self.children.push(child);
    }

    /// Writes this element and its children to `xml`.
    pub fn write_to<W: Write>(&self, xml: &mut Writer<W>) -> Result<(), FeedError> {
        validate_name(&self.name)?;

        let mut start = BytesStart::new(self.name.as_str());
        for attribute in &self.attributes {
            validate_name(&attribute.name)?;
            start.push_attribute((attribute.name.as_str(), attribute.value.as_str()));
        }

        if self.value.is_none() && self.children.is_empty() {
            return emit(xml, Event::Empty(start));
        }

        emit(xml, Event::Start(start))?;
        if let Some(value) = &self.value {
            emit(xml, Event::Text(BytesText::new(value)))?;
        }
        for child in &self.children {
            child.write_to(xml)?;
        }
        emit(xml, Event::End(BytesEnd::new(self.name.as_str())))
    }
}

/// Hands a single event to the underlying writer.
pub(crate) fn emit<W: Write>(xml: &mut Writer<W>, event: Event<'_>) -> Result<(), FeedError> {
    xml.write_event(event)
        .map_err(|e| FeedError::Format(format!("Failed to write XML event: {}", e)))
}

/// Rejects names quick-xml would happily write but no parser would accept.
pub(crate) fn validate_name(name: &str) -> Result<(), FeedError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_char),
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(FeedError::Format(format!("Invalid XML name: '{}'", name)))
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_numeric() || matches!(c, '-' | '.' | '\u{B7}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(content: &SyndicationContent) -> String {
        let mut xml = Writer::new(Vec::new());
        content.write_to(&mut xml).unwrap();
        String::from_utf8(xml.into_inner()).unwrap()
    }

    #[test]
    fn test_text_element() {
        let content = SyndicationContent::text("title", "Hello");
        assert_eq!(render(&content), "<title>Hello</title>");
    }

    #[test]
    fn test_empty_element_self_closes() {
        let content = SyndicationContent::new("enclosure")
            .with_attribute("url", "http://a.com/")
            .with_attribute("length", "0");
        assert_eq!(
            render(&content),
            r#"<enclosure url="http://a.com/" length="0"/>"#
        );
    }

    #[test]
    fn test_empty_text_keeps_open_and_close_tags() {
        let content = SyndicationContent::text("description", "");
        assert_eq!(render(&content), "<description></description>");
    }

    #[test]
    fn test_nested_children_in_order() {
        let content = SyndicationContent::new("image")
            .with_child(SyndicationContent::text("url", "u"))
            .with_child(SyndicationContent::text("title", "t"));
        assert_eq!(
            render(&content),
            "<image><url>u</url><title>t</title></image>"
        );
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let content =
            SyndicationContent::text("title", "Fish & <Chips>").with_attribute("domain", "a&b");
        assert_eq!(
            render(&content),
            r#"<title domain="a&amp;b">Fish &amp; &lt;Chips&gt;</title>"#
        );
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        for name in ["", "1st", "has space", "-dash"] {
            let mut xml = Writer::new(Vec::new());
            let err = SyndicationContent::text(name, "v")
                .write_to(&mut xml)
                .unwrap_err();
            assert!(matches!(err, FeedError::Format(_)), "{name:?}");
        }

        let mut xml = Writer::new(Vec::new());
        let err = SyndicationContent::new("ok")
            .with_attribute("bad name", "v")
            .write_to(&mut xml)
            .unwrap_err();
        assert!(matches!(err, FeedError::Format(_)));
    }

    #[test]
    fn test_valid_names() {
        for name in ["link", "atom:link", "_x", "a-b.c1", "managingEditor"] {
            assert!(validate_name(name).is_ok(), "{name}");
        }
    }
}
