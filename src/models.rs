//! Plain value types handed to the feed writer.
//!
//! The writer only borrows these for the duration of a call. Optional
//! fields are `Option`s: presence, not the value, decides whether an
//! element or attribute is emitted (a `length` of `Some(0)` is written).

use crate::errors::FeedError;
use crate::rss20::constants;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// A `<category>` of a channel or item.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    /// Written as the `domain` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheme: None,
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }
}

/// The element a [`Person`] is written as.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PersonRole {
    Author,
    ManagingEditor,
    WebMaster,
}

impl PersonRole {
    pub fn tag(&self) -> &'static str {
        match self {
            PersonRole::Author => constants::AUTHOR,
            PersonRole::ManagingEditor => constants::MANAGING_EDITOR,
            PersonRole::WebMaster => constants::WEB_MASTER,
        }
    }
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PersonRole {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            constants::AUTHOR => Ok(PersonRole::Author),
            constants::MANAGING_EDITOR => Ok(PersonRole::ManagingEditor),
            constants::WEB_MASTER => Ok(PersonRole::WebMaster),
            other => Err(FeedError::invalid_argument(format!(
                "Unknown person relationship type: '{}'",
                other
            ))),
        }
    }
}

/// A person identified by email, e.g. `<author>a@b.com</author>`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub email: String,
    pub relationship_type: PersonRole,
}

impl Person {
    pub fn new(email: impl Into<String>, relationship_type: PersonRole) -> Self {
        Self {
            email: email.into(),
            relationship_type,
        }
    }

    pub fn author(email: impl Into<String>) -> Self {
        Self::new(email, PersonRole::Author)
    }

    pub fn managing_editor(email: impl Into<String>) -> Self {
        Self::new(email, PersonRole::ManagingEditor)
    }

    pub fn web_master(email: impl Into<String>) -> Self {
        Self::new(email, PersonRole::WebMaster)
    }
}

/// How a [`Link`] relates to the channel or item it is written into.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum LinkRelation {
    /// The plain `<link>`.
    #[default]
    #[serde(rename = "link", alias = "alternate")]
    Alternate,
    Enclosure,
    Comments,
    Source,
}

impl LinkRelation {
    pub fn tag(&self) -> &'static str {
        match self {
            LinkRelation::Alternate => constants::LINK,
            LinkRelation::Enclosure => constants::ENCLOSURE,
            LinkRelation::Comments => constants::COMMENTS,
            LinkRelation::Source => constants::SOURCE,
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LinkRelation {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            constants::LINK | "alternate" => Ok(LinkRelation::Alternate),
            constants::ENCLOSURE => Ok(LinkRelation::Enclosure),
            constants::COMMENTS => Ok(LinkRelation::Comments),
            constants::SOURCE => Ok(LinkRelation::Source),
            other => Err(FeedError::invalid_argument(format!(
                "Unknown link relationship type: '{}'",
                other
            ))),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub relationship_type: LinkRelation,
}

impl Link {
    /// A plain `<link>` to `url`.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            title: None,
            length: None,
            media_type: None,
            relationship_type: LinkRelation::Alternate,
        }
    }

    pub fn with_relation(mut self, relationship_type: LinkRelation) -> Self {
        self.relationship_type = relationship_type;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Image {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            title: None,
            link: None,
            description: None,
        }
    }
}

/// A single `<item>` of a channel.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub contributors: Vec<Person>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Written as `<guid>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Written as `<pubDate>` in RFC-822, normalised to GMT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_role_from_tag() {
        assert_eq!("author".parse::<PersonRole>().unwrap(), PersonRole::Author);
        assert_eq!(
            "managingEditor".parse::<PersonRole>().unwrap(),
            PersonRole::ManagingEditor
        );
        assert_eq!(
            "webMaster".parse::<PersonRole>().unwrap(),
            PersonRole::WebMaster
        );

        let err = "contributor".parse::<PersonRole>().unwrap_err();
        assert!(matches!(err, FeedError::InvalidArgument(_)));
    }

    #[test]
    fn test_link_relation_from_tag() {
        assert_eq!(
            "link".parse::<LinkRelation>().unwrap(),
            LinkRelation::Alternate
        );
        assert_eq!(
            "alternate".parse::<LinkRelation>().unwrap(),
            LinkRelation::Alternate
        );
        assert_eq!(
            "enclosure".parse::<LinkRelation>().unwrap(),
            LinkRelation::Enclosure
        );
        assert!("self".parse::<LinkRelation>().is_err());
        assert!("".parse::<LinkRelation>().is_err());
    }

    #[test]
    fn test_tags_round_trip_through_display() {
        for role in [
            PersonRole::Author,
            PersonRole::ManagingEditor,
            PersonRole::WebMaster,
        ] {
            assert_eq!(role.to_string().parse::<PersonRole>().unwrap(), role);
        }
        assert_eq!(LinkRelation::Source.to_string(), "source");
    }

    #[test]
    fn test_link_defaults_to_plain_link() {
        let link = Link::new(Url::parse("http://example.com").unwrap());
        assert_eq!(link.relationship_type, LinkRelation::Alternate);
        assert!(link.title.is_none());
        assert!(link.length.is_none());
    }
}
