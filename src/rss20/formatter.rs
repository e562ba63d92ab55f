//! Maps domain entities onto RSS 2.0 elements.
//!
//! Every function here is pure: it builds a [`SyndicationContent`] tree and
//! never touches the output. Link handling is a closed match on
//! [`LinkRelation`], one small rule per relationship.

use crate::content::SyndicationContent;
use crate::errors::FeedError;
use crate::models::{Category, Image, Item, Link, LinkRelation, Person};
use crate::rss20::constants::*;
use crate::rss20::date::to_rfc822;
use chrono::{DateTime, TimeZone, Weekday};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, Default)]
pub struct Rss20Formatter;

impl Rss20Formatter {
    pub fn new() -> Self {
        Self
    }

    /// `<category domain="scheme">Name</category>`
    pub fn category(&self, category: &Category) -> Result<SyndicationContent, FeedError> {
        if category.name.trim().is_empty() {
            return Err(FeedError::invalid_argument("Category requires a name"));
        }

        let mut content = SyndicationContent::text(CATEGORY, category.name.as_str());
        if let Some(scheme) = &category.scheme {
            content = content.with_attribute(DOMAIN_ATTR, scheme.as_str());
        }
        Ok(content)
    }

    /// `<author>email</author>`, `<managingEditor>email</managingEditor>`, ...
    pub fn person(&self, person: &Person) -> Result<SyndicationContent, FeedError> {
        if person.email.trim().is_empty() {
            return Err(FeedError::invalid_argument(format!(
                "{} requires an email",
                person.relationship_type
            )));
        }

        Ok(SyndicationContent::text(
            person.relationship_type.tag(),
            person.email.as_str(),
        ))
    }

    pub fn link(&self, link: &Link) -> Result<SyndicationContent, FeedError> {
        match link.relationship_type {
            LinkRelation::Alternate => Ok(plain_link(link)),
            LinkRelation::Enclosure => enclosure(link),
            LinkRelation::Comments => Ok(comments(link)),
            LinkRelation::Source => Ok(source(link)),
        }
    }

    /// `<image>` with `url`, `title`, `link`, `description` children, each
    /// only when present. The nested link always follows the plain `<link>`
    /// rule whatever its relationship.
    pub fn image(&self, image: &Image) -> Result<SyndicationContent, FeedError> {
        let mut content = SyndicationContent::new(IMAGE)
            .with_child(SyndicationContent::text(URL, image.url.as_str()));

        if let Some(title) = &image.title {
            content.push_child(SyndicationContent::text(TITLE, title.as_str()));
        }
        if let Some(link) = &image.link {
            content.push_child(plain_link(link));
        }
        if let Some(description) = &image.description {
            content.push_child(SyndicationContent::text(DESCRIPTION, description.as_str()));
        }

        Ok(content)
    }

    /// `<item>` children in fixed order: title, links, description,
    /// contributors, categories, guid, pubDate.
    pub fn item(&self, item: &Item) -> Result<SyndicationContent, FeedError> {
        if item.title.is_none() && item.description.is_none() {
            return Err(FeedError::invalid_argument(
                "Item requires a title or a description",
            ));
        }

        let mut content = SyndicationContent::new(ITEM);

        if let Some(title) = &item.title {
            content.push_child(SyndicationContent::text(TITLE, title.as_str()));
        }
        for link in &item.links {
            content.push_child(self.link(link)?);
        }
        if let Some(description) = &item.description {
            content.push_child(SyndicationContent::text(DESCRIPTION, description.as_str()));
        }
        for person in &item.contributors {
            content.push_child(self.person(person)?);
        }
        for category in &item.categories {
            content.push_child(self.category(category)?);
        }
        if let Some(id) = &item.id {
            content.push_child(SyndicationContent::text(GUID, id.as_str()));
        }
        if let Some(published) = &item.published {
            content.push_child(self.date(PUB_DATE, published));
        }

        Ok(content)
    }

    /// A timestamp element such as `<pubDate>` in RFC-822.
    pub fn date<Tz: TimeZone>(&self, name: &str, instant: &DateTime<Tz>) -> SyndicationContent {
        SyndicationContent::text(name, to_rfc822(instant))
    }

    /// `<ttl>` in whole minutes.
    pub fn time_to_live(&self, ttl: Duration) -> Result<SyndicationContent, FeedError> {
        let minutes = ttl.as_secs() / 60;
        if minutes == 0 {
            return Err(FeedError::invalid_argument(
                "Time to live must be at least one minute",
            ));
        }
        Ok(SyndicationContent::text(TTL, minutes.to_string()))
    }

    pub fn skip_hours(&self, hours: &[u8]) -> Result<SyndicationContent, FeedError> {
        if hours.is_empty() {
            return Err(FeedError::invalid_argument("skipHours requires at least one hour"));
        }

        let mut content = SyndicationContent::new(SKIP_HOURS);
        for &hour in hours {
            if hour > 23 {
                return Err(FeedError::invalid_argument(format!(
                    "skipHours hour out of range (0-23): {}",
                    hour
                )));
            }
            content.push_child(SyndicationContent::text(HOUR, hour.to_string()));
        }
        Ok(content)
    }

    pub fn skip_days(&self, days: &[Weekday]) -> Result<SyndicationContent, FeedError> {
        if days.is_empty() {
            return Err(FeedError::invalid_argument("skipDays requires at least one day"));
        }

        let mut content = SyndicationContent::new(SKIP_DAYS);
        for day in days {
            content.push_child(SyndicationContent::text(DAY, day_name(*day)));
        }
        Ok(content)
    }

    /// `<cloud domain port path registerProcedure protocol/>`, taking
    /// domain, port and path from `url`.
    pub fn cloud(
        &self,
        url: &Url,
        register_procedure: &str,
        protocol: &str,
    ) -> Result<SyndicationContent, FeedError> {
        let domain = url
            .host_str()
            .ok_or_else(|| FeedError::invalid_argument(format!("Cloud url has no host: {}", url)))?;
        let port = url.port_or_known_default().ok_or_else(|| {
            FeedError::invalid_argument(format!("Cloud url has no port: {}", url))
        })?;
        if register_procedure.is_empty() {
            return Err(FeedError::invalid_argument(
                "Cloud requires a register procedure",
            ));
        }
        if protocol.is_empty() {
            return Err(FeedError::invalid_argument("Cloud requires a protocol"));
        }

        Ok(SyndicationContent::new(CLOUD)
            .with_attribute(DOMAIN_ATTR, domain)
            .with_attribute(PORT_ATTR, port.to_string())
            .with_attribute(PATH_ATTR, url.path())
            .with_attribute(REGISTER_PROCEDURE_ATTR, register_procedure)
            .with_attribute(PROTOCOL_ATTR, protocol))
    }
}

/// The plain `<link>`.
///
/// Text-only `<link>url</link>` unless a title, length or media type is set;
/// then `length`, `type`, `url` attributes with the title as text. A title
/// equal to the url collapses back to the text-only form, showing the title.
fn plain_link(link: &Link) -> SyndicationContent {
    if let Some(title) = &link.title {
        if title_is_url(title, &link.url) {
            return SyndicationContent::text(LINK, title.as_str());
        }
    }

    if link.title.is_none() && link.length.is_none() && link.media_type.is_none() {
        return SyndicationContent::text(LINK, link.url.as_str());
    }

    let mut content = SyndicationContent::new(LINK);
    if let Some(length) = link.length {
        content = content.with_attribute(LENGTH_ATTR, length.to_string());
    }
    if let Some(media_type) = &link.media_type {
        content = content.with_attribute(TYPE_ATTR, media_type.as_str());
    }
    content = content.with_attribute(URL_ATTR, link.url.as_str());
    if let Some(title) = &link.title {
        content = content.with_value(title.as_str());
    }
    content
}

/// Self-closing `<enclosure url length type/>`. Title is ignored.
fn enclosure(link: &Link) -> Result<SyndicationContent, FeedError> {
    let length = link.length.ok_or_else(|| {
        FeedError::invalid_argument(format!("Enclosure {} requires a length", link.url))
    })?;
    let media_type = link.media_type.as_deref().ok_or_else(|| {
        FeedError::invalid_argument(format!("Enclosure {} requires a media type", link.url))
    })?;

    Ok(SyndicationContent::new(ENCLOSURE)
        .with_attribute(URL_ATTR, link.url.as_str())
        .with_attribute(LENGTH_ATTR, length.to_string())
        .with_attribute(TYPE_ATTR, media_type))
}

fn comments(link: &Link) -> SyndicationContent {
    SyndicationContent::text(COMMENTS, link.url.as_str())
}

fn source(link: &Link) -> SyndicationContent {
    let mut content = SyndicationContent::new(SOURCE).with_attribute(URL_ATTR, link.url.as_str());
    if let Some(title) = &link.title {
        content = content.with_value(title.as_str());
    }
    content
}

fn title_is_url(title: &str, url: &Url) -> bool {
    title == url.as_str() || Url::parse(title).is_ok_and(|parsed| &parsed == url)
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
