//! Element and attribute names of the RSS 2.0 vocabulary.

pub const VERSION: &str = "2.0";

pub const RSS: &str = "rss";
pub const CHANNEL: &str = "channel";
pub const ITEM: &str = "item";
pub const IMAGE: &str = "image";

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const LANGUAGE: &str = "language";
pub const COPYRIGHT: &str = "copyright";
pub const GENERATOR: &str = "generator";
pub const DOCS: &str = "docs";
pub const PUB_DATE: &str = "pubDate";
pub const LAST_BUILD_DATE: &str = "lastBuildDate";
pub const TTL: &str = "ttl";
pub const CLOUD: &str = "cloud";
pub const SKIP_HOURS: &str = "skipHours";
pub const HOUR: &str = "hour";
pub const SKIP_DAYS: &str = "skipDays";
pub const DAY: &str = "day";
pub const CATEGORY: &str = "category";
pub const GUID: &str = "guid";
pub const URL: &str = "url";

// Person relationship tags
pub const AUTHOR: &str = "author";
pub const MANAGING_EDITOR: &str = "managingEditor";
pub const WEB_MASTER: &str = "webMaster";

// Link relationship tags
pub const LINK: &str = "link";
pub const ENCLOSURE: &str = "enclosure";
pub const COMMENTS: &str = "comments";
pub const SOURCE: &str = "source";

// Attributes
pub const VERSION_ATTR: &str = "version";
pub const URL_ATTR: &str = "url";
pub const LENGTH_ATTR: &str = "length";
pub const TYPE_ATTR: &str = "type";
pub const DOMAIN_ATTR: &str = "domain";
pub const PORT_ATTR: &str = "port";
pub const PATH_ATTR: &str = "path";
pub const REGISTER_PROCEDURE_ATTR: &str = "registerProcedure";
pub const PROTOCOL_ATTR: &str = "protocol";
