//! RSS 2.0 document assembly and serialization.
//!
//! The feed synthesizer turns extracted page texts into a channel whose
//! items all mirror the page: item title = page title, item link = the
//! source URL, item description = the matched element's text. Ordering is
//! either natural document order or a full reversal (`lastpost=bottom`);
//! reversal produces a new sequence, never a partial reorder.
//!
//! [`error_feed`] keeps the RSS contract on failure: consumers always get
//! parseable XML, with the diagnostic in the channel description.

use crate::extract::PageMetadata;
use quick_xml::se::Serializer;
use serde::Serialize;

/// Fixed channel banner for successful feeds.
pub const CHANNEL_DESCRIPTION: &str = "pagefeed server!";

/// Channel title used by [`error_feed`].
pub const ERROR_FEED_TITLE: &str = "rss error";

/// `<rss version="2.0">` root element.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename = "rss")]
pub struct Rss {
    #[serde(rename = "@version")]
    pub version: String,
    pub channel: Channel,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub image: ChannelImage,
    #[serde(rename = "item")]
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ChannelImage {
    pub url: String,
}

/// One syndication entry. Title and link mirror the page, not the
/// individual element.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub link: String,
    pub description: String,
}

/// Item ordering within a synthesized feed.
///
/// Derived from the `lastpost` query parameter: only the literal string
/// `"bottom"` reverses; any other value keeps natural document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOrder {
    Natural,
    Reversed,
}

impl ItemOrder {
    pub fn from_lastpost(value: &str) -> Self {
        if value == "bottom" {
            ItemOrder::Reversed
        } else {
            ItemOrder::Natural
        }
    }
}

/// Assemble a feed document from extracted page texts.
pub fn build_feed(
    source_url: &str,
    metadata: &PageMetadata,
    texts: Vec<String>,
    order: ItemOrder,
) -> Rss {
    let mut items: Vec<Item> = texts
        .into_iter()
        .map(|description| Item {
            title: metadata.title.clone(),
            link: source_url.to_string(),
            description,
        })
        .collect();

    if order == ItemOrder::Reversed {
        items.reverse();
    }

    Rss {
        version: "2.0".to_string(),
        channel: Channel {
            title: metadata.title.clone(),
            link: source_url.to_string(),
            description: CHANNEL_DESCRIPTION.to_string(),
            image: ChannelImage {
                url: metadata.favicon_url.clone().unwrap_or_default(),
            },
            items,
        },
    }
}

/// Serialize a feed document to 4-space-indented XML.
pub fn to_xml(rss: &Rss) -> Result<String, quick_xml::SeError> {
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out);
    ser.indent(' ', 4);
    rss.serialize(ser)?;
    Ok(out)
}

/// Synthesize a structurally valid error feed carrying `message` in the
/// channel description: empty link, empty image URL, no items.
///
/// Falls back to the raw message verbatim only if XML encoding itself
/// fails — the client is never left without a body.
pub fn error_feed(message: &str) -> String {
    let rss = Rss {
        version: "2.0".to_string(),
        channel: Channel {
            title: ERROR_FEED_TITLE.to_string(),
            link: String::new(),
            description: message.to_string(),
            image: ChannelImage { url: String::new() },
            items: Vec::new(),
        },
    };

    to_xml(&rss).unwrap_or_else(|_| message.to_string())
}
