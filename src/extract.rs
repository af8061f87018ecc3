//! HTML extraction: selector matching and page metadata.
//!
//! The pipeline talks to the HTML engine through the narrow
//! [`PageDocument`] trait — parse, first-match text, first-match
//! attribute, all-match texts — so the extraction logic is testable with
//! a fake document and not welded to any particular parsing library. The
//! production engine is [`ScraperDocument`], backed by the `scraper`
//! crate.

use scraper::{Html, Selector};
use thiserror::Error;

/// The fetched bytes could not be parsed as an HTML document.
///
/// The scraper engine recovers from arbitrary input and never returns
/// this, but the parse step is fallible by contract: alternative engines
/// (and the test fakes) exercise the error arm.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ParseError(pub String);

/// Narrow interface to a parsed HTML document.
///
/// Selector strings are caller-supplied and may be malformed; every
/// operation treats an unparseable selector the same as a selector that
/// matches nothing. Feed consumers depend on receiving an empty-but-valid
/// result rather than an error for unsupported selectors.
pub trait PageDocument: Sized {
    /// Parse raw page bytes into a document.
    fn parse(bytes: &[u8]) -> Result<Self, ParseError>;

    /// Rendered text of the first element matching `selector`.
    fn first_text(&self, selector: &str) -> Option<String>;

    /// Value of `attr` on the first element matching `selector`.
    fn first_attr(&self, selector: &str, attr: &str) -> Option<String>;

    /// Rendered text of every element matching `selector`, in document
    /// order. Text is all descendant text as parsed — not re-normalized.
    fn select_texts(&self, selector: &str) -> Vec<String>;
}

/// Page-level metadata shared by every item of a synthesized feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Text of the first `<title>` element, empty if the page has none.
    pub title: String,
    /// `href` of the first `<link rel="icon">`, if any.
    pub favicon_url: Option<String>,
}

/// Result of running a selector against a parsed page.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// One entry per matched element, in document order.
    pub texts: Vec<String>,
    pub metadata: PageMetadata,
}

/// Apply `selector` to a parsed document and collect matched texts plus
/// page metadata. Zero matches (or a malformed selector) yield an empty
/// `texts` list, never an error.
pub fn extract<D: PageDocument>(doc: &D, selector: &str) -> Extraction {
    let metadata = PageMetadata {
        title: doc.first_text("title").unwrap_or_default(),
        favicon_url: doc.first_attr(r#"link[rel="icon"]"#, "href"),
    };

    Extraction {
        texts: doc.select_texts(selector),
        metadata,
    }
}

// ============================================================================
// scraper-backed engine
// ============================================================================

/// [`PageDocument`] over `scraper::Html`.
///
/// Not `Send`: parse and extract must complete between await points,
/// which the request pipeline does — extraction is fully synchronous once
/// the body bytes are in hand.
pub struct ScraperDocument(Html);

impl ScraperDocument {
    fn selector(selector: &str) -> Option<Selector> {
        Selector::parse(selector).ok()
    }
}

impl PageDocument for ScraperDocument {
    fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        // html5ever recovers from any byte sequence, so this cannot fail
        // for the scraper engine; lossy decoding handles non-UTF-8 pages.
        let html = String::from_utf8_lossy(bytes);
        Ok(ScraperDocument(Html::parse_document(&html)))
    }

    fn first_text(&self, selector: &str) -> Option<String> {
        let selector = Self::selector(selector)?;
        self.0
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = Self::selector(selector)?;
        self.0
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(attr).map(String::from))
    }

    fn select_texts(&self, selector: &str) -> Vec<String> {
        let Some(selector) = Self::selector(selector) else {
            return Vec::new();
        };
        self.0
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }
}
