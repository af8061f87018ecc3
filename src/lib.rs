//! pagefeed — an HTTP gateway that turns any web page into a feed.
//!
//! The gateway fetches a remote page, applies a CSS selector to it, and
//! returns the matching text nodes either as a flat JSON list (`GET /`)
//! or as a synthesized RSS 2.0 document (`GET /rss`).
//!
//! # Architecture
//!
//! Each request runs a straight, request-scoped pipeline with no shared
//! mutable state:
//!
//! ```text
//! Fetcher → Extractor → Responder
//! ```
//!
//! - [`fetch`]: raw page retrieval over reqwest
//! - [`extract`]: HTML parsing and selector matching behind a narrow
//!   document trait (scraper-backed in production, fakeable in tests)
//! - [`feed`]: RSS document assembly, ordering, and the error-feed
//!   fallback that keeps `/rss` responses parseable even on failure
//! - [`server`]: axum routing, CORS, and the per-mode response contracts

pub mod config;
pub mod error;
pub mod extract;
pub mod feed;
pub mod fetch;
pub mod server;
