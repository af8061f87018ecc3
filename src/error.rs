//! Pipeline error taxonomy.
//!
//! Every error is terminal for the current request: there are no retries,
//! and the failing stage is reported to the caller in the response body.
//! The two output modes render the same failure differently — JSON mode
//! degrades to a plain-text diagnostic, RSS mode wraps the diagnostic in
//! a structurally valid error feed (see [`crate::feed::error_feed`]).

use thiserror::Error;

/// A failure in one stage of the fetch → extract → respond pipeline.
///
/// The `Display` impl renders the JSON-mode diagnostic; RSS mode uses
/// [`PipelineError::rss_description`], which omits transport detail for
/// fetch failures and rephrases body-read failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The remote server could not be reached (DNS, connect, TLS).
    #[error("url not found: {0}")]
    Unreachable(reqwest::Error),
    /// The connection succeeded but the response body could not be read.
    #[error("failed to read body: {0}")]
    ReadFailed(reqwest::Error),
    /// The fetched bytes could not be parsed as an HTML document.
    #[error("failed to parse html: {0}")]
    Parse(String),
    /// The JSON payload could not be encoded.
    #[error("failed json: {0}")]
    SerializeJson(#[from] serde_json::Error),
    /// The RSS document could not be encoded as XML.
    #[error("failed to generate RSS: {0}")]
    SerializeXml(#[from] quick_xml::SeError),
}

impl PipelineError {
    /// Diagnostic string placed in the error feed's channel description.
    ///
    /// Fetch failures deliberately carry no transport detail — feed
    /// readers surface the description verbatim, and "url not found" is
    /// the stable string consumers match on.
    pub fn rss_description(&self) -> String {
        match self {
            PipelineError::Unreachable(_) => "url not found".to_string(),
            PipelineError::ReadFailed(e) => format!("no response: {}", e),
            PipelineError::Parse(e) => format!("failed to parse html: {}", e),
            PipelineError::SerializeJson(e) => format!("failed json: {}", e),
            PipelineError::SerializeXml(e) => format!("failed to generate RSS: {}", e),
        }
    }
}
