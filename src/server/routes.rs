//! The two gateway routes.
//!
//! Both accept only query parameters, and both treat an absent parameter
//! and an empty one identically. Validation failures are plain-text
//! `400`s on both routes. After validation the modes diverge: JSON mode
//! degrades to a plain-text diagnostic on pipeline failure, RSS mode
//! responds with a structurally valid error feed so consumers always
//! receive parseable XML.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::PipelineError;
use crate::extract::{extract, PageDocument, ScraperDocument};
use crate::feed::{build_feed, error_feed, to_xml, ItemOrder};
use crate::fetch::fetch;

/// Query parameters shared by both routes. Absent parameters
/// deserialize to empty strings, matching the "missing or empty" check.
#[derive(Debug, Deserialize)]
pub struct ScrapeParams {
    #[serde(default)]
    url: String,
    #[serde(default)]
    selector: String,
    #[serde(default)]
    lastpost: String,
}

#[derive(Debug, Serialize)]
struct InnerTexts {
    inner_texts: Vec<String>,
}

/// `GET /?url=..&selector=..` — flat JSON list of matched texts.
pub async fn inner_texts(
    State(state): State<AppState>,
    Query(params): Query<ScrapeParams>,
) -> Response {
    if params.url.is_empty() || params.selector.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            "parameters not found: url and selector",
        )
            .into_response();
    }

    match run_json(&state, &params).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(url = %params.url, error = %e, "JSON extraction failed");
            // Plain text, not JSON: the diagnostic names the failing stage.
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn run_json(state: &AppState, params: &ScrapeParams) -> Result<String, PipelineError> {
    let bytes = fetch(&state.client, &params.url).await?;
    let doc =
        ScraperDocument::parse(&bytes).map_err(|e| PipelineError::Parse(e.to_string()))?;
    let extraction = extract(&doc, &params.selector);

    let payload = InnerTexts {
        inner_texts: extraction.texts,
    };
    Ok(serde_json::to_string(&payload)?)
}

/// `GET /rss?url=..&selector=..&lastpost=..` — synthesized RSS 2.0 feed.
pub async fn rss(State(state): State<AppState>, Query(params): Query<ScrapeParams>) -> Response {
    if params.url.is_empty() || params.selector.is_empty() || params.lastpost.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            "Both 'url', 'selector', and 'lastpost' parameters are required",
        )
            .into_response();
    }

    match run_rss(&state, &params).await {
        Ok(xml) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/xml")],
            xml,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(url = %params.url, error = %e, "RSS synthesis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/xml")],
                error_feed(&e.rss_description()),
            )
                .into_response()
        }
    }
}

async fn run_rss(state: &AppState, params: &ScrapeParams) -> Result<String, PipelineError> {
    let bytes = fetch(&state.client, &params.url).await?;
    let doc =
        ScraperDocument::parse(&bytes).map_err(|e| PipelineError::Parse(e.to_string()))?;
    let extraction = extract(&doc, &params.selector);

    let rss = build_feed(
        &params.url,
        &extraction.metadata,
        extraction.texts,
        ItemOrder::from_lastpost(&params.lastpost),
    );
    Ok(to_xml(&rss)?)
}
