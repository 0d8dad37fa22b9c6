//! BrainyQuote search page as a [`QuoteSource`].
//!
//! Extraction treats every anchor titled `view quote` as one candidate.

use once_cell::sync::Lazy;
use quotekeep_core::{FetchError, FetchResult, QuoteSource};
use regex::Regex;
use reqwest::blocking::Client;
use std::time::Duration;

const SEARCH_URL: &str = "https://www.brainyquote.com/search_results";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("quotekeep/", env!("CARGO_PKG_VERSION"));

static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").expect("Invalid regex"));
static VIEW_QUOTE_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\btitle\s*=\s*["']view quote["']"#).expect("Invalid regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("Invalid regex"));

/// Blocking HTTP client for the BrainyQuote search page.
pub struct BrainyQuoteSource {
    client: Client,
    base_url: String,
}

impl BrainyQuoteSource {
    pub fn new() -> FetchResult<Self> {
        Self::with_base_url(SEARCH_URL)
    }

    /// Points the source at another search endpoint with the same page shape.
    pub fn with_base_url(base_url: impl Into<String>) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn search_url(&self, author: &str) -> String {
        format!("{}?q={}", self.base_url, urlencoding::encode(author))
    }
}

impl QuoteSource for BrainyQuoteSource {
    fn fetch_quotes(&self, author: &str, limit: usize) -> FetchResult<Vec<String>> {
        let response = self
            .client
            .get(self.search_url(author))
            .send()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|err| FetchError::Extract(err.to_string()))?;
        Ok(extract_quotes(&body, limit))
    }
}

/// Pulls at most `limit` quote texts out of a search results page.
pub fn extract_quotes(html: &str, limit: usize) -> Vec<String> {
    ANCHOR_RE
        .captures_iter(html)
        .filter(|caps| VIEW_QUOTE_TITLE_RE.is_match(&caps[1]))
        .map(|caps| clean_text(&caps[2]))
        .filter(|text| !text.is_empty())
        .take(limit)
        .collect()
}

fn clean_text(fragment: &str) -> String {
    let without_tags = TAG_RE.replace_all(fragment, " ");
    let decoded = html_escape::decode_html_entities(&without_tags);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::{extract_quotes, BrainyQuoteSource};

    const PAGE: &str = r#"
        <div id="quotesList">
          <a href="/quotes/mark_twain_1" title="view quote">
            <div>Get your facts first,
              and then you can distort them as you please.</div>
          </a>
          <a href="/authors/mark-twain-quotes" title="view author">Mark Twain</a>
          <a href="/quotes/mark_twain_2" title='View Quote'>The secret of getting ahead is getting started.</a>
          <a href="/quotes/x" title="view quote">   </a>
          <a href="/quotes/mark_twain_3" title="view quote">Don&#39;t go around saying the world owes you a living &amp; more.</a>
        </div>
    "#;

    #[test]
    fn extract_quotes_keeps_only_view_quote_anchors() {
        let quotes = extract_quotes(PAGE, 10);

        assert_eq!(
            quotes,
            vec![
                "Get your facts first, and then you can distort them as you please.".to_string(),
                "The secret of getting ahead is getting started.".to_string(),
                "Don't go around saying the world owes you a living & more.".to_string(),
            ]
        );
    }

    #[test]
    fn extract_quotes_respects_limit() {
        assert_eq!(extract_quotes(PAGE, 1).len(), 1);
        assert!(extract_quotes(PAGE, 0).is_empty());
    }

    #[test]
    fn extract_quotes_on_unrelated_page_is_empty() {
        assert!(extract_quotes("<html><body>No results</body></html>", 10).is_empty());
    }

    #[test]
    fn search_url_encodes_author() {
        let source = BrainyQuoteSource::with_base_url("http://localhost/search").unwrap();
        assert_eq!(
            source.search_url("Mark Twain"),
            "http://localhost/search?q=Mark%20Twain"
        );
    }
}
