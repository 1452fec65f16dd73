use thiserror::Error;

use crate::data_models::{WikiPage, WikiQueryResponse};

#[derive(Debug, Error)]
pub enum WikipediaError {
    #[error("article matches multiple entries")]
    Disambiguation,
    #[error("timed out reaching Wikipedia")]
    Timeout,
    #[error("article not found")]
    NotFound,
    #[error("unexpected Wikipedia response shape")]
    Malformed,
    #[error("wikipedia request failed: {0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for WikipediaError {
    fn from(err: reqwest::Error) -> WikipediaError {
        if err.is_timeout() {
            WikipediaError::Timeout
        } else if err.is_decode() {
            WikipediaError::Malformed
        } else {
            WikipediaError::Http(err)
        }
    }
}

/// Client for the Wikipedia action API. The API URL carries the locale
/// (pt.wikipedia.org by default, see [`crate::config`]) and is injectable
/// so tests can point at a local stub.
pub struct WikipediaClient {
    http: reqwest::Client,
    api_url: String,
}

impl WikipediaClient {
    pub fn new(http: reqwest::Client, api_url: String) -> WikipediaClient {
        WikipediaClient { http, api_url }
    }

    /// Plain-text summary of an article, truncated to `sentences` sentences
    /// by the API. Follows redirects.
    pub async fn summary(&self, title: &str, sentences: usize) -> Result<String, WikipediaError> {
        let sentences = sentences.to_string();
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "extracts|pageprops"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("exsentences", sentences.as_str()),
                ("titles", title),
            ])
            .send()
            .await?
            .json::<WikiQueryResponse>()
            .await?;

        let page = Self::single_page(response)?;
        match page.extract {
            Some(extract) if !extract.trim().is_empty() => Ok(extract),
            _ => Err(WikipediaError::NotFound),
        }
    }

    /// URL of the article's lead image (usually the infobox portrait).
    pub async fn lead_image(&self, title: &str) -> Result<String, WikipediaError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "pageimages|pageprops"),
                ("piprop", "original"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .send()
            .await?
            .json::<WikiQueryResponse>()
            .await?;

        let page = Self::single_page(response)?;
        page.original
            .map(|image| image.source)
            .ok_or(WikipediaError::NotFound)
    }

    /// One title is queried per request, so the page map holds one entry.
    fn single_page(response: WikiQueryResponse) -> Result<WikiPage, WikipediaError> {
        let page = response
            .query
            .and_then(|q| q.pages.into_values().next())
            .ok_or(WikipediaError::Malformed)?;

        if page.is_missing() {
            return Err(WikipediaError::NotFound);
        }
        if page.is_disambiguation() {
            return Err(WikipediaError::Disambiguation);
        }
        Ok(page)
    }
}
