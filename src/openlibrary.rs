use thiserror::Error;

use crate::data_models::CatalogSearchResponse;

#[derive(Debug, Error)]
pub enum OpenLibraryError {
    #[error("timed out reaching Open Library")]
    Timeout,
    #[error("unexpected Open Library response shape")]
    Malformed,
    #[error("open library request failed: {0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for OpenLibraryError {
    fn from(err: reqwest::Error) -> OpenLibraryError {
        if err.is_timeout() {
            OpenLibraryError::Timeout
        } else if err.is_decode() {
            OpenLibraryError::Malformed
        } else {
            OpenLibraryError::Http(err)
        }
    }
}

/// Client for the Open Library search API and its cover-image service.
/// Both base URLs are injectable for tests.
pub struct OpenLibraryClient {
    http: reqwest::Client,
    base_url: String,
    covers_url: String,
}

impl OpenLibraryClient {
    pub fn new(http: reqwest::Client, base_url: String, covers_url: String) -> OpenLibraryClient {
        OpenLibraryClient {
            http,
            base_url,
            covers_url,
        }
    }

    pub async fn search_by_author(
        &self,
        author: &str,
    ) -> Result<CatalogSearchResponse, OpenLibraryError> {
        let response = self
            .http
            .get(format!("{}/search.json", self.base_url))
            .query(&[("author", author)])
            .send()
            .await?
            .json::<CatalogSearchResponse>()
            .await?;
        Ok(response)
    }

    /// Title search, narrowed by author when a hint is supplied.
    pub async fn search_by_title(
        &self,
        title: &str,
        author: Option<&str>,
    ) -> Result<CatalogSearchResponse, OpenLibraryError> {
        let mut params = vec![("title", title)];
        if let Some(author) = author {
            params.push(("author", author));
        }

        let response = self
            .http
            .get(format!("{}/search.json", self.base_url))
            .query(&params)
            .send()
            .await?
            .json::<CatalogSearchResponse>()
            .await?;
        Ok(response)
    }

    /// Large-size cover image URL for a numeric cover id.
    pub fn cover_url(&self, cover_id: i64) -> String {
        format!("{}/b/id/{}-L.jpg", self.covers_url, cover_id)
    }
}
