use std::collections::HashMap;

use serde::Deserialize;

/// Response envelope of the Wikipedia action API (`action=query`).
/// Pages come keyed by page id; a missing article carries the `missing`
/// marker under the synthetic key "-1".
#[derive(Deserialize, Debug, Clone)]
pub struct WikiQueryResponse {
    pub query: Option<WikiQuery>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WikiQuery {
    #[serde(default)]
    pub pages: HashMap<String, WikiPage>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct WikiPage {
    pub title: Option<String>,
    pub extract: Option<String>,
    pub missing: Option<serde_json::Value>,
    #[serde(default)]
    pub pageprops: HashMap<String, serde_json::Value>,
    pub original: Option<WikiImage>,
}

impl WikiPage {
    pub fn is_missing(&self) -> bool {
        self.missing.is_some()
    }

    /// Disambiguation pages carry the `disambiguation` page prop.
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops.contains_key("disambiguation")
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct WikiImage {
    pub source: String,
}

/// Open Library `/search.json` response. Every per-document field is
/// optional on the wire; fallbacks are decided by the aggregator.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CatalogSearchResponse {
    #[serde(default)]
    pub docs: Vec<CatalogDoc>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CatalogDoc {
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub first_publish_year: Option<i64>,
    pub ratings_average: Option<f64>,
    pub cover_i: Option<i64>,
}
