use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::FetchError;
use crate::models::{SearchResponse, StoryRecord};

pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/";

/// Which list to ask the API for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryQuery {
    /// Free-text search over all stories.
    Search(String),
    /// Most recent stories, newest first.
    Latest,
}

impl StoryQuery {
    /// Path relative to the API endpoint.
    pub fn path(&self) -> String {
        match self {
            StoryQuery::Search(term) => format!("search?query={}", urlencoding::encode(term)),
            StoryQuery::Latest => "search_by_date?tags=story".to_string(),
        }
    }
}

/// Anything that can turn a query into a result list.
///
/// The runtime calls this from a worker thread, hence `Send + Sync`.
pub trait StorySource: Send + Sync {
    fn fetch_stories(&self, query: &StoryQuery) -> Result<Vec<StoryRecord>, FetchError>;
}

pub struct HackerNewsClient {
    client: Client,
    endpoint: String,
}

impl HackerNewsClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hn_search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Paths are appended directly, so the endpoint must end with a slash
        let mut endpoint = endpoint.to_string();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn url_for(&self, query: &StoryQuery) -> String {
        format!("{}{}", self.endpoint, query.path())
    }
}

impl StorySource for HackerNewsClient {
    fn fetch_stories(&self, query: &StoryQuery) -> Result<Vec<StoryRecord>, FetchError> {
        let url = self.url_for(query);
        tracing::debug!(%url, "fetching stories");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: SearchResponse = response.json()?;
        tracing::info!(count = body.hits.len(), ?query, "loaded stories");
        Ok(body.hits)
    }
}
