use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use spdlog::error;

use crate::model::{Author, Blog, Category, Envelope, Tag};

/// Client for the remote content API. One instance per site; every
/// collection is fetched with `populate=*` so relations come embedded.
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    pub fn new(base_url: &str) -> ContentClient {
        ContentClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_blogs(&self) -> Vec<Blog> {
        self.fetch_collection("blogs").await
    }

    pub async fn fetch_authors(&self) -> Vec<Author> {
        self.fetch_collection("authors").await
    }

    pub async fn fetch_categories(&self) -> Vec<Category> {
        self.fetch_collection("categories").await
    }

    pub async fn fetch_tags(&self) -> Vec<Tag> {
        self.fetch_collection("tags").await
    }

    /// A failed fetch is logged and leaves the collection empty. No retry,
    /// no timeout policy: a partially loaded page beats a blank one.
    async fn fetch_collection<T: DeserializeOwned>(&self, collection: &str) -> Vec<T> {
        match self.get_collection(collection).await {
            Ok(envelope) => envelope.data,
            Err(e) => {
                error!("Error fetching {}: {:#}", collection, e);
                vec![]
            }
        }
    }

    async fn get_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Envelope<T>> {
        let url = format!("{}/api/{}?populate=*", self.base_url, collection);
        let body = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Error requesting {}", url))?
            .error_for_status()?
            .text()
            .await?;
        parse_envelope(&body).with_context(|| format!("Error decoding {}", url))
    }
}

/// Decodes a raw collection payload into its envelope.
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use crate::test_data::{AUTHORS_JSON, BLOGS_JSON};

    use super::*;

    #[test]
    fn test_parse_blogs_envelope() {
        let envelope: Envelope<Blog> = parse_envelope(BLOGS_JSON).unwrap();
        assert_eq!(envelope.data.len(), 5);
    }

    #[test]
    fn test_parse_authors_envelope() {
        let envelope: Envelope<Author> = parse_envelope(AUTHORS_JSON).unwrap();
        assert_eq!(envelope.data.len(), 3);
        assert!(envelope.data[0].avatar.is_some());
        assert!(envelope.data[1].avatar.is_none());
    }

    #[test]
    fn test_parse_envelope_rejects_garbage() {
        assert!(parse_envelope::<Blog>("not json").is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ContentClient::new("http://localhost:1337/");
        assert_eq!(client.base_url, "http://localhost:1337");
    }
}
