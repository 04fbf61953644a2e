//! REST client for the resort collection store.
//!
//! `ResortStore` is the seam the controller talks through; `HttpResortStore`
//! speaks the `/resorts` JSON contract over HTTP.

use async_trait::async_trait;
use reqwest::{Response, Url};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{Resort, ResortFields, ResortId};
use crate::util::{compact_text, normalize_base_url};

/// Remote collection of resort records
#[async_trait]
pub trait ResortStore: Send + Sync {
    /// Fetch the whole collection, in store order
    async fn list(&self) -> Result<Vec<Resort>>;

    /// Create a record from `fields`
    async fn create(&self, fields: &ResortFields) -> Result<()>;

    /// Overwrite the fields of record `id`
    async fn update(&self, id: &ResortId, fields: &ResortFields) -> Result<()>;

    /// Remove record `id`
    async fn delete(&self, id: &ResortId) -> Result<()>;
}

/// `ResortStore` backed by the HTTP API
#[derive(Debug, Clone)]
pub struct HttpResortStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpResortStore {
    /// Builds a client for an explicit API base URL (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str()).map_err(Error::InvalidInput)?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::Transport(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_base_url.clone())
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/resorts", self.base_url)
    }

    fn resort_url(&self, id: &ResortId) -> Result<Url> {
        let mut url = Url::parse(&self.collection_url())
            .map_err(|error| Error::InvalidInput(format!("Invalid API base URL: {error}")))?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidInput("API base URL cannot carry a path".to_string()))?
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl ResortStore for HttpResortStore {
    async fn list(&self) -> Result<Vec<Resort>> {
        let response = self
            .client
            .get(self.collection_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|error| Error::Transport(format!("Failed to list resorts: {error}")))?;
        let response = ensure_success(response).await?;
        response
            .json::<Vec<Resort>>()
            .await
            .map_err(|error| Error::Decode(format!("Invalid resort list payload: {error}")))
    }

    async fn create(&self, fields: &ResortFields) -> Result<()> {
        let response = self
            .client
            .post(self.collection_url())
            .json(fields)
            .send()
            .await
            .map_err(|error| Error::Transport(format!("Failed to create resort: {error}")))?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, id: &ResortId, fields: &ResortFields) -> Result<()> {
        let response = self
            .client
            .put(self.resort_url(id)?)
            .json(fields)
            .send()
            .await
            .map_err(|error| Error::Transport(format!("Failed to update resort {id}: {error}")))?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &ResortId) -> Result<()> {
        let response = self
            .client
            .delete(self.resort_url(id)?)
            .send()
            .await
            .map_err(|error| Error::Transport(format!("Failed to delete resort {id}: {error}")))?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status,
        body: compact_text(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_base_url() {
        assert!(HttpResortStore::new("localhost:5000/api").is_err());
    }

    #[test]
    fn collection_url_joins_resorts() {
        let store = HttpResortStore::new("http://localhost:5000/api/").unwrap();
        assert_eq!(store.base_url(), "http://localhost:5000/api");
        assert_eq!(store.collection_url(), "http://localhost:5000/api/resorts");
    }

    #[test]
    fn resort_url_escapes_identifier() {
        let store = HttpResortStore::new("http://localhost:5000/api").unwrap();
        let url = store.resort_url(&ResortId::from("a b/c")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/resorts/a%20b%2Fc");
    }

    #[tokio::test]
    async fn unreachable_store_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = HttpResortStore::new(format!("http://{addr}/api")).unwrap();
        let err = store.list().await.unwrap_err();
        assert!(err.is_transport());
    }
}
