//! Blocking JSON client for the brickify backend.

use std::time::Duration;

use brickify_core::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use url::Url;

use crate::error::{CatalogError, CatalogResult};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP client bound to one backend base URL.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ApiClient {
    /// Creates a client with the same timeout for connect, read and write.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent,
        }
    }

    /// Creates a client from the backend settings in `options`.
    pub fn from_options(options: &Options) -> Self {
        Self::new(
            options.backend_url.clone(),
            Duration::from_secs(options.http_timeout_secs),
        )
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `endpoint` onto the base URL.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Appends `segments` to the base URL's path, percent-encoding each one.
    ///
    /// A `/`, `?` or `#` inside a segment stays part of that segment.
    pub fn path_url(&self, segments: &[&str]) -> CatalogResult<String> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    /// Sends a GET to an encoded path and decodes the JSON response.
    pub fn get_path<T: DeserializeOwned>(&self, segments: &[&str]) -> CatalogResult<T> {
        let url = self.path_url(segments)?;
        self.get_url(&url, &[])
    }

    /// Sends a GET and decodes the JSON response.
    pub fn get<T: DeserializeOwned>(&self, endpoint: &str) -> CatalogResult<T> {
        self.get_with_query(endpoint, &[])
    }

    /// Sends a GET with percent-encoded query pairs and decodes the JSON response.
    pub fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> CatalogResult<T> {
        self.get_url(&self.url(endpoint), query)
    }

    fn get_url<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> CatalogResult<T> {
        log::debug!("GET {url}");
        let response = self.agent.get(url).query_pairs(query.iter().copied()).call()?;
        Ok(response.into_json()?)
    }

    /// Sends a JSON POST and decodes the JSON response.
    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> CatalogResult<T> {
        let url = self.url(endpoint);
        log::debug!("POST {url}");
        let body = serde_json::to_string(body)?;
        let response = self
            .agent
            .post(&url)
            .set("Content-Type", JSON_CONTENT_TYPE)
            .send_string(&body)?;
        Ok(response.into_json()?)
    }

    /// Sends a JSON PUT and decodes the JSON response.
    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> CatalogResult<T> {
        let url = self.url(endpoint);
        log::debug!("PUT {url}");
        let body = serde_json::to_string(body)?;
        let response = self
            .agent
            .put(&url)
            .set("Content-Type", JSON_CONTENT_TYPE)
            .send_string(&body)?;
        Ok(response.into_json()?)
    }

    /// Sends a DELETE. The response body is ignored.
    pub fn delete(&self, endpoint: &str) -> CatalogResult<()> {
        let url = self.url(endpoint);
        log::debug!("DELETE {url}");
        self.agent.delete(&url).call()?;
        Ok(())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
