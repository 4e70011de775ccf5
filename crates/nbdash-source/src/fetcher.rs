/// A fetched HTTP response, reduced to what resolution needs.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
    /// Response header name/value pairs.
    pub headers: Vec<(String, String)>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header with the given name, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Abstraction over HTTP GET for testability.
///
/// Production code uses [`ReqwestFetcher`], tests use mockall-generated
/// mocks.
#[allow(async_fn_in_trait)]
pub trait HttpFetcher: Send + Sync {
    /// Issue a GET requesting JSON content. Returns the response whatever
    /// its status; callers decide what counts as failure.
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Real HTTP fetcher backed by a shared reqwest client.
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        tracing::debug!(url, "fetching notebook");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_owned(),
                source: e,
            })?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(|e| FetchError::Request {
            url: url.to_owned(),
            source: e,
        })?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("unknown").to_owned(),
            body,
            headers,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request { url: String, source: reqwest::Error },

    #[error("fetch of {url} failed: {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },
}
