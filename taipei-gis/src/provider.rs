//! Sources of geometry documents.

use std::time::Duration;

use async_trait::async_trait;

use crate::document::GeometryDocument;
use crate::error::GisError;

/// Timeout of a document request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads geometry documents by url.
#[async_trait]
pub trait DocumentProvider: Send + Sync {
    /// Loads and decodes the document at `url`.
    async fn load(&self, url: &str) -> Result<GeometryDocument, GisError>;
}

/// Loads documents over HTTP(S). Every request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct UrlDocumentProvider {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl UrlDocumentProvider {
    /// Creates a provider with the default timeout and user agent.
    pub fn new() -> Result<Self, GisError> {
        Self::builder().build()
    }

    /// Starts configuring a provider.
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use taipei_gis::provider::UrlDocumentProvider;
    ///
    /// let provider = UrlDocumentProvider::builder()
    ///     .with_timeout(Duration::from_secs(3))
    ///     .build()?;
    /// # Ok::<(), taipei_gis::error::GisError>(())
    /// ```
    pub fn builder() -> UrlDocumentProviderBuilder {
        UrlDocumentProviderBuilder::default()
    }

    /// Timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request_error(&self, url: &str, error: reqwest::Error) -> GisError {
        if error.is_timeout() {
            GisError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            error.into()
        }
    }
}

#[async_trait]
impl DocumentProvider for UrlDocumentProvider {
    async fn load(&self, url: &str) -> Result<GeometryDocument, GisError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(GisError::EmptyUrl);
        }

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|err| self.request_error(url, err))?;

        let status = response.status();
        if !status.is_success() {
            log::info!("Failed to load {url}: {status}");
            return Err(GisError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.request_error(url, err))?;
        log::debug!("Loaded {} bytes from {url}", body.len());

        GeometryDocument::from_slice(&body)
    }
}

/// Constructor for a [`UrlDocumentProvider`].
#[derive(Debug, Clone)]
pub struct UrlDocumentProviderBuilder {
    timeout: Duration,
    user_agent: String,
    use_system_proxy: bool,
}

impl Default for UrlDocumentProviderBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("taipei-gis/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

impl UrlDocumentProviderBuilder {
    /// Sets the request timeout. Must be greater than zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Connects directly, ignoring proxies configured in the environment.
    pub fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    /// Creates the provider.
    pub fn build(self) -> Result<UrlDocumentProvider, GisError> {
        if self.timeout.is_zero() {
            return Err(GisError::Config("timeout must be greater than zero".into()));
        }

        let mut client = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout);
        if !self.use_system_proxy {
            client = client.no_proxy();
        }

        Ok(UrlDocumentProvider {
            http_client: client.build()?,
            timeout: self.timeout,
        })
    }
}
