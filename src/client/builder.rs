//! Client builder with typestate pattern.

use std::{marker::PhantomData, time::Duration};

use tracing::debug;

use super::inner::ClientInner;
use crate::{
    Client, Error,
    auth::TokenCredentials,
    config::{PaginationConfig, ServiceConfig, TlsConfig},
};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Marker type: endpoint not yet provided.
pub struct NoUrl;

/// Marker type: endpoint has been provided.
pub struct HasUrl;

/// Marker type: credentials not yet provided.
pub struct NoCredentials;

/// Marker type: credentials have been provided.
pub struct HasCredentials;

/// Builder for creating [`Client`] instances.
///
/// ## Required Configuration
///
/// - `url()` or `service_config()`: The Smaug endpoint
/// - `credentials()`: The user's token credentials
///
/// ## Optional Configuration
///
/// - `pagination_config()`: Default and maximum page sizes
/// - `tls_config()` / `insecure()`: TLS settings
/// - `timeout()`: Request timeout
///
/// ## Example
///
/// ```rust,ignore
/// use smaug::{Client, PaginationConfig, TokenCredentials};
///
/// let client = Client::builder()
///     .url("https://backup.example.com/v1/proj_1")
///     .credentials(TokenCredentials::new(token))
///     .pagination_config(PaginationConfig::new().with_page_size(50))
///     .build()
///     .await?;
/// ```
pub struct ClientBuilder<UrlState, CredentialsState> {
    url: Option<String>,
    auth_url: Option<String>,
    credentials: Option<TokenCredentials>,
    pagination_config: PaginationConfig,
    tls_config: TlsConfig,
    timeout: Option<Duration>,
    _url_state: PhantomData<UrlState>,
    _credentials_state: PhantomData<CredentialsState>,
}

impl ClientBuilder<NoUrl, NoCredentials> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            auth_url: None,
            credentials: None,
            pagination_config: PaginationConfig::default(),
            tls_config: TlsConfig::default(),
            timeout: None,
            _url_state: PhantomData,
            _credentials_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl, NoCredentials> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ClientBuilder<NoUrl, C> {
    /// Sets the Smaug endpoint directly.
    ///
    /// The endpoint is the versioned, project-scoped base URL; resource paths
    /// such as `plans` are appended to it.
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl, C> {
        self.with_url(url.into(), None)
    }

    /// Sets the endpoint from a [`ServiceConfig`].
    ///
    /// Uses the catalog endpoint when present, otherwise the configured
    /// default (logged as a warning).
    pub fn service_config(self, config: ServiceConfig) -> ClientBuilder<HasUrl, C> {
        let url = config.resolve_endpoint().to_string();
        self.with_url(url, config.auth_url)
    }

    fn with_url(self, url: String, auth_url: Option<String>) -> ClientBuilder<HasUrl, C> {
        ClientBuilder {
            url: Some(url),
            auth_url,
            credentials: self.credentials,
            pagination_config: self.pagination_config,
            tls_config: self.tls_config,
            timeout: self.timeout,
            _url_state: PhantomData,
            _credentials_state: PhantomData,
        }
    }
}

impl<U> ClientBuilder<U, NoCredentials> {
    /// Sets the token credentials.
    ///
    /// Accepts [`TokenCredentials`] or a bare token string.
    pub fn credentials(
        self,
        credentials: impl Into<TokenCredentials>,
    ) -> ClientBuilder<U, HasCredentials> {
        ClientBuilder {
            url: self.url,
            auth_url: self.auth_url,
            credentials: Some(credentials.into()),
            pagination_config: self.pagination_config,
            tls_config: self.tls_config,
            timeout: self.timeout,
            _url_state: PhantomData,
            _credentials_state: PhantomData,
        }
    }
}

impl<U, C> ClientBuilder<U, C> {
    /// Sets the pagination configuration.
    #[must_use]
    pub fn pagination_config(mut self, config: PaginationConfig) -> Self {
        self.pagination_config = config;
        self
    }

    /// Sets the TLS configuration.
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }

    /// Disables TLS certificate verification.
    ///
    /// **WARNING**: This is insecure and should only be used for local development.
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.tls_config.skip_verification = true;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl ClientBuilder<HasUrl, HasCredentials> {
    /// Builds the client.
    ///
    /// No request is made; the first call to the service happens on the
    /// first operation.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint is not a valid
    /// `http`/`https` URL or the HTTP client cannot be created.
    pub async fn build(self) -> Result<Client, Error> {
        let url = self.url.ok_or_else(|| Error::configuration("URL is required"))?;
        let credentials =
            self.credentials.ok_or_else(|| Error::configuration("credentials are required"))?;

        let parsed_url = url::Url::parse(&url)?;
        if !matches!(parsed_url.scheme(), "http" | "https") {
            return Err(Error::configuration(format!(
                "unsupported URL scheme '{}'",
                parsed_url.scheme()
            )));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        #[cfg(feature = "rest")]
        let http_client = {
            let mut builder = reqwest::Client::builder()
                .timeout(timeout)
                .connect_timeout(timeout)
                .user_agent(crate::user_agent::user_agent());

            if self.tls_config.skip_verification {
                builder = builder.danger_accept_invalid_certs(true);
            }

            Some(builder.build().map_err(|e| {
                Error::configuration(format!("Failed to create HTTP client: {}", e))
            })?)
        };

        debug!(
            url = %url,
            username = credentials.username(),
            project_id = credentials.project_id(),
            auth_url = self.auth_url.as_deref(),
            "smaug client created"
        );

        let inner = ClientInner {
            url,
            auth_url: self.auth_url,
            credentials,
            pagination_config: self.pagination_config,
            timeout,
            #[cfg(feature = "rest")]
            http_client,
        };

        Ok(Client::from_inner(inner))
    }
}
