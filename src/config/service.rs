//! Endpoint configuration for the Smaug service.

use tracing::warn;

/// Endpoint used when the service catalog has no `data-protect` entry.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8799";

/// Service-catalog type under which Smaug registers its endpoint.
pub const SERVICE_TYPE: &str = "data-protect";

/// Explicit service configuration passed to client construction.
///
/// Replaces ambient settings lookup: the console resolves the catalog
/// endpoint and the identity URL itself and hands them over here.
///
/// ## Example
///
/// ```rust
/// use smaug::ServiceConfig;
///
/// let config = ServiceConfig::builder()
///     .endpoint("https://backup.example.com/v1/proj_1")
///     .auth_url("https://keystone.example.com/v3")
///     .build();
/// assert_eq!(config.resolve_endpoint(), "https://backup.example.com/v1/proj_1");
///
/// // No catalog entry: fall back to the local default
/// assert_eq!(ServiceConfig::default().resolve_endpoint(), "http://localhost:8799");
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct ServiceConfig {
    /// Endpoint from the service catalog, if one was found.
    #[builder(into)]
    pub endpoint: Option<String>,

    /// Identity service URL used by the remote service to validate tokens.
    #[builder(into)]
    pub auth_url: Option<String>,

    /// Endpoint used when `endpoint` is absent.
    #[builder(into, default = DEFAULT_ENDPOINT.to_string())]
    pub default_endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ServiceConfig {
    /// Returns the endpoint to talk to, falling back to the default.
    pub fn resolve_endpoint(&self) -> &str {
        match self.endpoint.as_deref() {
            Some(endpoint) if !endpoint.is_empty() => endpoint,
            _ => {
                warn!(
                    service_type = SERVICE_TYPE,
                    endpoint = %self.default_endpoint,
                    "Smaug API location could not be found in service catalog, using default"
                );
                &self.default_endpoint
            }
        }
    }

    /// Returns `true` if the catalog endpoint is missing.
    pub fn uses_default_endpoint(&self) -> bool {
        self.endpoint.as_deref().is_none_or(str::is_empty)
    }
}
