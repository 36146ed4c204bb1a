//! Client for the Smaug data-protection service.
//!
//! The console builds one [`Client`] per inbound request from that request's
//! credentials and passes it explicitly to whatever needs it. Nothing is
//! memoized across requests.
//!
//! ```rust,ignore
//! use smaug::prelude::*;
//!
//! let client = Client::builder()
//!     .service_config(ServiceConfig::builder().endpoint(catalog_url).build())
//!     .credentials(TokenCredentials::new(token).with_project_id(project_id))
//!     .build()
//!     .await?;
//!
//! let page = client.plans().list_paged().sort_key("name").await?;
//! ```

mod builder;
mod inner;

pub use builder::{ClientBuilder, HasCredentials, HasUrl, NoCredentials, NoUrl};

use std::sync::Arc;

use crate::resources::{
    CheckpointsClient, PlansClient, ProtectablesClient, ProvidersClient, RestoresClient,
    ScheduledOperationsClient, TriggersClient,
};

/// The Smaug client.
///
/// `Client` is `Clone`; clones share one HTTP connection pool and the same
/// credentials.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    ///
    /// The builder uses the typestate pattern so the endpoint and the
    /// credentials must be supplied before `build()` is available.
    pub fn builder() -> ClientBuilder<NoUrl, NoCredentials> {
        ClientBuilder::new()
    }

    /// Protection plans.
    pub fn plans(&self) -> PlansClient {
        PlansClient::new(self.clone())
    }

    /// Scheduled operations (a plan bound to a trigger).
    pub fn scheduled_operations(&self) -> ScheduledOperationsClient {
        ScheduledOperationsClient::new(self.clone())
    }

    /// Restores.
    pub fn restores(&self) -> RestoresClient {
        RestoresClient::new(self.clone())
    }

    /// Protection providers.
    pub fn providers(&self) -> ProvidersClient {
        ProvidersClient::new(self.clone())
    }

    /// Checkpoints of one provider.
    pub fn checkpoints(&self, provider_id: impl Into<String>) -> CheckpointsClient {
        CheckpointsClient::new(self.clone(), provider_id)
    }

    /// Triggers.
    pub fn triggers(&self) -> TriggersClient {
        TriggersClient::new(self.clone())
    }

    /// Protectable types and their instances.
    pub fn protectables(&self) -> ProtectablesClient {
        ProtectablesClient::new(self.clone())
    }

    /// Returns the resolved endpoint.
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Returns the identity service URL, if one was configured.
    pub fn auth_url(&self) -> Option<&str> {
        self.inner.auth_url.as_deref()
    }

    /// Returns the pagination configuration.
    pub fn pagination_config(&self) -> &crate::config::PaginationConfig {
        &self.inner.pagination_config
    }

    /// Creates a client from the inner implementation.
    pub(crate) fn from_inner(inner: inner::ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns a reference to the inner client.
    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.inner.url)
            .finish_non_exhaustive()
    }
}
