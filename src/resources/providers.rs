//! Protection providers.

use serde::{Deserialize, Serialize};

use super::collection::{ListRequest, PagedListRequest, ResourceList};
use crate::Client;
use crate::error::Error;
use crate::pagination::{Identified, SortField};

/// Client for protection providers. Providers are read-only.
///
/// Access via `client.providers()`.
#[derive(Clone)]
pub struct ProvidersClient {
    client: Client,
    collection: ResourceList<Provider>,
}

impl ProvidersClient {
    pub(crate) fn new(client: Client) -> Self {
        let collection = ResourceList::new(client.clone(), "/providers", "providers");
        Self { client, collection }
    }

    /// Returns the collection as a list source.
    pub fn collection(&self) -> &ResourceList<Provider> {
        &self.collection
    }

    /// Lists providers in a single call.
    pub fn list(&self) -> ListRequest<Provider> {
        ListRequest::new(self.collection.clone())
    }

    /// Fetches one page of providers.
    pub fn list_paged(&self) -> PagedListRequest<Provider> {
        PagedListRequest::new(self.collection.clone())
    }

    /// Gets a provider by ID.
    pub async fn get(&self, provider_id: impl AsRef<str>) -> Result<Provider, Error> {
        let path = format!("/providers/{}", urlencoding::encode(provider_id.as_ref()));
        self.client.inner().get_wrapped(&path, "provider").await
    }
}

impl std::fmt::Debug for ProvidersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvidersClient").finish_non_exhaustive()
    }
}

/// A protection provider: a bank plus the protection plugins it runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// The provider ID.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// JSON schemas for plan parameters, keyed by resource type.
    #[serde(default)]
    pub extended_info_schema: serde_json::Value,
}

impl SortField for Provider {
    fn sort_value(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "name" => self.name.as_deref(),
            "description" => self.description.as_deref(),
            _ => None,
        }
    }
}

impl Identified for Provider {
    fn id(&self) -> &str {
        &self.id
    }
}
