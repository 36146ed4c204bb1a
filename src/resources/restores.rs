//! Restores of checkpoints.

use serde::{Deserialize, Serialize};

use super::collection::{ListRequest, PagedListRequest, ResourceList};
use crate::Client;
use crate::error::Error;
use crate::pagination::{Identified, SortField};

/// Client for restore operations.
///
/// Access via `client.restores()`.
#[derive(Clone)]
pub struct RestoresClient {
    client: Client,
    collection: ResourceList<Restore>,
}

impl RestoresClient {
    pub(crate) fn new(client: Client) -> Self {
        let collection = ResourceList::new(client.clone(), "/restores", "restores");
        Self { client, collection }
    }

    /// Returns the collection as a list source.
    pub fn collection(&self) -> &ResourceList<Restore> {
        &self.collection
    }

    /// Lists restores in a single call.
    pub fn list(&self) -> ListRequest<Restore> {
        ListRequest::new(self.collection.clone())
    }

    /// Fetches one page of restores.
    pub fn list_paged(&self) -> PagedListRequest<Restore> {
        PagedListRequest::new(self.collection.clone())
    }

    /// Starts restoring a checkpoint.
    pub async fn create(&self, request: CreateRestoreRequest) -> Result<Restore, Error> {
        let body = RestoreEnvelope { restore: &request };
        self.client.inner().post_wrapped("/restores", &body, "restore").await
    }

    /// Gets a restore by ID.
    pub async fn get(&self, restore_id: impl AsRef<str>) -> Result<Restore, Error> {
        let path = format!("/restores/{}", urlencoding::encode(restore_id.as_ref()));
        self.client.inner().get_wrapped(&path, "restore").await
    }

    /// Deletes a restore record.
    pub async fn delete(&self, restore_id: impl AsRef<str>) -> Result<(), Error> {
        let path = format!("/restores/{}", urlencoding::encode(restore_id.as_ref()));
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for RestoresClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestoresClient").finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct RestoreEnvelope<'a> {
    restore: &'a CreateRestoreRequest,
}

/// A restore of one checkpoint into a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restore {
    /// The restore ID.
    pub id: String,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Provider that created the checkpoint.
    #[serde(default)]
    pub provider_id: Option<String>,
    /// The checkpoint being restored.
    #[serde(default)]
    pub checkpoint_id: Option<String>,
    /// Where the data is restored to, typically an identity URL.
    #[serde(default)]
    pub restore_target: Option<String>,
    /// Provider-specific restore parameters.
    #[serde(default)]
    pub parameters: serde_json::Value,
    /// Restore status, e.g. `in_progress` or `success`.
    #[serde(default)]
    pub status: Option<String>,
}

impl SortField for Restore {
    fn sort_value(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "project_id" => self.project_id.as_deref(),
            "provider_id" => self.provider_id.as_deref(),
            "checkpoint_id" => self.checkpoint_id.as_deref(),
            "restore_target" => self.restore_target.as_deref(),
            "status" => self.status.as_deref(),
            _ => None,
        }
    }
}

impl Identified for Restore {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request to restore a checkpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRestoreRequest {
    /// Provider that created the checkpoint.
    pub provider_id: String,
    /// The checkpoint to restore.
    pub checkpoint_id: String,
    /// Where to restore to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_target: Option<String>,
    /// Provider-specific parameters.
    #[serde(default)]
    pub parameters: serde_json::Value,
}

impl CreateRestoreRequest {
    /// Creates a request restoring `checkpoint_id` in place.
    pub fn new(provider_id: impl Into<String>, checkpoint_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            checkpoint_id: checkpoint_id.into(),
            restore_target: None,
            parameters: serde_json::Value::Object(Default::default()),
        }
    }

    /// Sets the restore target.
    #[must_use]
    pub fn with_restore_target(mut self, restore_target: impl Into<String>) -> Self {
        self.restore_target = Some(restore_target.into());
        self
    }

    /// Sets the restore parameters.
    #[must_use]
    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.parameters = parameters;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_restore_request() {
        let req = CreateRestoreRequest::new("prv_1", "chk_1").with_restore_target("http://keystone:5000/v3");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "provider_id": "prv_1",
                "checkpoint_id": "chk_1",
                "restore_target": "http://keystone:5000/v3",
                "parameters": {}
            })
        );
    }

    #[test]
    fn test_restore_sort_fields() {
        let restore: Restore = serde_json::from_value(json!({
            "id": "rst_1",
            "checkpoint_id": "chk_1",
            "status": "success"
        }))
        .unwrap();
        assert_eq!(restore.sort_value("status"), Some("success"));
        assert_eq!(restore.sort_value("name"), None);
        assert_eq!(restore.id(), "rst_1");
    }
}
