//! Checkpoints held by one provider.

use serde::{Deserialize, Serialize};

use super::collection::{ListRequest, PagedListRequest, ResourceList};
use crate::Client;
use crate::error::Error;
use crate::pagination::{Identified, SortField};

/// Client for the checkpoints of one provider.
///
/// Access via `client.checkpoints(provider_id)`.
///
/// ## Example
///
/// ```rust,ignore
/// let checkpoints = client.checkpoints("prv_os_infra");
/// let page = checkpoints.list_paged().filter("plan_id", &plan.id).await?;
/// ```
#[derive(Clone)]
pub struct CheckpointsClient {
    client: Client,
    provider_id: String,
    collection: ResourceList<Checkpoint>,
}

impl CheckpointsClient {
    pub(crate) fn new(client: Client, provider_id: impl Into<String>) -> Self {
        let provider_id = provider_id.into();
        let path = format!("/providers/{}/checkpoints", urlencoding::encode(&provider_id));
        let collection = ResourceList::new(client.clone(), path, "checkpoints");
        Self {
            client,
            provider_id,
            collection,
        }
    }

    /// Returns the provider ID.
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    /// Returns the collection as a list source.
    pub fn collection(&self) -> &ResourceList<Checkpoint> {
        &self.collection
    }

    /// Lists checkpoints in a single call.
    pub fn list(&self) -> ListRequest<Checkpoint> {
        ListRequest::new(self.collection.clone())
    }

    /// Fetches one page of checkpoints.
    pub fn list_paged(&self) -> PagedListRequest<Checkpoint> {
        PagedListRequest::new(self.collection.clone())
    }

    /// Creates a checkpoint of `plan_id`.
    pub async fn create(&self, plan_id: impl Into<String>) -> Result<Checkpoint, Error> {
        let body = CheckpointEnvelope {
            checkpoint: CreateCheckpointBody {
                plan_id: plan_id.into(),
            },
        };
        self.client
            .inner()
            .post_wrapped(self.collection.path(), &body, "checkpoint")
            .await
    }

    /// Gets a checkpoint by ID.
    pub async fn get(&self, checkpoint_id: impl AsRef<str>) -> Result<Checkpoint, Error> {
        let path = self.checkpoint_path(checkpoint_id.as_ref());
        self.client.inner().get_wrapped(&path, "checkpoint").await
    }

    /// Deletes a checkpoint.
    pub async fn delete(&self, checkpoint_id: impl AsRef<str>) -> Result<(), Error> {
        let path = self.checkpoint_path(checkpoint_id.as_ref());
        self.client.inner().delete(&path).await
    }

    fn checkpoint_path(&self, checkpoint_id: &str) -> String {
        format!(
            "{}/{}",
            self.collection.path(),
            urlencoding::encode(checkpoint_id)
        )
    }
}

impl std::fmt::Debug for CheckpointsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckpointsClient")
            .field("provider_id", &self.provider_id)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct CheckpointEnvelope {
    checkpoint: CreateCheckpointBody,
}

#[derive(Serialize)]
struct CreateCheckpointBody {
    plan_id: String,
}

/// A point-in-time copy of a plan's resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// The checkpoint ID.
    pub id: String,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Checkpoint status, e.g. `protecting` or `available`.
    #[serde(default)]
    pub status: Option<String>,
    /// Snapshot of the plan the checkpoint was taken from.
    #[serde(default)]
    pub protection_plan: Option<ProtectionPlanSummary>,
    /// Creation time as reported by the service.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SortField for Checkpoint {
    fn sort_value(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "project_id" => self.project_id.as_deref(),
            "status" => self.status.as_deref(),
            "created_at" => self.created_at.as_deref(),
            "plan_name" => self.protection_plan.as_ref().and_then(|p| p.name.as_deref()),
            _ => None,
        }
    }
}

impl Identified for Checkpoint {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The plan fields recorded in a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionPlanSummary {
    /// The plan ID.
    pub id: String,
    /// The plan name at checkpoint time.
    #[serde(default)]
    pub name: Option<String>,
}
