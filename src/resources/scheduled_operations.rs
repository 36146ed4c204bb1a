//! Scheduled operations: a plan action bound to a trigger.

use serde::{Deserialize, Serialize};

use super::collection::{ListRequest, PagedListRequest, ResourceList};
use crate::Client;
use crate::error::Error;
use crate::pagination::{Identified, SortField};

/// Client for scheduled operation management.
///
/// Access via `client.scheduled_operations()`.
#[derive(Clone)]
pub struct ScheduledOperationsClient {
    client: Client,
    collection: ResourceList<ScheduledOperation>,
}

impl ScheduledOperationsClient {
    pub(crate) fn new(client: Client) -> Self {
        let collection = ResourceList::new(client.clone(), "/scheduled_operations", "operations");
        Self { client, collection }
    }

    /// Returns the collection as a list source.
    pub fn collection(&self) -> &ResourceList<ScheduledOperation> {
        &self.collection
    }

    /// Lists scheduled operations in a single call.
    pub fn list(&self) -> ListRequest<ScheduledOperation> {
        ListRequest::new(self.collection.clone())
    }

    /// Fetches one page of scheduled operations.
    pub fn list_paged(&self) -> PagedListRequest<ScheduledOperation> {
        PagedListRequest::new(self.collection.clone())
    }

    /// Creates a scheduled operation.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// let op = client
    ///     .scheduled_operations()
    ///     .create(CreateScheduledOperationRequest::protect("nightly", "trg_1", &plan.id, &plan_provider))
    ///     .await?;
    /// ```
    pub async fn create(
        &self,
        request: CreateScheduledOperationRequest,
    ) -> Result<ScheduledOperation, Error> {
        let body = ScheduledOperationEnvelope {
            scheduled_operation: &request,
        };
        self.client
            .inner()
            .post_wrapped("/scheduled_operations", &body, "scheduled_operation")
            .await
    }

    /// Gets a scheduled operation by ID.
    pub async fn get(&self, operation_id: impl AsRef<str>) -> Result<ScheduledOperation, Error> {
        let path = format!(
            "/scheduled_operations/{}",
            urlencoding::encode(operation_id.as_ref())
        );
        self.client.inner().get_wrapped(&path, "scheduled_operation").await
    }

    /// Deletes a scheduled operation.
    pub async fn delete(&self, operation_id: impl AsRef<str>) -> Result<(), Error> {
        let path = format!(
            "/scheduled_operations/{}",
            urlencoding::encode(operation_id.as_ref())
        );
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for ScheduledOperationsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledOperationsClient").finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct ScheduledOperationEnvelope<'a> {
    scheduled_operation: &'a CreateScheduledOperationRequest,
}

/// An operation the service runs whenever its trigger fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledOperation {
    /// The scheduled operation ID.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Operation type, e.g. `protect`.
    #[serde(default)]
    pub operation_type: Option<String>,
    /// The trigger that fires the operation.
    #[serde(default)]
    pub trigger_id: Option<String>,
    /// Type-specific definition, e.g. plan and provider IDs.
    #[serde(default)]
    pub operation_definition: serde_json::Value,
    /// Whether the operation is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl SortField for ScheduledOperation {
    fn sort_value(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "name" => self.name.as_deref(),
            "operation_type" => self.operation_type.as_deref(),
            "trigger_id" => self.trigger_id.as_deref(),
            _ => None,
        }
    }
}

impl Identified for ScheduledOperation {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request to create a scheduled operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateScheduledOperationRequest {
    /// Display name.
    pub name: String,
    /// Operation type, e.g. `protect`.
    pub operation_type: String,
    /// The trigger that fires the operation.
    pub trigger_id: String,
    /// Type-specific definition.
    pub operation_definition: serde_json::Value,
}

impl CreateScheduledOperationRequest {
    /// Creates a request.
    pub fn new(
        name: impl Into<String>,
        operation_type: impl Into<String>,
        trigger_id: impl Into<String>,
        operation_definition: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            operation_type: operation_type.into(),
            trigger_id: trigger_id.into(),
            operation_definition,
        }
    }

    /// Creates a `protect` operation running `plan_id` on `provider_id`.
    pub fn protect(
        name: impl Into<String>,
        trigger_id: impl Into<String>,
        plan_id: impl Into<String>,
        provider_id: impl Into<String>,
    ) -> Self {
        let definition = serde_json::json!({
            "plan_id": plan_id.into(),
            "provider_id": provider_id.into(),
        });
        Self::new(name, "protect", trigger_id, definition)
    }
}
