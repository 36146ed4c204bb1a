//! Protection plans.

use serde::{Deserialize, Serialize};

use super::collection::{ListRequest, PagedListRequest, ResourceList};
use crate::Client;
use crate::error::Error;
use crate::pagination::{Identified, SortField};

/// Client for protection plan operations.
///
/// Access via `client.plans()`.
///
/// ## Example
///
/// ```rust,ignore
/// let plans = client.plans();
///
/// // First page, sorted by name
/// let page = plans.list_paged().sort_key("name").sort_dir(SortOrder::Ascending).await?;
///
/// // Create a plan protecting one server
/// let plan = plans
///     .create(CreatePlanRequest::new("nightly", "prv_os_infra").with_resource(
///         Resource::new("srv_1", "OS::Nova::Server", "web-1"),
///     ))
///     .await?;
/// ```
#[derive(Clone)]
pub struct PlansClient {
    client: Client,
    collection: ResourceList<Plan>,
}

impl PlansClient {
    pub(crate) fn new(client: Client) -> Self {
        let collection =
            ResourceList::new(client.clone(), "/plans", "plans").with_detail_path("/plans/detail");
        Self { client, collection }
    }

    /// Returns the plan collection as a list source.
    pub fn collection(&self) -> &ResourceList<Plan> {
        &self.collection
    }

    /// Lists plans in a single call.
    pub fn list(&self) -> ListRequest<Plan> {
        ListRequest::new(self.collection.clone())
    }

    /// Fetches one page of plans.
    pub fn list_paged(&self) -> PagedListRequest<Plan> {
        PagedListRequest::new(self.collection.clone())
    }

    /// Creates a plan.
    pub async fn create(&self, request: CreatePlanRequest) -> Result<Plan, Error> {
        let body = PlanEnvelope { plan: &request };
        self.client.inner().post_wrapped("/plans", &body, "plan").await
    }

    /// Gets a plan by ID.
    pub async fn get(&self, plan_id: impl AsRef<str>) -> Result<Plan, Error> {
        let path = format!("/plans/{}", urlencoding::encode(plan_id.as_ref()));
        self.client.inner().get_wrapped(&path, "plan").await
    }

    /// Updates a plan.
    pub async fn update(
        &self,
        plan_id: impl AsRef<str>,
        request: UpdatePlanRequest,
    ) -> Result<Plan, Error> {
        let path = format!("/plans/{}", urlencoding::encode(plan_id.as_ref()));
        let body = PlanEnvelope { plan: &request };
        self.client.inner().put_wrapped(&path, &body, "plan").await
    }

    /// Deletes a plan.
    pub async fn delete(&self, plan_id: impl AsRef<str>) -> Result<(), Error> {
        let path = format!("/plans/{}", urlencoding::encode(plan_id.as_ref()));
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for PlansClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlansClient").finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct PlanEnvelope<'a, T> {
    plan: &'a T,
}

/// A protection plan: a set of resources protected by one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// The plan ID.
    pub id: String,
    /// The plan name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Plan status, e.g. `suspended` or `started`.
    #[serde(default)]
    pub status: Option<String>,
    /// The protection provider executing the plan.
    #[serde(default)]
    pub provider_id: Option<String>,
    /// Protected resources.
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Provider-specific parameters.
    #[serde(default)]
    pub parameters: serde_json::Value,
}

impl SortField for Plan {
    fn sort_value(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "name" => self.name.as_deref(),
            "description" => self.description.as_deref(),
            "status" => self.status.as_deref(),
            "provider_id" => self.provider_id.as_deref(),
            _ => None,
        }
    }
}

impl Identified for Plan {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A resource referenced by a plan or a protectable instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// The resource ID in its owning service.
    pub id: String,
    /// The protectable type, e.g. `OS::Nova::Server`.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Resource {
    /// Creates a resource reference.
    pub fn new(
        id: impl Into<String>,
        resource_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
            name: Some(name.into()),
        }
    }
}

impl SortField for Resource {
    fn sort_value(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "type" => Some(&self.resource_type),
            "name" => self.name.as_deref(),
            _ => None,
        }
    }
}

impl Identified for Resource {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request to create a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    /// The plan name.
    pub name: String,
    /// The protection provider.
    pub provider_id: String,
    /// Resources to protect.
    pub resources: Vec<Resource>,
    /// Provider-specific parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

impl CreatePlanRequest {
    /// Creates a request with no resources.
    pub fn new(name: impl Into<String>, provider_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider_id: provider_id.into(),
            resources: Vec::new(),
            parameters: None,
        }
    }

    /// Adds a resource to protect.
    #[must_use]
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Sets the provider parameters.
    #[must_use]
    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// Request to update a plan. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlanRequest {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New status, e.g. `started`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Replacement resource list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
}

impl UpdatePlanRequest {
    /// Creates an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the resource list.
    #[must_use]
    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = Some(resources);
        self
    }
}
