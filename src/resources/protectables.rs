//! Protectable resource types and their instances.

use serde::{Deserialize, Serialize};

use super::collection::{ListRequest, PagedListRequest, ResourceList};
use super::plans::Resource;
use crate::Client;
use crate::error::Error;
use crate::pagination::{Identified, SortField};

/// Client for protectable types.
///
/// Access via `client.protectables()`. The instances of one type are
/// reached through [`instances`](Self::instances).
///
/// ## Example
///
/// ```rust,ignore
/// for type_name in client.protectables().list_types().await? {
///     let page = client.protectables().instances(&type_name).list_paged().await?;
///     println!("{}: {} instances", type_name, page.len());
/// }
/// ```
#[derive(Clone)]
pub struct ProtectablesClient {
    client: Client,
}

impl ProtectablesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists the names of all protectable types.
    pub async fn list_types(&self) -> Result<Vec<String>, Error> {
        self.client.inner().get_wrapped("/protectables", "protectable_type").await
    }

    /// Gets one protectable type with its dependent types.
    pub async fn get(&self, protectable_type: impl AsRef<str>) -> Result<ProtectableType, Error> {
        let path = format!("/protectables/{}", urlencoding::encode(protectable_type.as_ref()));
        self.client.inner().get_wrapped(&path, "protectable_type").await
    }

    /// Instances of `protectable_type`.
    pub fn instances(&self, protectable_type: impl Into<String>) -> ProtectableInstancesClient {
        ProtectableInstancesClient::new(self.client.clone(), protectable_type)
    }

    /// Gets one instance of `protectable_type`.
    pub async fn get_instance(
        &self,
        protectable_type: impl Into<String>,
        instance_id: impl AsRef<str>,
    ) -> Result<ProtectableInstance, Error> {
        self.instances(protectable_type).get(instance_id).await
    }
}

impl std::fmt::Debug for ProtectablesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtectablesClient").finish_non_exhaustive()
    }
}

/// Client for the instances of one protectable type.
#[derive(Clone)]
pub struct ProtectableInstancesClient {
    client: Client,
    protectable_type: String,
    collection: ResourceList<ProtectableInstance>,
}

impl ProtectableInstancesClient {
    fn new(client: Client, protectable_type: impl Into<String>) -> Self {
        let protectable_type = protectable_type.into();
        let path = format!(
            "/protectables/{}/instances",
            urlencoding::encode(&protectable_type)
        );
        let collection = ResourceList::new(client.clone(), path, "instances");
        Self {
            client,
            protectable_type,
            collection,
        }
    }

    /// Returns the protectable type name.
    pub fn protectable_type(&self) -> &str {
        &self.protectable_type
    }

    /// Returns the collection as a list source.
    pub fn collection(&self) -> &ResourceList<ProtectableInstance> {
        &self.collection
    }

    /// Lists instances in a single call.
    pub fn list(&self) -> ListRequest<ProtectableInstance> {
        ListRequest::new(self.collection.clone())
    }

    /// Fetches one page of instances.
    pub fn list_paged(&self) -> PagedListRequest<ProtectableInstance> {
        PagedListRequest::new(self.collection.clone())
    }

    /// Gets an instance by ID.
    pub async fn get(&self, instance_id: impl AsRef<str>) -> Result<ProtectableInstance, Error> {
        let path = format!(
            "{}/{}",
            self.collection.path(),
            urlencoding::encode(instance_id.as_ref())
        );
        self.client.inner().get_wrapped(&path, "instance").await
    }
}

impl std::fmt::Debug for ProtectableInstancesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtectableInstancesClient")
            .field("protectable_type", &self.protectable_type)
            .finish_non_exhaustive()
    }
}

/// A protectable type, e.g. `OS::Nova::Server`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectableType {
    /// The type name.
    pub name: String,
    /// Types whose instances this type depends on.
    #[serde(default)]
    pub dependent_types: Vec<String>,
}

/// One protectable resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectableInstance {
    /// The resource ID.
    pub id: String,
    /// The protectable type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Resources this instance depends on.
    #[serde(default)]
    pub dependent_resources: Vec<Resource>,
}

impl ProtectableInstance {
    /// The reference a plan uses to protect this instance.
    pub fn to_resource(&self) -> Resource {
        Resource {
            id: self.id.clone(),
            resource_type: self.resource_type.clone(),
            name: self.name.clone(),
        }
    }
}

impl SortField for ProtectableInstance {
    fn sort_value(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "type" => Some(&self.resource_type),
            "name" => self.name.as_deref(),
            _ => None,
        }
    }
}

impl Identified for ProtectableInstance {
    fn id(&self) -> &str {
        &self.id
    }
}
