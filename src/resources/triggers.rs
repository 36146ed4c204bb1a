//! Triggers that fire scheduled operations.

use serde::{Deserialize, Serialize};

use super::collection::{ListRequest, PagedListRequest, ResourceList};
use crate::Client;
use crate::error::Error;
use crate::pagination::{Identified, SortField};

/// Client for trigger management.
///
/// Access via `client.triggers()`.
///
/// ## Example
///
/// ```rust,ignore
/// let trigger = client
///     .triggers()
///     .create(CreateTriggerRequest::time("nightly", "0 2 * * *"))
///     .await?;
/// ```
#[derive(Clone)]
pub struct TriggersClient {
    client: Client,
    collection: ResourceList<Trigger>,
}

impl TriggersClient {
    pub(crate) fn new(client: Client) -> Self {
        let collection = ResourceList::new(client.clone(), "/triggers", "triggers");
        Self { client, collection }
    }

    /// Returns the collection as a list source.
    pub fn collection(&self) -> &ResourceList<Trigger> {
        &self.collection
    }

    /// Lists triggers in a single call.
    pub fn list(&self) -> ListRequest<Trigger> {
        ListRequest::new(self.collection.clone())
    }

    /// Fetches one page of triggers.
    pub fn list_paged(&self) -> PagedListRequest<Trigger> {
        PagedListRequest::new(self.collection.clone())
    }

    /// Creates a trigger.
    pub async fn create(&self, request: CreateTriggerRequest) -> Result<Trigger, Error> {
        let body = TriggerEnvelope {
            trigger_info: &request,
        };
        self.client.inner().post_wrapped("/triggers", &body, "trigger_info").await
    }

    /// Gets a trigger by ID.
    pub async fn get(&self, trigger_id: impl AsRef<str>) -> Result<Trigger, Error> {
        let path = format!("/triggers/{}", urlencoding::encode(trigger_id.as_ref()));
        self.client.inner().get_wrapped(&path, "trigger_info").await
    }

    /// Deletes a trigger.
    pub async fn delete(&self, trigger_id: impl AsRef<str>) -> Result<(), Error> {
        let path = format!("/triggers/{}", urlencoding::encode(trigger_id.as_ref()));
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for TriggersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggersClient").finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct TriggerEnvelope<'a> {
    trigger_info: &'a CreateTriggerRequest,
}

/// A trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// The trigger ID.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Trigger type, e.g. `time`.
    #[serde(rename = "type", default)]
    pub trigger_type: Option<String>,
    /// Type-specific properties, e.g. `pattern` and `format` for time triggers.
    #[serde(default)]
    pub properties: serde_json::Value,
}

impl SortField for Trigger {
    fn sort_value(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "name" => self.name.as_deref(),
            "type" => self.trigger_type.as_deref(),
            _ => None,
        }
    }
}

impl Identified for Trigger {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request to create a trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTriggerRequest {
    /// Display name.
    pub name: String,
    /// Trigger type.
    #[serde(rename = "type")]
    pub trigger_type: String,
    /// Type-specific properties.
    pub properties: serde_json::Value,
}

impl CreateTriggerRequest {
    /// Creates a request.
    pub fn new(
        name: impl Into<String>,
        trigger_type: impl Into<String>,
        properties: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            trigger_type: trigger_type.into(),
            properties,
        }
    }

    /// Creates a `time` trigger firing on a crontab `pattern`.
    pub fn time(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        let properties = serde_json::json!({
            "pattern": pattern.into(),
            "format": "crontab",
        });
        Self::new(name, "time", properties)
    }
}


#[cfg(all(test, feature = "rest"))]
mod wiremock_tests {
    use super::*;
    use crate::pagination::SortOrder;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_client(server: &MockServer) -> Client {
        Client::builder()
            .url(server.uri())
            .credentials("test_token")
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_triggers_middle_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/triggers"))
            .and(query_param("marker", "trg_2"))
            .and(query_param("limit", "3"))
            .and(query_param("sort_dir", "asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "triggers": [
                    {"id": "trg_3", "name": "c"},
                    {"id": "trg_4", "name": "d"},
                    {"id": "trg_5", "name": "e"}
                ]
            })))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let page = client
            .triggers()
            .list_paged()
            .marker("trg_2")
            .page_size(2)
            .sort_key("name")
            .sort_dir(SortOrder::Ascending)
            .await
            .unwrap();

        assert_eq!(page.len(), 2);
        assert!(page.has_more_data);
        assert!(page.has_prev_data);
        assert_eq!(page.next_marker(), Some("trg_4"));
        assert_eq!(page.prev_marker(), Some("trg_3"));
    }

    #[tokio::test]
    async fn test_create_trigger() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/triggers"))
            .and(body_json(json!({
                "trigger_info": {
                    "name": "nightly",
                    "type": "time",
                    "properties": {"pattern": "0 2 * * *", "format": "crontab"}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trigger_info": {"id": "trg_new", "name": "nightly", "type": "time"}
            })))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let trigger = client
            .triggers()
            .create(CreateTriggerRequest::time("nightly", "0 2 * * *"))
            .await
            .unwrap();
        assert_eq!(trigger.trigger_type.as_deref(), Some("time"));
    }

    #[tokio::test]
    async fn test_get_and_delete_trigger() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/triggers/trg_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trigger_info": {"id": "trg_1"}
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/triggers/trg_1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let triggers = client.triggers();
        assert_eq!(triggers.get("trg_1").await.unwrap().id, "trg_1");
        triggers.delete("trg_1").await.unwrap();
    }
}
