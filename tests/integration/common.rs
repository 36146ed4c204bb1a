//! Common test harness for the integration tests.

use std::sync::Once;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use smaug::{Client, PaginationConfig, TokenCredentials};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

static TRACING: Once = Once::new();

/// Installs a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a client for `server` with the given default page size.
pub async fn client_for(server: &MockServer, page_size: usize) -> Result<Client> {
    init_tracing();
    Client::builder()
        .url(server.uri())
        .credentials(
            TokenCredentials::new("integration-token")
                .with_username("admin")
                .with_project_id("proj_test"),
        )
        .pagination_config(PaginationConfig::new().with_page_size(page_size))
        .build()
        .await
        .context("failed to build client")
}

/// Triggers named `a` through `g`, stored out of order.
pub fn trigger_fixtures() -> Vec<Value> {
    ["d", "a", "g", "c", "f", "b", "e"]
        .iter()
        .map(|name| {
            json!({
                "id": format!("trg_{}", name),
                "name": name,
                "type": "time",
                "properties": {"pattern": "0 * * * *", "format": "crontab"}
            })
        })
        .collect()
}

/// Answers list calls from a fixed collection.
///
/// Sorts by `sort_key` (default `id`) in `sort_dir`, starts after `marker`
/// and returns at most `limit` entities under `key`. An unknown marker gets a
/// 404 the way the service answers it.
pub struct CollectionResponder {
    key: &'static str,
    items: Vec<Value>,
}

impl CollectionResponder {
    pub fn new(key: &'static str, items: Vec<Value>) -> Self {
        Self { key, items }
    }
}

impl Respond for CollectionResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut marker = None;
        let mut limit = usize::MAX;
        let mut sort_key = "id".to_string();
        let mut descending = false;
        for (name, value) in request.url.query_pairs() {
            match name.as_ref() {
                "marker" => marker = Some(value.into_owned()),
                "limit" => limit = value.parse().unwrap_or(usize::MAX),
                "sort_key" => sort_key = value.into_owned(),
                "sort_dir" => descending = value == "desc",
                _ => {}
            }
        }

        let mut items = self.items.clone();
        items.sort_by_key(|item| {
            item.get(&sort_key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_lowercase()
        });
        if descending {
            items.reverse();
        }

        let start = match marker {
            Some(marker) => match items.iter().position(|item| item["id"] == marker.as_str()) {
                Some(position) => position + 1,
                None => {
                    return ResponseTemplate::new(404)
                        .insert_header("x-openstack-request-id", "req-marker-missing")
                        .set_body_string(format!("marker {} could not be found", marker));
                }
            },
            None => 0,
        };

        let page: Vec<Value> = items.into_iter().skip(start).take(limit).collect();
        let mut body = serde_json::Map::new();
        body.insert(self.key.to_string(), Value::Array(page));
        ResponseTemplate::new(200).set_body_json(Value::Object(body))
    }
}

/// Starts a server exposing `items` as `GET {collection_path}`.
pub async fn serve_collection(
    collection_path: &str,
    key: &'static str,
    items: Vec<Value>,
) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(collection_path))
        .respond_with(CollectionResponder::new(key, items))
        .mount(&server)
        .await;
    server
}

/// Names of a page's triggers, in display order.
pub fn trigger_names(triggers: &[smaug::resources::Trigger]) -> Vec<String> {
    triggers
        .iter()
        .map(|trigger| trigger.name.clone().unwrap_or_default())
        .collect()
}
