//! Generic list plumbing shared by the resource sub-clients.

use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;

use crate::Client;
use crate::config::PageSizePolicy;
use crate::error::Result;
use crate::pagination::{ListQuery, ListSource, PageOptions, PagedList, SortField, SortOrder, fetch_page};

/// One listable collection of the service.
///
/// Knows the collection path, the optional detailed path and the key the
/// entities are wrapped under in the response. Implements [`ListSource`], so
/// it can be handed to [`fetch_page`] or to [`crate::view::ListView`].
pub struct ResourceList<T> {
    client: Client,
    path: String,
    detail_path: Option<String>,
    collection_key: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T> ResourceList<T> {
    pub(crate) fn new(client: Client, path: impl Into<String>, collection_key: &'static str) -> Self {
        Self {
            client,
            path: path.into(),
            detail_path: None,
            collection_key,
            _entity: PhantomData,
        }
    }

    /// Uses `detail_path` when the query asks for the detailed representation.
    pub(crate) fn with_detail_path(mut self, detail_path: impl Into<String>) -> Self {
        self.detail_path = Some(detail_path.into());
        self
    }

    /// Returns the collection path, e.g. `/plans`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the response key the entities are wrapped under.
    pub fn collection_key(&self) -> &str {
        self.collection_key
    }

    /// Path plus query string for one list call.
    pub(crate) fn request_path(&self, query: &ListQuery) -> String {
        let base = match (&self.detail_path, query.detailed) {
            (Some(detail_path), true) => detail_path.as_str(),
            _ => self.path.as_str(),
        };
        let query_string = query.to_query_string();
        if query_string.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, query_string)
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}

impl<T> Clone for ResourceList<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            path: self.path.clone(),
            detail_path: self.detail_path.clone(),
            collection_key: self.collection_key,
            _entity: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for ResourceList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceList")
            .field("path", &self.path)
            .field("collection_key", &self.collection_key)
            .finish_non_exhaustive()
    }
}

impl<T> ListSource<T> for ResourceList<T>
where
    T: DeserializeOwned + Send,
{
    fn list<'a>(&'a self, query: &'a ListQuery) -> BoxFuture<'a, Result<Vec<T>>> {
        Box::pin(async move {
            let path = self.request_path(query);
            self.client.inner().get_wrapped(&path, self.collection_key).await
        })
    }

    fn label(&self) -> &str {
        &self.path
    }
}

/// Request to list a collection in one call.
///
/// Awaiting the request returns whatever the service sends for the given
/// filters, cursor, limit and sort; no pagination flags are computed.
pub struct ListRequest<T> {
    collection: ResourceList<T>,
    query: ListQuery,
}

impl<T> ListRequest<T> {
    pub(crate) fn new(collection: ResourceList<T>) -> Self {
        Self {
            collection,
            query: ListQuery::new(),
        }
    }

    /// Requests the detailed representation.
    #[must_use]
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.query.detailed = detailed;
        self
    }

    /// Adds a filter passed through as a query parameter.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query = self.query.filter(key, value);
        self
    }

    /// Sets the cursor.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.query.marker = Some(marker.into());
        self
    }

    /// Sets the maximum number of results to return.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Sets the sort field.
    #[must_use]
    pub fn sort_key(mut self, sort_key: impl Into<String>) -> Self {
        self.query.sort_key = Some(sort_key.into());
        self
    }

    /// Sets the sort direction.
    #[must_use]
    pub fn sort_dir(mut self, sort_dir: SortOrder) -> Self {
        self.query.sort_dir = Some(sort_dir);
        self
    }

    /// Sets a combined `key:dir[,key:dir...]` sort expression.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.query.sort = Some(sort.into());
        self
    }

    /// Returns the query that will be sent.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }
}

impl<T> ListRequest<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn execute(self) -> Result<Vec<T>> {
        self.collection.list(&self.query).await
    }
}

impl<T> IntoFuture for ListRequest<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = Result<Vec<T>>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

/// Request to fetch one page of a collection.
///
/// Paginated by default: the page size comes from the client's
/// [`PaginationConfig`](crate::PaginationConfig) unless overridden, one
/// extra entity is requested to detect a following page, and
/// [`reversed_order`](Self::reversed_order) serves "previous page" links.
///
/// ## Example
///
/// ```rust,ignore
/// let page = client
///     .triggers()
///     .list_paged()
///     .marker(prev_marker)
///     .reversed_order(true)
///     .sort_key("name")
///     .sort_dir(SortOrder::Ascending)
///     .await?;
/// ```
pub struct PagedListRequest<T> {
    collection: ResourceList<T>,
    query: ListQuery,
    options: PageOptions,
    policy: Option<Arc<dyn PageSizePolicy>>,
}

impl<T> PagedListRequest<T> {
    pub(crate) fn new(collection: ResourceList<T>) -> Self {
        Self {
            collection,
            query: ListQuery::new(),
            options: PageOptions::paginated(),
            policy: None,
        }
    }

    /// Requests the detailed representation.
    #[must_use]
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.query.detailed = detailed;
        self
    }

    /// Adds a filter passed through as a query parameter.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query = self.query.filter(key, value);
        self
    }

    /// Sets the cursor.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.query.marker = Some(marker.into());
        self
    }

    /// Sets the cursor if one is present.
    #[must_use]
    pub fn maybe_marker(mut self, marker: Option<impl Into<String>>) -> Self {
        self.query.marker = marker.map(Into::into);
        self
    }

    /// Sets the limit sent when pagination is disabled.
    ///
    /// Ignored while paginating; the limit is then one more than the page
    /// size.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Sets the sort field, also used to restore order on reversed fetches.
    #[must_use]
    pub fn sort_key(mut self, sort_key: impl Into<String>) -> Self {
        self.query.sort_key = Some(sort_key.into());
        self
    }

    /// Sets the sort direction as displayed.
    #[must_use]
    pub fn sort_dir(mut self, sort_dir: SortOrder) -> Self {
        self.query.sort_dir = Some(sort_dir);
        self
    }

    /// Sets a combined `key:dir[,key:dir...]` sort expression.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.query.sort = Some(sort.into());
        self
    }

    /// Enables or disables pagination. Enabled by default.
    #[must_use]
    pub fn paginate(mut self, paginate: bool) -> Self {
        self.options.paginate = paginate;
        self
    }

    /// Marks the fetch as serving a "previous page" navigation.
    #[must_use]
    pub fn reversed_order(mut self, reversed_order: bool) -> Self {
        self.options.reversed_order = reversed_order;
        self
    }

    /// Overrides the page size, clamped to the client's maximum.
    #[must_use]
    pub fn page_size(mut self, page_size: usize) -> Self {
        let clamped = self.collection.client().pagination_config().clamp(page_size);
        self.options.page_size = Some(clamped);
        self
    }

    /// Uses `policy` instead of the client's pagination config.
    #[must_use]
    pub fn page_size_policy(mut self, policy: Arc<dyn PageSizePolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Returns the query as configured, before pagination adjusts it.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Returns the pagination options.
    pub fn options(&self) -> PageOptions {
        self.options
    }
}

impl<T> PagedListRequest<T>
where
    T: DeserializeOwned + SortField + Send + 'static,
{
    async fn execute(self) -> Result<PagedList<T>> {
        let policy: &dyn PageSizePolicy = match &self.policy {
            Some(policy) => policy.as_ref(),
            None => self.collection.client().pagination_config(),
        };
        fetch_page(&self.collection, self.query, self.options, policy).await
    }
}

impl<T> IntoFuture for PagedListRequest<T>
where
    T: DeserializeOwned + SortField + Send + 'static,
{
    type Output = Result<PagedList<T>>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn test_client() -> Client {
        Client::builder()
            .url("https://backup.example.com/v1/proj")
            .credentials("token")
            .pagination_config(crate::PaginationConfig::builder().max_page_size(50).build())
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_request_path_without_query() {
        let list: ResourceList<Value> = ResourceList::new(test_client().await, "/plans", "plans");
        assert_eq!(list.request_path(&ListQuery::new()), "/plans");
        assert_eq!(list.label(), "/plans");
        assert_eq!(list.collection_key(), "plans");
    }

    #[tokio::test]
    async fn test_request_path_detailed() {
        let list: ResourceList<Value> =
            ResourceList::new(test_client().await, "/plans", "plans").with_detail_path("/plans/detail");
        let query = ListQuery::new().detailed(true).limit(21);
        assert_eq!(list.request_path(&query), "/plans/detail?limit=21");

        let plain: ResourceList<Value> = ResourceList::new(test_client().await, "/triggers", "triggers");
        assert_eq!(plain.request_path(&ListQuery::new().detailed(true)), "/triggers");
    }

    #[tokio::test]
    async fn test_list_request_builders() {
        let list: ResourceList<Value> = ResourceList::new(test_client().await, "/plans", "plans");
        let request = ListRequest::new(list)
            .detailed(true)
            .filter("status", "suspended")
            .marker("pln_1")
            .limit(5)
            .sort_key("name")
            .sort_dir(SortOrder::Descending)
            .sort("name:desc");

        let query = request.query();
        assert!(query.detailed);
        assert_eq!(query.search_opts.get("status").map(String::as_str), Some("suspended"));
        assert_eq!(query.marker.as_deref(), Some("pln_1"));
        assert_eq!(query.limit, Some(5));
        assert_eq!(query.sort_dir, Some(SortOrder::Descending));
        assert_eq!(query.sort.as_deref(), Some("name:desc"));
    }

    #[tokio::test]
    async fn test_paged_request_defaults() {
        let list: ResourceList<Value> = ResourceList::new(test_client().await, "/plans", "plans");
        let request = PagedListRequest::new(list);
        assert!(request.options().paginate);
        assert!(!request.options().reversed_order);
        assert_eq!(request.options().page_size, None);
    }

    #[tokio::test]
    async fn test_paged_request_page_size_is_clamped() {
        let list: ResourceList<Value> = ResourceList::new(test_client().await, "/plans", "plans");
        let request = PagedListRequest::new(list.clone()).page_size(500);
        assert_eq!(request.options().page_size, Some(50));

        let request = PagedListRequest::new(list).page_size(0);
        assert_eq!(request.options().page_size, Some(1));
    }

    #[tokio::test]
    async fn test_paged_request_maybe_marker() {
        let list: ResourceList<Value> = ResourceList::new(test_client().await, "/plans", "plans");
        let request = PagedListRequest::new(list.clone()).maybe_marker(Some("pln_9"));
        assert_eq!(request.query().marker.as_deref(), Some("pln_9"));

        let request = PagedListRequest::new(list).marker("x").maybe_marker(None::<String>);
        assert_eq!(request.query().marker, None);
    }
}

#[cfg(all(test, feature = "rest"))]
mod wiremock_tests {
    use super::*;
    use crate::ErrorKind;
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_client(server: &MockServer) -> Client {
        Client::builder()
            .url(server.uri())
            .credentials(crate::TokenCredentials::new("test_token").with_project_id("proj"))
            .pagination_config(crate::PaginationConfig::new().with_page_size(2))
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_sends_headers_and_unwraps_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/plans"))
            .and(header("X-Auth-Token", "test_token"))
            .and(header("X-Project-Id", "proj"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "plans": [{"id": "pln_1", "name": "a"}]
            })))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let list: ResourceList<Value> = ResourceList::new(client, "/plans", "plans");
        let items = ListRequest::new(list).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "pln_1");
    }

    #[tokio::test]
    async fn test_paged_request_uses_client_page_size() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/plans"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "plans": [{"id": "1"}, {"id": "2"}, {"id": "3"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let list: ResourceList<Value> = ResourceList::new(client, "/plans", "plans");
        let page = PagedListRequest::new(list).await.unwrap();
        assert_eq!(page.len(), 2);
        assert!(page.has_more_data);
        assert!(!page.has_prev_data);
    }

    #[tokio::test]
    async fn test_paged_request_with_policy_override() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/plans"))
            .and(query_param("limit", "6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"plans": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let list: ResourceList<Value> = ResourceList::new(client, "/plans", "plans");
        let page = PagedListRequest::new(list)
            .page_size_policy(Arc::new(5usize))
            .await
            .unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_missing_collection_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/plans"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let list: ResourceList<Value> = ResourceList::new(client, "/plans", "plans");
        let err = ListRequest::new(list).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }

    #[tokio::test]
    async fn test_error_carries_request_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/plans"))
            .respond_with(
                ResponseTemplate::new(404)
                    .insert_header("x-openstack-request-id", "req-42")
                    .set_body_string("marker not found"),
            )
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let list: ResourceList<Value> = ResourceList::new(client, "/plans", "plans");
        let err = PagedListRequest::new(list).marker("gone").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.request_id(), Some("req-42"));
    }
}
