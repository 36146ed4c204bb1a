//! MockListSource for asserting on the queries a fetch sends.

use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::Mutex;

use crate::Error;
use crate::error::Result;
use crate::pagination::{ListQuery, ListSource};

/// A list source with a canned response.
///
/// ## Example
///
/// ```rust
/// use serde_json::json;
/// use smaug::testing::MockListSource;
///
/// let source = MockListSource::new().respond_with(vec![json!({"name": "a"})]);
/// // drive fetch_page(&source, ...) and then inspect source.queries()
/// assert!(source.queries().is_empty());
/// ```
#[derive(Clone)]
pub struct MockListSource<T> {
    response: Arc<Mutex<Vec<T>>>,
    failure: Arc<Mutex<Option<Error>>>,
    queries: Arc<Mutex<Vec<ListQuery>>>,
}

impl<T> MockListSource<T> {
    /// Creates a source that returns an empty list.
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets the entities returned by every call.
    #[must_use]
    pub fn respond_with(self, items: Vec<T>) -> Self {
        *self.response.lock() = items;
        self
    }

    /// Makes the next call fail with `error`.
    #[must_use]
    pub fn fail_with(self, error: Error) -> Self {
        *self.failure.lock() = Some(error);
        self
    }

    /// Returns the queries received so far, oldest first.
    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().clone()
    }
}

impl<T> Default for MockListSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListSource<T> for MockListSource<T>
where
    T: Clone + Send + Sync,
{
    fn list<'a>(&'a self, query: &'a ListQuery) -> BoxFuture<'a, Result<Vec<T>>> {
        self.queries.lock().push(query.clone());
        let result = match self.failure.lock().take() {
            Some(error) => Err(error),
            None => Ok(self.response.lock().clone()),
        };
        Box::pin(async move { result })
    }

    fn label(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[tokio::test]
    async fn test_records_queries() {
        let source = MockListSource::new().respond_with(vec![1, 2, 3]);
        let query = ListQuery::new().marker("m").limit(4);

        let items = source.list(&query).await.unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(source.queries(), vec![query]);
    }

    #[tokio::test]
    async fn test_failure_is_one_shot() {
        let source: MockListSource<u8> =
            MockListSource::new().fail_with(Error::unavailable("down"));

        let err = source.list(&ListQuery::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unavailable);

        assert!(source.list(&ListQuery::new()).await.unwrap().is_empty());
        assert_eq!(source.queries().len(), 2);
    }
}
