//! InMemoryListSource with service-like marker semantics.

use std::cmp::Ordering;
use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::RwLock;

use crate::Error;
use crate::error::Result;
use crate::pagination::{Identified, ListQuery, ListSource, SortField, SortOrder};

/// An in-memory collection that pages the way the service does.
///
/// A query is answered by filtering on `search_opts` (exact match on the
/// named field), sorting by `sort_key` in `sort_dir` (ascending when absent,
/// ties broken by id), skipping up to and including the `marker` entity,
/// and truncating to `limit`. An unknown marker is a `NotFound` error, as
/// on the service.
///
/// ## Example
///
/// ```rust
/// use serde_json::json;
/// use smaug::testing::InMemoryListSource;
///
/// let source = InMemoryListSource::new();
/// source.insert(json!({"id": "pln_1", "name": "nightly"}));
/// assert_eq!(source.len(), 1);
/// ```
#[derive(Clone)]
pub struct InMemoryListSource<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> InMemoryListSource<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a collection holding `items`.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Adds an entity.
    pub fn insert(&self, item: T) {
        self.items.write().push(item);
    }

    /// Returns the number of stored entities.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl<T> Default for InMemoryListSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryListSource<T>
where
    T: SortField + Identified + Clone,
{
    fn query(&self, query: &ListQuery) -> Result<Vec<T>> {
        let mut matched: Vec<T> = self
            .items
            .read()
            .iter()
            .filter(|item| {
                query
                    .search_opts
                    .iter()
                    .all(|(key, value)| item.sort_value(key) == Some(value.as_str()))
            })
            .cloned()
            .collect();

        let sort_key = query.sort_key.as_deref().unwrap_or("id");
        let descending = query.sort_dir == Some(SortOrder::Descending);
        matched.sort_by(|a, b| {
            let ordering = compare(a, b, sort_key);
            if descending { ordering.reverse() } else { ordering }
        });

        let start = match query.marker.as_deref() {
            Some(marker) => {
                let position = matched
                    .iter()
                    .position(|item| item.id() == marker)
                    .ok_or_else(|| Error::not_found(format!("marker {} could not be found", marker)))?;
                position + 1
            }
            None => 0,
        };

        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(matched.into_iter().skip(start).take(limit).collect())
    }
}

fn compare<T: SortField + Identified>(a: &T, b: &T, sort_key: &str) -> Ordering {
    let key_a = a.sort_value(sort_key).unwrap_or_default().to_lowercase();
    let key_b = b.sort_value(sort_key).unwrap_or_default().to_lowercase();
    key_a.cmp(&key_b).then_with(|| a.id().cmp(b.id()))
}

impl<T> ListSource<T> for InMemoryListSource<T>
where
    T: SortField + Identified + Clone + Send + Sync,
{
    fn list<'a>(&'a self, query: &'a ListQuery) -> BoxFuture<'a, Result<Vec<T>>> {
        let result = self.query(query);
        Box::pin(async move { result })
    }

    fn label(&self) -> &str {
        "in-memory"
    }
}
