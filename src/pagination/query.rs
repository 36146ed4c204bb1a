//! Parameters of a remote list call and of a paged fetch.

use std::collections::BTreeMap;

use super::order::SortOrder;

/// Parameters of one `list` call against the service.
///
/// Mirrors the remote interface: filters, cursor, limit and sort. Every field
/// is optional; an empty query lists with the service defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Request the detailed representation.
    pub detailed: bool,
    /// Filters passed through as query parameters.
    pub search_opts: BTreeMap<String, String>,
    /// Cursor: the boundary entity of the previous fetch.
    pub marker: Option<String>,
    /// Maximum number of entities to return.
    pub limit: Option<usize>,
    /// Field to sort by.
    pub sort_key: Option<String>,
    /// Direction to sort in.
    pub sort_dir: Option<SortOrder>,
    /// Combined `key:dir[,key:dir...]` sort expression.
    pub sort: Option<String>,
}

impl ListQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the detailed representation.
    #[must_use]
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Adds a filter.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.search_opts.insert(key.into(), value.into());
        self
    }

    /// Sets the cursor.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Sets the maximum number of results.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the sort field.
    #[must_use]
    pub fn sort_key(mut self, sort_key: impl Into<String>) -> Self {
        self.sort_key = Some(sort_key.into());
        self
    }

    /// Sets the sort direction.
    #[must_use]
    pub fn sort_dir(mut self, sort_dir: SortOrder) -> Self {
        self.sort_dir = Some(sort_dir);
        self
    }

    /// Sets a combined sort expression.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Renders the query string, without the leading `?`.
    ///
    /// Filters come first in key order, then `marker`, `limit`, `sort_key`,
    /// `sort_dir` and `sort`. Keys and values are percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut query_parts = Vec::new();

        for (key, value) in &self.search_opts {
            query_parts.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        if let Some(marker) = &self.marker {
            query_parts.push(format!("marker={}", urlencoding::encode(marker)));
        }
        if let Some(limit) = self.limit {
            query_parts.push(format!("limit={}", limit));
        }
        if let Some(sort_key) = &self.sort_key {
            query_parts.push(format!("sort_key={}", urlencoding::encode(sort_key)));
        }
        if let Some(sort_dir) = &self.sort_dir {
            query_parts.push(format!("sort_dir={}", sort_dir.as_str()));
        }
        if let Some(sort) = &self.sort {
            query_parts.push(format!("sort={}", urlencoding::encode(sort)));
        }

        query_parts.join("&")
    }
}

/// How a list call should be paginated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Compute pagination flags; when `false` the query's `limit` is used as is.
    pub paginate: bool,
    /// The fetch serves a "previous page" navigation.
    pub reversed_order: bool,
    /// Page length; the page-size policy decides when absent.
    pub page_size: Option<usize>,
}

impl PageOptions {
    /// Options for a paginated forward fetch.
    pub fn paginated() -> Self {
        Self {
            paginate: true,
            ..Self::default()
        }
    }

    /// Marks the fetch as a "previous page" navigation.
    #[must_use]
    pub fn reversed(mut self, reversed_order: bool) -> Self {
        self.reversed_order = reversed_order;
        self
    }

    /// Sets an explicit page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
