//! Feeding a console table from one paged fetch.

use std::borrow::Cow;

use tracing::warn;

use super::cursor::{Cursor, PaginationParams};
use crate::config::PageSizePolicy;
use crate::error::Error;
use crate::pagination::{
    Identified, ListQuery, ListSource, PageOptions, PagedList, SortField, SortOrder, fetch_page,
};

/// What a table shows after a load.
///
/// A failed load keeps the error for the caller and carries the notice to
/// display; the table then renders empty with no navigation links.
#[derive(Debug)]
pub enum TableData<T> {
    /// The page was fetched.
    Loaded(PagedList<T>),
    /// The fetch failed.
    Failed {
        /// User-facing message.
        notice: Cow<'static, str>,
        /// The underlying error.
        error: Error,
    },
}

impl<T> TableData<T> {
    /// Rows to display; empty after a failure.
    pub fn items(&self) -> &[T] {
        match self {
            TableData::Loaded(page) => &page.items,
            TableData::Failed { .. } => &[],
        }
    }

    /// Whether to render a "next page" link.
    pub fn has_more_data(&self) -> bool {
        matches!(self, TableData::Loaded(page) if page.has_more_data)
    }

    /// Whether to render a "previous page" link.
    pub fn has_prev_data(&self) -> bool {
        matches!(self, TableData::Loaded(page) if page.has_prev_data)
    }

    /// The notice to display, if the load failed.
    pub fn notice(&self) -> Option<&str> {
        match self {
            TableData::Loaded(_) => None,
            TableData::Failed { notice, .. } => Some(notice),
        }
    }

    /// The error, if the load failed.
    pub fn error(&self) -> Option<&Error> {
        match self {
            TableData::Loaded(_) => None,
            TableData::Failed { error, .. } => Some(error),
        }
    }

    /// Returns `true` if the load failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, TableData::Failed { .. })
    }

    /// Converts into a page; a failed load becomes an empty page.
    pub fn into_page(self) -> PagedList<T> {
        match self {
            TableData::Loaded(page) => page,
            TableData::Failed { .. } => PagedList::default(),
        }
    }
}

/// A paginated table of one resource collection.
///
/// Lists are always sorted by `name`, ascending, unless reconfigured.
///
/// ## Example
///
/// ```rust,ignore
/// let view = ListView::new("Unable to retrieve triggers list.");
/// let data = view
///     .load(client.triggers().collection(), request.query_string(), client.pagination_config())
///     .await;
///
/// if let Some(notice) = data.notice() {
///     messages.error(notice);
/// }
/// render(data.items(), view.next_link(&data), view.prev_link(&data));
/// ```
#[derive(Debug, Clone)]
pub struct ListView {
    params: PaginationParams,
    sort_key: String,
    sort_dir: SortOrder,
    failure_notice: Cow<'static, str>,
}

impl ListView {
    /// Creates a view sorted by name, ascending, showing `failure_notice`
    /// when a load fails.
    pub fn new(failure_notice: impl Into<Cow<'static, str>>) -> Self {
        Self {
            params: PaginationParams::default(),
            sort_key: "name".to_string(),
            sort_dir: SortOrder::Ascending,
            failure_notice: failure_notice.into(),
        }
    }

    /// Uses custom cursor parameter names.
    #[must_use]
    pub fn with_params(mut self, params: PaginationParams) -> Self {
        self.params = params;
        self
    }

    /// Changes the display sort.
    #[must_use]
    pub fn with_sort(mut self, sort_key: impl Into<String>, sort_dir: SortOrder) -> Self {
        self.sort_key = sort_key.into();
        self.sort_dir = sort_dir;
        self
    }

    /// Returns the cursor parameter names.
    pub fn params(&self) -> &PaginationParams {
        &self.params
    }

    /// Returns the failure notice.
    pub fn failure_notice(&self) -> &str {
        &self.failure_notice
    }

    /// Loads the page addressed by `query`, the request's query string.
    pub async fn load<T, S>(
        &self,
        source: &S,
        query: &str,
        policy: &dyn PageSizePolicy,
    ) -> TableData<T>
    where
        T: SortField,
        S: ListSource<T> + ?Sized,
    {
        let cursor = Cursor::from_query(&self.params, query);
        self.load_cursor(source, cursor, policy).await
    }

    /// Loads the page starting at `cursor`.
    pub async fn load_cursor<T, S>(
        &self,
        source: &S,
        cursor: Cursor,
        policy: &dyn PageSizePolicy,
    ) -> TableData<T>
    where
        T: SortField,
        S: ListSource<T> + ?Sized,
    {
        let mut query = ListQuery::new()
            .sort_key(self.sort_key.as_str())
            .sort_dir(self.sort_dir);
        query.marker = cursor.marker;
        let options = PageOptions::paginated().reversed(cursor.reversed_order);

        match fetch_page(source, query, options, policy).await {
            Ok(page) => TableData::Loaded(page),
            Err(error) => {
                warn!(
                    source = source.label(),
                    error = %error,
                    reversed = cursor.reversed_order,
                    "{}",
                    self.failure_notice
                );
                TableData::Failed {
                    notice: self.failure_notice.clone(),
                    error,
                }
            }
        }
    }

    /// Query string for the "next page" link, if there is one.
    pub fn next_link<T: Identified>(&self, data: &TableData<T>) -> Option<String> {
        match data {
            TableData::Loaded(page) => page
                .next_marker()
                .map(|marker| format!("{}={}", self.params.next, urlencoding::encode(marker))),
            TableData::Failed { .. } => None,
        }
    }

    /// Query string for the "previous page" link, if there is one.
    pub fn prev_link<T: Identified>(&self, data: &TableData<T>) -> Option<String> {
        match data {
            TableData::Loaded(page) => page
                .prev_marker()
                .map(|marker| format!("{}={}", self.params.prev, urlencoding::encode(marker))),
            TableData::Failed { .. } => None,
        }
    }
}
