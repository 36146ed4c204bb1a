//! Paged list fetching over a remote list call.

use futures::future::BoxFuture;
use tracing::debug;

use super::field::SortField;
use super::normalize::normalize;
use super::order::flip_direction;
use super::page::PagedList;
use super::query::{ListQuery, PageOptions};
use crate::config::PageSizePolicy;
use crate::error::Result;

/// The narrow fetch interface of the remote service.
///
/// One implementation per resource collection. The client's sub-clients
/// implement it over HTTP; [`crate::testing`] provides in-memory ones.
///
/// ## Object Safety
///
/// This trait is object-safe, so `&dyn ListSource<Plan>` works for dynamic
/// dispatch.
pub trait ListSource<T>: Send + Sync {
    /// Lists entities matching `query`.
    fn list<'a>(&'a self, query: &'a ListQuery) -> BoxFuture<'a, Result<Vec<T>>>;

    /// Short label for log events, e.g. the collection path.
    fn label(&self) -> &str {
        "list"
    }
}

/// Fetches one page of a collection.
///
/// Without `options.paginate` this is a single pass-through call using the
/// query's own `limit`, and both flags are `false`.
///
/// With pagination the page size is `options.page_size` or the policy's;
/// for a reversed fetch the sort direction is flipped; the service is asked
/// for `page_size + 1` entities and the result goes through
/// [`normalize`] with the effective direction.
///
/// Errors from the source are returned unchanged; nothing is retried.
pub async fn fetch_page<T, S>(
    source: &S,
    mut query: ListQuery,
    options: PageOptions,
    policy: &dyn PageSizePolicy,
) -> Result<PagedList<T>>
where
    T: SortField,
    S: ListSource<T> + ?Sized,
{
    if !options.paginate {
        debug!(
            source = source.label(),
            marker = query.marker.as_deref(),
            limit = query.limit,
            "listing without pagination"
        );
        let items = source.list(&query).await?;
        return Ok(PagedList::unpaginated(items));
    }

    let page_size = options.page_size.unwrap_or_else(|| policy.page_size()).max(1);
    if options.reversed_order {
        query.sort_dir = flip_direction(query.sort_dir);
    }
    let limit = page_size.saturating_add(1);
    query.limit = Some(limit);

    debug!(
        source = source.label(),
        marker = query.marker.as_deref(),
        limit,
        sort_key = query.sort_key.as_deref(),
        sort_dir = query.sort_dir.map(|d| d.as_str()),
        reversed = options.reversed_order,
        "fetching page"
    );

    let raw = source.list(&query).await?;
    let fetched = raw.len();
    let page = normalize(
        raw,
        page_size,
        query.marker.as_deref(),
        query.sort_dir,
        query.sort_key.as_deref().unwrap_or_default(),
        options.reversed_order,
    );

    debug!(
        source = source.label(),
        fetched,
        returned = page.len(),
        has_more_data = page.has_more_data,
        has_prev_data = page.has_prev_data,
        "page normalized"
    );

    Ok(page)
}
