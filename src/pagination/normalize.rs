//! Boundary detection and order restoration for over-fetched pages.

use std::cmp::Reverse;

use super::field::{SortField, sort_key_of};
use super::order::SortOrder;
use super::page::PagedList;

/// Normalizes a page fetched with `limit = page_size + 1`.
///
/// * `marker` is the cursor the fetch used, `None` on the first page.
/// * `sort_dir` is the *effective* direction of the fetch, i.e. already
///   flipped when `reversed_order` is set.
/// * `reversed_order` marks a fetch issued for "previous page" navigation.
///
/// Flags are decided by the first matching rule:
///
/// 1. more than `page_size` entities: drop the last one, `has_more_data`,
///    and `has_prev_data` too if a marker was used;
/// 2. reversed with a marker: this is the first page seen from the
///    original direction, so `has_more_data`;
/// 3. marker without reversal: last page, so `has_prev_data`;
/// 4. otherwise everything fit on one page and both flags stay clear.
///
/// A reversed page is then re-sorted by `sort_key` (case-insensitive,
/// missing values as `""`) back into the originally requested direction.
///
/// ## Example
///
/// ```rust
/// use serde_json::json;
/// use smaug::pagination::{normalize, SortOrder};
///
/// // "previous page" of an ascending list, fetched descending
/// let fetched = vec![json!({"name": "c"}), json!({"name": "b"}), json!({"name": "a"})];
/// let page = normalize(fetched, 3, Some("d"), Some(SortOrder::Descending), "name", true);
///
/// let names: Vec<_> = page.items.iter().map(|e| e["name"].as_str().unwrap()).collect();
/// assert_eq!(names, ["a", "b", "c"]);
/// assert!(page.has_more_data);
/// assert!(!page.has_prev_data);
/// ```
pub fn normalize<T: SortField>(
    entities: Vec<T>,
    page_size: usize,
    marker: Option<&str>,
    sort_dir: Option<SortOrder>,
    sort_key: &str,
    reversed_order: bool,
) -> PagedList<T> {
    normalize_by(entities, page_size, marker, sort_dir, reversed_order, |entity| {
        entity.sort_value(sort_key)
    })
}

/// Same as [`normalize`], with the sort field given as an accessor.
pub fn normalize_by<T, F>(
    mut entities: Vec<T>,
    page_size: usize,
    marker: Option<&str>,
    sort_dir: Option<SortOrder>,
    reversed_order: bool,
    field: F,
) -> PagedList<T>
where
    F: for<'a> Fn(&'a T) -> Option<&'a str>,
{
    let mut has_more_data = false;
    let mut has_prev_data = false;

    if entities.len() > page_size {
        has_more_data = true;
        entities.pop();
        if marker.is_some() {
            has_prev_data = true;
        }
    } else if reversed_order && marker.is_some() {
        // first page, reached by navigating back
        has_more_data = true;
    } else if marker.is_some() {
        // last page
        has_prev_data = true;
    }

    if reversed_order {
        // The fetch ran against the requested direction; undo that.
        if sort_dir == Some(SortOrder::Ascending) {
            entities.sort_by_cached_key(|entity| Reverse(sort_key_of(field(entity))));
        } else {
            entities.sort_by_cached_key(|entity| sort_key_of(field(entity)));
        }
    }

    PagedList {
        items: entities,
        has_more_data,
        has_prev_data,
    }
}
