//! One normalized page of list results.

use serde::{Deserialize, Serialize};

use super::field::Identified;

/// A page of entities plus navigation flags.
///
/// After normalization `items.len()` never exceeds the requested page size.
/// The two flags are independent: both set on a middle page, both clear when
/// the whole result fits on one page, exactly one set on the first or last
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedList<T> {
    /// The entities in display order.
    pub items: Vec<T>,
    /// Whether a page exists after this one.
    pub has_more_data: bool,
    /// Whether a page exists before this one.
    pub has_prev_data: bool,
}

impl<T> PagedList<T> {
    /// Wraps an unpaginated result; both flags are clear.
    pub fn unpaginated(items: Vec<T>) -> Self {
        Self {
            items,
            has_more_data: false,
            has_prev_data: false,
        }
    }

    /// Returns `true` if this page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Splits the page into `(items, has_more_data, has_prev_data)`.
    pub fn into_parts(self) -> (Vec<T>, bool, bool) {
        (self.items, self.has_more_data, self.has_prev_data)
    }

    /// Maps the items, keeping the flags.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            has_more_data: self.has_more_data,
            has_prev_data: self.has_prev_data,
        }
    }
}

impl<T: Identified> PagedList<T> {
    /// Marker for the "next page" link: the id of the last item.
    ///
    /// `None` when there is no further page.
    pub fn next_marker(&self) -> Option<&str> {
        if !self.has_more_data {
            return None;
        }
        self.items.last().map(Identified::id)
    }

    /// Marker for the "previous page" link: the id of the first item.
    ///
    /// `None` when there is no earlier page.
    pub fn prev_marker(&self) -> Option<&str> {
        if !self.has_prev_data {
            return None;
        }
        self.items.first().map(Identified::id)
    }
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self::unpaginated(Vec::new())
    }
}
