//! Pagination cursors carried in a page's query string.

use std::borrow::Cow;

/// Default query parameter holding the "next page" marker.
pub const DEFAULT_NEXT_PARAM: &str = "marker";

/// Default query parameter holding the "previous page" marker.
pub const DEFAULT_PREV_PARAM: &str = "prev_marker";

/// Names of the query parameters that carry pagination cursors.
///
/// ## Example
///
/// ```rust
/// use smaug::view::PaginationParams;
///
/// let params = PaginationParams::builder().next("trigger_marker").build();
/// assert_eq!(params.next, "trigger_marker");
/// assert_eq!(params.prev, "prev_marker");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct PaginationParams {
    /// Parameter for "next page" links.
    #[builder(into, default = DEFAULT_NEXT_PARAM.to_string())]
    pub next: String,

    /// Parameter for "previous page" links.
    #[builder(into, default = DEFAULT_PREV_PARAM.to_string())]
    pub prev: String,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Where to start fetching, as read from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Boundary entity of the fetch, `None` for the first page.
    pub marker: Option<String>,
    /// The fetch serves a "previous page" link.
    pub reversed_order: bool,
}

impl Cursor {
    /// Reads the cursor from decoded query pairs.
    ///
    /// A present "previous" parameter wins over the "next" one, even when
    /// empty, and selects a reversed fetch. A repeated parameter takes its
    /// last value.
    pub fn from_pairs<I, K, V>(params: &PaginationParams, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut next = None;
        let mut prev = None;
        for (key, value) in pairs {
            let key = key.as_ref();
            if key == params.prev {
                prev = Some(value.into());
            } else if key == params.next {
                next = Some(value.into());
            }
        }

        match prev {
            Some(marker) => Self {
                marker: Some(marker),
                reversed_order: true,
            },
            None => Self {
                marker: next,
                reversed_order: false,
            },
        }
    }

    /// Reads the cursor from a raw query string such as `marker=abc&tab=1`.
    ///
    /// A leading `?` is ignored and keys and values are percent-decoded;
    /// pairs that do not decode are skipped.
    pub fn from_query(params: &PaginationParams, query: &str) -> Self {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                Some((decode(key)?, decode(value)?))
            });
        Self::from_pairs(params, pairs)
    }
}

fn decode(component: &str) -> Option<String> {
    let plus_as_space: Cow<'_, str> = if component.contains('+') {
        Cow::Owned(component.replace('+', " "))
    } else {
        Cow::Borrowed(component)
    };
    urlencoding::decode(&plus_as_space).ok().map(Cow::into_owned)
}
