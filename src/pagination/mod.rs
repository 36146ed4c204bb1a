//! Cursor pagination for console list views.
//!
//! The service pages with a marker (the id of a boundary entity) and a
//! limit. To learn whether another page exists, the fetcher asks for one
//! entity more than it shows and drops that sentinel. "Previous page" is
//! served by fetching from the first visible entity in the opposite
//! direction and re-sorting the result.
//!
//! - [`fetch_page`]: run one list call, paginated or not
//! - [`normalize`]: decide `has_more_data` / `has_prev_data` and restore order
//! - [`PagedList`]: the resulting page
//! - [`ListSource`]: the remote list call the fetcher drives
//!
//! ## Example
//!
//! ```rust,ignore
//! use smaug::pagination::{fetch_page, ListQuery, PageOptions, SortOrder};
//!
//! let query = ListQuery::new().marker(marker).sort_key("name").sort_dir(SortOrder::Ascending);
//! let page = fetch_page(&client.plans(), query, PageOptions::paginated(), &config).await?;
//! if page.has_more_data {
//!     println!("next: ?marker={}", page.next_marker().unwrap_or_default());
//! }
//! ```

mod fetch;
mod field;
mod normalize;
mod order;
mod page;
mod query;

pub use fetch::{ListSource, fetch_page};
pub use field::{Identified, SortField};
pub use normalize::{normalize, normalize_by};
pub use order::{SortOrder, flip_direction};
pub use page::PagedList;
pub use query::{ListQuery, PageOptions};
