//! Console list views.
//!
//! A list page reads its cursor from the query string, fetches one page with
//! a fixed sort and hands the rows and navigation flags to the table widget.
//! A failed fetch never escapes as an error: it becomes
//! [`TableData::Failed`] with a notice for the user, an empty table and no
//! navigation links.
//!
//! - [`PaginationParams`]: names of the "next" and "previous" parameters
//! - [`Cursor`]: marker and direction read from a query string
//! - [`ListView`]: loads a [`TableData`] from any
//!   [`ListSource`](crate::pagination::ListSource)

mod cursor;
mod table;

pub use cursor::{Cursor, DEFAULT_NEXT_PARAM, DEFAULT_PREV_PARAM, PaginationParams};
pub use table::{ListView, TableData};
