//! Testing utilities for code that pages through Smaug collections.
//!
//! - [`InMemoryListSource`]: stores entities and honours marker, limit, sort
//!   and filters the way the service does
//! - [`MockListSource`]: returns canned results or errors and records every
//!   query it receives
//!
//! Both implement [`ListSource`](crate::pagination::ListSource), so they can
//! stand in for a sub-client wherever a fetch is driven.
//!
//! ## InMemoryListSource vs MockListSource
//!
//! | Feature | MockListSource | InMemoryListSource |
//! |---------|----------------|--------------------|
//! | Query recording | ✓ | ✗ |
//! | Error injection | ✓ | ✗ |
//! | Marker/limit/sort semantics | ✗ | ✓ |
//! | Best for | Checking what was sent | Navigation round trips |

mod in_memory;
mod mock_source;

pub use in_memory::InMemoryListSource;
pub use mock_source::MockListSource;
