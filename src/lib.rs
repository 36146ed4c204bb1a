//! # Smaug Rust client
//!
//! Client for the Smaug data-protection service (protection plans,
//! checkpoints, restores, triggers, scheduled operations) with the cursor
//! pagination used by console list views.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use smaug::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> smaug::Result<()> {
//!     // One client per inbound request, built from that request's session
//!     let client = Client::builder()
//!         .service_config(ServiceConfig::builder().endpoint(catalog_endpoint).build())
//!         .credentials(TokenCredentials::new(token).with_project_id(project_id))
//!         .build()
//!         .await?;
//!
//!     // First page of triggers, by name
//!     let page = client
//!         .triggers()
//!         .list_paged()
//!         .sort_key("name")
//!         .sort_dir(SortOrder::Ascending)
//!         .await?;
//!
//!     for trigger in &page.items {
//!         println!("{}", trigger.name.as_deref().unwrap_or(&trigger.id));
//!     }
//!     if page.has_more_data {
//!         println!("next: ?marker={}", page.next_marker().unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Over-fetch**: a paginated list asks for `page_size + 1` entities; the
//!   extra one only signals that a next page exists
//! - **Previous page**: fetched from the first visible entity in the opposite
//!   direction, then re-sorted into display order
//! - **Flags**: `has_more_data` and `has_prev_data` are independent
//! - **No hidden state**: the client is passed explicitly, nothing is cached
//!   across requests and nothing is retried
//!
//! ## Features
//!
//! - `rest` (default): HTTP transport via reqwest
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod resources;

// Console glue
pub mod view;

// Testing utilities
pub mod testing;

#[cfg(feature = "rest")]
mod user_agent;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind, Result};

// Re-export auth types
pub use auth::TokenCredentials;

// Re-export config types
pub use config::{PaginationConfig, ServiceConfig, TlsConfig};

// Re-export pagination types
pub use pagination::{PagedList, SortOrder};
