//! Configuration types for the Smaug client.
//!
//! - [`ServiceConfig`]: Endpoint and identity URL, with the catalog fallback
//! - [`PaginationConfig`]: Default and maximum page sizes
//! - [`TlsConfig`]: TLS settings

mod pagination;
mod service;
mod tls;

pub use pagination::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE, PageSizePolicy, PaginationConfig};
pub use service::{DEFAULT_ENDPOINT, SERVICE_TYPE, ServiceConfig};
pub use tls::TlsConfig;
