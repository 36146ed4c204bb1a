//! Page-size policy for paginated list views.

/// Default number of rows per page, matching the console's stock setting.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound applied to caller-supplied page sizes.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 1000;

/// Supplies the page length used when a paginated fetch does not name one.
///
/// The paged fetcher treats the policy as opaque; it only requires a positive
/// integer. Implement this for a per-user preference store, or use
/// [`PaginationConfig`] for a fixed value.
pub trait PageSizePolicy: Send + Sync {
    /// Returns the page size to request. Must be at least 1.
    fn page_size(&self) -> usize;
}

impl PageSizePolicy for usize {
    fn page_size(&self) -> usize {
        (*self).max(1)
    }
}

/// Pagination configuration.
///
/// ## Example
///
/// ```rust
/// use smaug::config::{PageSizePolicy, PaginationConfig};
///
/// let config = PaginationConfig::builder().page_size(50).build();
/// assert_eq!(config.page_size(), 50);
/// assert_eq!(config.clamp(5_000), 1000);
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct PaginationConfig {
    /// Rows per page when the request does not override it.
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Largest page size a request may ask for.
    #[builder(default = DEFAULT_MAX_PAGE_SIZE)]
    pub max_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PaginationConfig {
    /// Creates a configuration with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Clamps a requested page size into `1..=max_page_size`.
    pub fn clamp(&self, requested: usize) -> usize {
        requested.clamp(1, self.max_page_size.max(1))
    }
}

impl PageSizePolicy for PaginationConfig {
    fn page_size(&self) -> usize {
        self.clamp(self.page_size)
    }
}
