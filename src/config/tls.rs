//! TLS configuration for connections to the Smaug endpoint.

/// Configuration for TLS connections.
///
/// By default the client validates server certificates against the system
/// roots.
///
/// ## Example
///
/// ```rust
/// use smaug::TlsConfig;
///
/// let config = TlsConfig::builder().skip_verification(true).build();
/// assert!(config.skip_verification);
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct TlsConfig {
    /// Whether to skip certificate verification.
    ///
    /// **WARNING**: This is insecure and should only be used for local development
    /// with self-signed certificates.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Creates an insecure TLS config that skips verification.
    ///
    /// **WARNING**: This makes connections vulnerable to man-in-the-middle attacks.
    pub fn insecure() -> Self {
        Self::builder().skip_verification(true).build()
    }
}
