//! Error kind enumeration for categorizing client errors.

/// Categorization of client errors.
///
/// This enum provides a stable interface for matching on error types, enabling
/// different handling strategies for different failure modes. The client never
/// retries on its own; [`is_transient`](ErrorKind::is_transient) only tells the
/// caller whether trying again later could succeed.
///
/// | ErrorKind         | Transient | Typical cause                    |
/// |-------------------|-----------|----------------------------------|
/// | `Unavailable`     | Yes       | Service restarting or overloaded |
/// | `Timeout`         | Yes       | Slow backend                     |
/// | `RateLimited`     | Yes       | Too many requests                |
/// | `Connection`      | Yes       | Network unreachable              |
/// | `Unauthorized`    | No        | Expired or invalid token         |
/// | `Forbidden`       | No        | Project lacks the role           |
/// | `NotFound`        | No        | Plan, checkpoint, ... is gone    |
/// | `Conflict`        | No        | Resource in a conflicting state  |
/// | `InvalidArgument` | No        | Bad filter, marker or body       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failed (invalid or expired token).
    ///
    /// HTTP: 401 Unauthorized
    #[error("unauthorized")]
    Unauthorized,

    /// The token is valid but the project may not perform the operation.
    ///
    /// HTTP: 403 Forbidden
    #[error("forbidden")]
    Forbidden,

    /// Requested resource was not found.
    ///
    /// HTTP: 404 Not Found. Also returned by the service for an unknown marker.
    #[error("not found")]
    NotFound,

    /// Invalid request argument or payload.
    ///
    /// HTTP: 400 Bad Request
    #[error("invalid argument")]
    InvalidArgument,

    /// Conflict with existing resource state.
    ///
    /// HTTP: 409 Conflict
    #[error("conflict")]
    Conflict,

    /// Rate limit exceeded.
    ///
    /// HTTP: 429 Too Many Requests
    #[error("rate limited")]
    RateLimited,

    /// Service temporarily unavailable.
    ///
    /// HTTP: 503 Service Unavailable
    #[error("service unavailable")]
    Unavailable,

    /// Request timed out.
    ///
    /// HTTP: 504 Gateway Timeout or client-side timeout
    #[error("timeout")]
    Timeout,

    /// Internal server error.
    ///
    /// HTTP: 500 Internal Server Error
    #[error("internal error")]
    Internal,

    /// Connection error (DNS, TLS handshake, network unreachable).
    #[error("connection error")]
    Connection,

    /// Configuration error (invalid URL, missing credentials).
    #[error("configuration error")]
    Configuration,

    /// Transport layer error that fits no more specific category.
    #[error("transport error")]
    Transport,

    /// Response could not be parsed or was malformed.
    #[error("invalid response")]
    InvalidResponse,

    /// Unknown or unexpected error.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Returns `true` if the same request may succeed when issued again later.
    #[inline]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ErrorKind::Unavailable
                | ErrorKind::Timeout
                | ErrorKind::RateLimited
                | ErrorKind::Connection
        )
    }

    /// Creates an `ErrorKind` from an HTTP status code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::InvalidArgument,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            429 => ErrorKind::RateLimited,
            500 => ErrorKind::Internal,
            502 => ErrorKind::Transport,
            503 => ErrorKind::Unavailable,
            504 => ErrorKind::Timeout,
            _ if (400..500).contains(&status) => ErrorKind::InvalidArgument,
            _ if status >= 500 => ErrorKind::Internal,
            _ => ErrorKind::Unknown,
        }
    }
}
