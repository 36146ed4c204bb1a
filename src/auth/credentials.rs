//! Token credentials taken from the console user's session.

use std::fmt;

use zeroize::Zeroizing;

/// Header carrying the identity token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Header carrying the scoped project ID.
pub const PROJECT_ID_HEADER: &str = "X-Project-Id";

/// Identity token credentials for the Smaug service.
///
/// The console builds one of these per inbound request from the logged-in
/// user's scoped token and passes it to [`Client::builder()`](crate::Client::builder).
/// The token is wiped from memory when the credentials are dropped.
///
/// ## Example
///
/// ```rust
/// use smaug::TokenCredentials;
///
/// let creds = TokenCredentials::new("gAAAAABh...")
///     .with_username("admin")
///     .with_project_id("proj_1");
///
/// assert_eq!(creds.project_id(), Some("proj_1"));
/// assert!(!format!("{:?}", creds).contains("gAAAAABh"));
/// ```
#[derive(Clone)]
pub struct TokenCredentials {
    token: Zeroizing<String>,
    username: Option<String>,
    project_id: Option<String>,
}

impl TokenCredentials {
    /// Creates credentials from a scoped identity token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Zeroizing::new(token.into()),
            username: None,
            project_id: None,
        }
    }

    /// Sets the name of the user the token belongs to.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the project (tenant) the token is scoped to.
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Returns the token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the username, if set.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the project ID, if set.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}

impl fmt::Debug for TokenCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCredentials")
            .field("token", &"[REDACTED]")
            .field("username", &self.username)
            .field("project_id", &self.project_id)
            .finish()
    }
}

impl<S: Into<String>> From<S> for TokenCredentials {
    fn from(token: S) -> Self {
        Self::new(token)
    }
}
