//! Authentication for the Smaug client.
//!
//! The console never acquires tokens itself: it forwards the logged-in
//! user's scoped identity token, username and project ID as
//! [`TokenCredentials`].
//!
//! ```rust,ignore
//! use smaug::{Client, TokenCredentials};
//!
//! let client = Client::builder()
//!     .url("https://backup.example.com/v1/proj_1")
//!     .credentials(
//!         TokenCredentials::new(session.token())
//!             .with_username(session.username())
//!             .with_project_id(session.project_id()),
//!     )
//!     .build()
//!     .await?;
//! ```

mod credentials;

pub use credentials::{AUTH_TOKEN_HEADER, PROJECT_ID_HEADER, TokenCredentials};
