//! Error types for the Smaug client.
//!
//! Every fallible operation returns [`Result`], whose error is an [`Error`]
//! carrying an [`ErrorKind`] for matching. Failures of the remote service are
//! never swallowed by the client; the console layer decides how to present
//! them (see [`crate::view::TableData`]).

#[allow(clippy::module_inception)]
mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for Smaug client operations.
pub type Result<T> = std::result::Result<T, Error>;
