//! User-Agent header value sent with every request.

use std::sync::OnceLock;

/// Client name used in the User-Agent string.
const SDK_NAME: &str = "smaug-rust";

/// Client version from Cargo.toml.
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the User-Agent string.
///
/// Format: `smaug-rust/0.1.0 (rust/1.92; linux/x86_64)`
///
/// Computed once and cached.
pub(crate) fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "{}/{} ({}; {}/{})",
            SDK_NAME,
            SDK_VERSION,
            rust_version(),
            os_name(),
            std::env::consts::ARCH,
        )
    })
}

fn rust_version() -> &'static str {
    concat!("rust/", env!("CARGO_PKG_RUST_VERSION"))
}

fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        os => os,
    }
}
