//! Canned responses for the transaction endpoints
//!
//! Installs a fixed-response handler on a local [`mockito`] server so the
//! send flow never reaches, or mutates, the real ledger.

use mockito::{Matcher, Mock, Server};

/// Path pattern answered by the prepare-transaction stub
pub const PREPARE_TRANSACTION_PATTERN: &str = r"^/api/v2/prepare_transaction/.*";

/// Body returned by the prepare-transaction stub
pub const PREPARE_TRANSACTION_OK_BODY: &str = r#"{"result": "success"}"#;

/// Install a fixed GET response for one path pattern
///
/// The handler matches the pattern with any query string and leaves every
/// other endpoint on the server untouched.
pub fn install(server: &mut Server, path_pattern: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", Matcher::Regex(path_pattern.to_string()))
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("Content-Type", "application/json")
        .with_body(body)
        .create()
}

/// Install the well-known success stub for `prepare_transaction/`
pub fn install_prepare_transaction_ok(server: &mut Server) -> Mock {
    log::debug!(
        "Creates a stub with path \"{}\"",
        PREPARE_TRANSACTION_PATTERN
    );
    install(
        server,
        PREPARE_TRANSACTION_PATTERN,
        200,
        PREPARE_TRANSACTION_OK_BODY,
    )
}
