//! JSON response mapping
//!
//! Converts raw response bodies into typed models. A failed conversion
//! keeps the offending body so test output shows exactly what came back.

use serde::de::DeserializeOwned;

/// Error raised when a response body cannot be mapped to the target type
#[derive(Debug, thiserror::Error)]
#[error("could not parse json={raw}")]
pub struct ParseError {
    /// Raw body that failed to parse
    pub raw: String,

    /// Underlying deserialization error
    #[source]
    pub source: serde_json::Error,
}

impl ParseError {
    /// The raw body the server returned
    pub fn raw_body(&self) -> &str {
        &self.raw
    }
}

/// Map a raw JSON body into `T`
///
/// Unknown fields in the input are tolerated; structurally invalid JSON or
/// a required field that cannot be coerced fails with [`ParseError`].
pub fn parse<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    serde_json::from_str(raw).map_err(|source| ParseError {
        raw: raw.to_string(),
        source,
    })
}
