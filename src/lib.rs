//! Block.io wallet API test harness
//!
//! Typed client and response mapping for the Block.io HTTP API, plus the
//! local stub responder and bookkeeping helpers the integration scenarios
//! are built on.

pub mod api;
pub mod bookkeeping;
pub mod config;
