//! Block.io API layer
//!
//! Typed client, response mapping and the local stub responder

pub mod client;
pub mod mapper;
pub mod models;
pub mod stub;

pub use client::{BlockIoClient, ClientError};
pub use mapper::{parse, ParseError};
pub use models::{
    Amount, EnvelopeData, ResponseEnvelope, Transaction, TransactionListEnvelope, TransactionType,
    Wallet, WalletListEnvelope,
};
pub use stub::{install, install_prepare_transaction_ok};
