//! Domain models for the Block.io API
//!
//! Field names follow the wire format one to one, so the serde derives map
//! without rename attributes. All balance and amount fields stay decimal
//! strings on the wire; helpers expose them as exact [`Decimal`] values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single wallet ("address") belonging to an account
///
/// Read-only from the server's point of view. Only the local bookkeeping
/// helper mutates `available_balance`, and only in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Numeric id of the owning user
    pub user_id: i64,

    /// Wallet address, unique within an account
    pub address: String,

    /// Human-readable label
    pub label: String,

    /// Balance still awaiting confirmations, as a decimal string
    pub pending_received_balance: String,

    /// Spendable balance, as a decimal string
    pub available_balance: String,

    /// Whether the address is segregated witness
    pub is_segwit: bool,
}

impl Wallet {
    /// Spendable balance as an exact decimal
    pub fn available_balance_as_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        self.available_balance.parse()
    }
}

/// One sender or receiver leg of a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub address: String,
    pub amount: String,
}

impl Amount {
    /// Leg amount as an exact decimal
    pub fn amount_as_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        self.amount.parse()
    }
}

/// A transaction as reported by the transactions endpoint
///
/// `amounts_sent`, `senders` and `amounts_received` default to empty when
/// the field is missing from the response, never to a null marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id
    pub txid: String,

    /// Whether the transaction originated from this account's wallet
    pub from_green_address: bool,

    /// Unix timestamp (seconds)
    pub time: i64,

    /// Confirmation count at response time
    pub confirmations: u32,

    /// Total amount sent, as a decimal string
    pub total_amount_sent: String,

    /// Sending legs
    #[serde(default)]
    pub amounts_sent: Vec<Amount>,

    /// Sender addresses
    #[serde(default)]
    pub senders: Vec<String>,

    /// Confidence score in [0, 1]
    pub confidence: f64,

    /// Node propagation metadata; schema is not contractually defined,
    /// so it is kept as a raw JSON value
    #[serde(default)]
    pub propagated_by_nodes: Value,

    /// Receiving legs
    #[serde(default)]
    pub amounts_received: Vec<Amount>,
}

impl Transaction {
    /// Independent deep copy with a replaced transaction id
    ///
    /// The copy shares no state with the original; mutating it never
    /// touches the source transaction.
    pub fn with_txid(&self, txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            ..self.clone()
        }
    }
}

/// Direction filter accepted by the transactions endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sent,
    Received,
}

impl TransactionType {
    /// Literal value the API expects in the `type` query parameter
    pub fn wire_value(&self) -> &'static str {
        match self {
            TransactionType::Sent => "sent",
            TransactionType::Received => "received",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_value())
    }
}

/// Generic envelope every list endpoint responds with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// Envelope payload; absent on some error responses
    pub data: Option<EnvelopeData<T>>,
}

/// Inner payload of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeData<T> {
    /// Network the account lives on (e.g. "BTC")
    #[serde(default)]
    pub network: String,

    /// Listed entities; the wallet endpoints call this field `addresses`,
    /// the transactions endpoint calls it `txs`
    #[serde(
        rename = "addresses",
        alias = "txs",
        skip_serializing_if = "Option::is_none"
    )]
    pub payload: Option<T>,

    /// Page number (wallet endpoints only)
    #[serde(default)]
    pub page: u32,

    /// Whether further pages exist (wallet endpoints only)
    #[serde(default)]
    pub has_more: bool,
}

/// Envelope carrying a page of wallets
pub type WalletListEnvelope = ResponseEnvelope<Vec<Wallet>>;

/// Envelope carrying a list of transactions
pub type TransactionListEnvelope = ResponseEnvelope<Vec<Transaction>>;
