//! Common test utilities for the Block.io harness integration tests
//!
//! Provides a mock-server environment with automatic teardown plus fixture
//! builders for the enveloped wallet and transaction responses.

use blockio_harness::api::client::BlockIoClient;
use blockio_harness::api::models::Transaction;
use blockio_harness::config::HarnessConfig;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

/// Length of the txid used when synthesizing a new transaction
pub const SYNTHETIC_TXID_LEN: usize = 46;

/// Test environment around one local mock server
///
/// The server starts on construction and stops when the environment drops,
/// regardless of test outcome.
pub struct TestEnv {
    pub server: ServerGuard,
    pub config: HarnessConfig,
    pub client: BlockIoClient,
}

impl TestEnv {
    /// Start a mock server and point a client at it
    pub fn new() -> Self {
        init_logging();

        let server = mockito::Server::new();
        let base_url = format!("{}/api/v2/", server.url());
        let config = HarnessConfig::with_base_url(&base_url);
        let client = BlockIoClient::from_config(&config).expect("Failed to build client");

        Self {
            server,
            config,
            client,
        }
    }

    /// Serve a wallet-list envelope from `get_my_addresses/`
    pub fn mock_wallet_list(&mut self, wallets: &[Value]) -> Mock {
        self.mock_list_endpoint("/api/v2/get_my_addresses/", wallet_list_body(wallets))
    }

    /// Serve a wallet-list envelope from `get_my_archived_addresses/`
    pub fn mock_archived_wallet_list(&mut self, wallets: &[Value]) -> Mock {
        self.mock_list_endpoint(
            "/api/v2/get_my_archived_addresses/",
            wallet_list_body(wallets),
        )
    }

    /// Serve a transaction-list envelope for one direction
    pub fn mock_transaction_list(&mut self, transaction_type: &str, txs: &[Value]) -> Mock {
        self.server
            .mock("GET", "/api/v2/get_transactions/")
            .match_query(Matcher::Regex(format!("type={}", transaction_type)))
            .with_status(200)
            .with_header("Content-Type", "application/json")
            .with_body(transaction_list_body(txs).to_string())
            .create()
    }

    /// Serve a raw body from an arbitrary path with a chosen status
    pub fn mock_raw(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("Content-Type", "application/json")
            .with_body(body)
            .create()
    }

    fn mock_list_endpoint(&mut self, path: &str, body: Value) -> Mock {
        self.server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("Content-Type", "application/json")
            .with_body(body.to_string())
            .create()
    }
}

/// Initialize env_logger once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wallet fixture in wire format
pub fn wallet_json(
    user_id: i64,
    address: &str,
    label: &str,
    pending_received_balance: &str,
    available_balance: &str,
) -> Value {
    json!({
        "user_id": user_id,
        "address": address,
        "label": label,
        "pending_received_balance": pending_received_balance,
        "available_balance": available_balance,
        "is_segwit": true,
    })
}

/// Wallet-list envelope in wire format
pub fn wallet_list_body(wallets: &[Value]) -> Value {
    json!({
        "data": {
            "network": "BTC",
            "addresses": wallets,
            "page": 1,
            "has_more": false,
        }
    })
}

/// Transaction fixture in wire format
pub fn transaction_json(txid: &str, total_amount_sent: &str) -> Value {
    json!({
        "txid": txid,
        "from_green_address": true,
        "time": 1595753763,
        "confirmations": 10,
        "total_amount_sent": total_amount_sent,
        "amounts_sent": [
            {"address": "2MsoGZPCmNMm3AWJC186FQXyoWGDZiUyuWW", "amount": total_amount_sent}
        ],
        "senders": ["2MsoGZPCmNMm3AWJC186FQXyoWGDZiUyuWW"],
        "confidence": 1.0,
        "propagated_by_nodes": null,
        "amounts_received": [
            {"address": "2N9zGCfYdRVaZW7LGwVeJVyuuhB5KoEfe7N", "amount": total_amount_sent}
        ],
    })
}

/// Transaction-list envelope in wire format
pub fn transaction_list_body(txs: &[Value]) -> Value {
    json!({
        "data": {
            "network": "BTC",
            "txs": txs,
        }
    })
}

/// Append a copy of the list's first transaction under a fresh 46-char txid
///
/// Mirrors the manual bookkeeping a scenario does after routing a send
/// through the stub: the stubbed list never grows on its own, so the
/// expected growth is simulated with an independent clone.
pub fn grow_transaction_list(transactions: &mut Vec<Transaction>) {
    let clone = transactions[0].with_txid("t".repeat(SYNTHETIC_TXID_LEN));
    transactions.push(clone);
}
