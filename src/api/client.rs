//! Block.io API client
//!
//! Translates the harness operations into HTTP GET requests against a
//! configurable base URL and maps the enveloped JSON responses back into
//! domain values. All calls are synchronous: one request, one response,
//! no retries.

use crate::api::mapper::{self, ParseError};
use crate::api::models::{
    Transaction, TransactionListEnvelope, TransactionType, Wallet, WalletListEnvelope,
};
use crate::config::HarnessConfig;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use std::time::Duration;

/// Default transport timeout for API requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur during client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} for url {url}")]
    Status { status: StatusCode, url: String },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("No wallet found with address {0}")]
    WalletNotFound(String),
}

/// Typed client for the Block.io v2 HTTP API
///
/// The base URL is injected at construction, so the same client code talks
/// to the live service or to a local stub server without URL rewriting.
pub struct BlockIoClient {
    /// Underlying blocking HTTP client
    http: Client,

    /// Base URL all request paths are appended to (always ends with `/`)
    base_url: String,
}

impl BlockIoClient {
    /// Create a client with the default timeout
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom transport timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Create a client pointed at the configured base URL
    pub fn from_config(config: &HarnessConfig) -> Result<Self, ClientError> {
        Self::new(&config.base_url)
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all non-archived wallets of the account, page 1
    ///
    /// An envelope without an address list normalizes to an empty vector.
    pub fn list_wallets(&self, api_key: &str) -> Result<Vec<Wallet>, ClientError> {
        let url = format!("{}get_my_addresses/?api_key={}&page=1", self.base_url, api_key);
        log::debug!("Get all non-archived wallets by url={}", url);

        let body = self.get(&url)?;
        unwrap_wallet_list(&body)
    }

    /// List all archived wallets of the account, page 1
    pub fn list_archived_wallets(&self, api_key: &str) -> Result<Vec<Wallet>, ClientError> {
        let url = format!(
            "{}get_my_archived_addresses/?api_key={}&page=1",
            self.base_url, api_key
        );
        log::debug!("Get archived wallets for {{{}}} by url={}", api_key, url);

        let body = self.get(&url)?;
        unwrap_wallet_list(&body)
    }

    /// Find the wallet with the given address
    ///
    /// Exact string match over [`Self::list_wallets`]; fails with
    /// [`ClientError::WalletNotFound`] when no wallet matches.
    pub fn find_wallet_by_address(
        &self,
        api_key: &str,
        address: &str,
    ) -> Result<Wallet, ClientError> {
        log::debug!("Get wallet by address={}", address);

        self.list_wallets(api_key)?
            .into_iter()
            .find(|wallet| wallet.address == address)
            .ok_or_else(|| ClientError::WalletNotFound(address.to_string()))
    }

    /// List transactions of the given direction
    pub fn list_transactions(
        &self,
        api_key: &str,
        transaction_type: TransactionType,
    ) -> Result<Vec<Transaction>, ClientError> {
        let url = format!(
            "{}get_transactions/?api_key={}&type={}",
            self.base_url,
            api_key,
            transaction_type.wire_value()
        );
        log::debug!("Get {} transactions by url={}", transaction_type, url);

        let body = self.get(&url)?;
        unwrap_transaction_list(&body)
    }

    /// Prepare a transaction with a custom network fee
    ///
    /// Returns the raw response body untouched; downstream code may want
    /// the unparsed envelope.
    pub fn prepare_transaction(
        &self,
        api_key: &str,
        fee: Decimal,
        amount: Decimal,
        destination_address: &str,
    ) -> Result<String, ClientError> {
        let url = format!(
            "{}prepare_transaction/?api_key={}&priority=custom&custom_network_fee={}&amounts={}&to_addresses={}",
            self.base_url, api_key, fee, amount, destination_address
        );
        log::debug!(
            "Prepare a transaction with next params: {{apiKey={}}}, {{fee={}}}, {{amount={}}}, {{destinationAddress={}}} by url={}",
            api_key,
            fee,
            amount,
            destination_address,
            url
        );

        self.get(&url)
    }

    /// Record the intent to finalize a prepared transaction
    ///
    /// Deliberately a no-op beyond the log line: signing and broadcast
    /// belong to the external wallet SDK, not to this client.
    pub fn create_transaction(
        &self,
        api_key: &str,
        fee: Decimal,
        amount: Decimal,
        destination_address: &str,
    ) {
        log::debug!(
            "The transaction was created for api={}, customFee={}, amount={}, destinationAddress={}",
            api_key,
            fee,
            amount,
            destination_address
        );
    }

    /// Prepare and then create a transaction
    ///
    /// Returns the prepare step's raw body.
    pub fn send_funds(
        &self,
        api_key: &str,
        fee: Decimal,
        amount: Decimal,
        destination_address: &str,
    ) -> Result<String, ClientError> {
        log::debug!(
            "Send funds with next params: {{apiKey={}}}, {{fee={}}}, {{amount={}}}, {{destinationAddress={}}}",
            api_key,
            fee,
            amount,
            destination_address
        );

        let body = self.prepare_transaction(api_key, fee, amount, destination_address)?;
        self.create_transaction(api_key, fee, amount, destination_address);
        Ok(body)
    }

    /// Request a new wallet with the given label
    ///
    /// The response is logged but not parsed; callers observe the new
    /// wallet by re-listing the account's wallets.
    pub fn create_wallet(&self, api_key: &str, label: &str) -> Result<(), ClientError> {
        let url = format!(
            "{}get_new_address/?api_key={}&label={}",
            self.base_url,
            api_key,
            urlencoding::encode(label)
        );
        log::debug!("Send a request to create a wallet={{{}}}", url);

        self.get(&url)?;
        Ok(())
    }

    /// Issue one GET request and return the raw body
    ///
    /// Non-2xx statuses and transport failures surface immediately.
    fn get(&self, url: &str) -> Result<String, ClientError> {
        log::debug!("Sending request for url={}", url);

        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        log::trace!("{}", body);

        Ok(body)
    }
}

/// Extract the wallet list from an enveloped response body
fn unwrap_wallet_list(body: &str) -> Result<Vec<Wallet>, ClientError> {
    let envelope: WalletListEnvelope = mapper::parse(body)?;
    Ok(envelope
        .data
        .and_then(|data| data.payload)
        .unwrap_or_default())
}

/// Extract the transaction list from an enveloped response body
fn unwrap_transaction_list(body: &str) -> Result<Vec<Transaction>, ClientError> {
    let envelope: TransactionListEnvelope = mapper::parse(body)?;
    Ok(envelope
        .data
        .and_then(|data| data.payload)
        .unwrap_or_default())
}

/// Base URLs are joined with request paths by plain concatenation,
/// so they must end with `/`
fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    }
}
