//! Local transfer bookkeeping
//!
//! Applies the balance effect of a transfer to wallet values held in
//! memory, so scenarios that route the send through the stub still have an
//! expected balance to assert against. Arithmetic is exact decimal end to
//! end; the server is never told about these mutations.

use crate::api::models::Wallet;
use rust_decimal::Decimal;

/// Errors that can occur while applying local bookkeeping
#[derive(Debug, thiserror::Error)]
pub enum BookkeepingError {
    #[error("Invalid balance value: {0}")]
    InvalidBalance(String),
}

/// Apply a transfer's effect to both wallets' available balances
///
/// `from_wallet` loses `fee + amount`, `to_wallet` gains `amount`.
pub fn apply_transfer_locally(
    from_wallet: &mut Wallet,
    to_wallet: &mut Wallet,
    fee: Decimal,
    amount: Decimal,
) -> Result<(), BookkeepingError> {
    let from_balance = parse_balance(&from_wallet.available_balance)?;
    let to_balance = parse_balance(&to_wallet.available_balance)?;

    from_wallet.available_balance = (from_balance - fee - amount).to_string();
    to_wallet.available_balance = (to_balance + amount).to_string();

    log::debug!(
        "Applied local transfer: from {} -> {}, to {} -> {}",
        from_balance,
        from_wallet.available_balance,
        to_balance,
        to_wallet.available_balance
    );

    Ok(())
}

fn parse_balance(value: &str) -> Result<Decimal, BookkeepingError> {
    value
        .parse()
        .map_err(|_| BookkeepingError::InvalidBalance(value.to_string()))
}
