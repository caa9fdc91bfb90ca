//! Stateless validation checks. Accounts call these before (amount checks)
//! or inside (floor check) their critical sections; the functions themselves
//! never touch a balance.

use rust_decimal::{Decimal, prelude::Zero};

use crate::account::{AccountError, MAX_TRANSACTION_AMOUNT};

pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), AccountError> {
    if value.is_empty() {
        return Err(AccountError::EmptyField { field });
    }
    Ok(())
}

pub fn require_non_negative(field: &'static str, amount: Decimal) -> Result<(), AccountError> {
    if amount < Decimal::zero() {
        return Err(AccountError::NegativeAmount { field, amount });
    }
    Ok(())
}

/// Validates a deposit/withdrawal/transfer amount against the sign and the
/// per-transaction ceiling.
pub fn check_transaction_amount(amount: Decimal) -> Result<(), AccountError> {
    require_non_negative("amount", amount)?;
    if amount > MAX_TRANSACTION_AMOUNT {
        return Err(AccountError::ExceedsLimit {
            amount,
            limit: MAX_TRANSACTION_AMOUNT,
        });
    }
    Ok(())
}

/// Fails when `available` sits below `floor`. The caller supplies a balance
/// it read under the account lock, so check and mutation stay one unit.
pub fn check_floor(available: Decimal, floor: Decimal) -> Result<(), AccountError> {
    if available < floor {
        return Err(AccountError::InsufficientFunds { available, floor });
    }
    Ok(())
}
